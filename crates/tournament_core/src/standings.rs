//! Standings order within a group and across groups.
//!
//! The same comparator is used in both places: league points, then point
//! differential, then the direct head-to-head result. Teams still level
//! after that keep their incoming order. There is no further tiebreak, in
//! particular no mini-table for three or more mutually level teams.

use std::cmp::Ordering;

use crate::error::{Result, TournamentError};
use crate::types::{Group, HeadToHead, Team};

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;

/// Finishing positions per group that feed the cross-group ranking
pub const CROSS_GROUP_PLACES: usize = 3;

/// Order two teams by standings. `Less` means `a` ranks ahead of `b`.
pub fn compare_teams(a: &Team, b: &Team) -> Ordering {
    b.league_points()
        .cmp(&a.league_points())
        .then_with(|| b.point_differential().cmp(&a.point_differential()))
        .then_with(|| compare_head_to_head(a, b))
}

/// Direct-encounter tiebreak.
///
/// Only a matching win/loss pair decides. Draws, missing entries, or
/// contradictory records are a tie.
pub fn compare_head_to_head(a: &Team, b: &Team) -> Ordering {
    match (a.result_against(&b.code), b.result_against(&a.code)) {
        (Some(HeadToHead::Win), Some(HeadToHead::Loss)) => Ordering::Less,
        (Some(HeadToHead::Loss), Some(HeadToHead::Win)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Sort teams into standings order, keeping the incoming order of ties.
///
/// Uses a stable insertion sort: head-to-head can form cycles among level
/// teams, and the result must stay well defined when it does.
pub fn rank_teams(teams: &mut [Team]) {
    for i in 1..teams.len() {
        let mut j = i;
        while j > 0 && compare_teams(&teams[j - 1], &teams[j]) == Ordering::Greater {
            teams.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Rank every group's teams in place
pub fn rank_groups(groups: &mut [Group]) {
    for group in groups.iter_mut() {
        rank_teams(&mut group.teams);
        tracing::debug!(
            group = %group.name,
            leader = group.teams.first().map(|t| t.code.as_str()).unwrap_or("-"),
            "group ranked"
        );
    }
}

/// Cross-group ranking of already ranked groups.
///
/// All group winners are ranked among themselves, then all runners-up,
/// then all third-placed teams; the three lists are concatenated in that
/// order. Entries are snapshots tagged with their origin group.
pub fn rank_across_groups(groups: &[Group]) -> Result<Vec<Team>> {
    let mut places: Vec<Vec<Team>> = vec![Vec::with_capacity(groups.len()); CROSS_GROUP_PLACES];

    for group in groups {
        if group.teams.len() < CROSS_GROUP_PLACES {
            return Err(TournamentError::GroupTooSmall {
                group: group.name.clone(),
                found: group.teams.len(),
                required: CROSS_GROUP_PLACES,
            });
        }
        for (place, bucket) in places.iter_mut().enumerate() {
            let mut snapshot = group.teams[place].clone();
            snapshot.group = group.name.clone();
            bucket.push(snapshot);
        }
    }

    let mut ranking = Vec::with_capacity(groups.len() * CROSS_GROUP_PLACES);
    for mut bucket in places {
        rank_teams(&mut bucket);
        ranking.extend(bucket);
    }
    Ok(ranking)
}
