//! Round-robin play inside each group

use crate::random::RandomSource;
use crate::simulator::{pair_mut, MatchSimulator};
use crate::types::{Group, HeadToHead, MatchResult, Team};

#[cfg(test)]
#[path = "group_stage_tests.rs"]
mod group_stage_tests;

/// Play every unordered pair of teams in every group exactly once.
///
/// Pairs are visited in index order (i, j) with i < j, which fixes the
/// listing order of `group.matches`. Rankings never depend on it.
pub fn simulate_group_stage<R: RandomSource + ?Sized>(
    groups: &mut [Group],
    simulator: &MatchSimulator,
    rng: &mut R,
) {
    for group in groups.iter_mut() {
        simulate_group(group, simulator, rng);
    }
}

/// Play one group's round robin
pub fn simulate_group<R: RandomSource + ?Sized>(
    group: &mut Group,
    simulator: &MatchSimulator,
    rng: &mut R,
) {
    let count = group.teams.len();
    for i in 0..count {
        for j in (i + 1)..count {
            let (team1, team2) = pair_mut(&mut group.teams, i, j);
            let result = simulator.group_match(team1, team2, rng);
            record_result(team1, team2, &result);
            group.matches.push(result);
        }
    }

    tracing::info!(
        group = %group.name,
        teams = count,
        matches = group.matches.len(),
        "group round robin complete"
    );
}

/// Fold a group result into both teams' records and head-to-head maps.
pub fn record_result(team1: &mut Team, team2: &mut Team, result: &MatchResult) {
    let outcome = match result.score1.cmp(&result.score2) {
        std::cmp::Ordering::Greater => {
            team1.wins += 1;
            team2.losses += 1;
            HeadToHead::Win
        }
        std::cmp::Ordering::Less => {
            team1.losses += 1;
            team2.wins += 1;
            HeadToHead::Loss
        }
        std::cmp::Ordering::Equal => {
            team1.draws += 1;
            team2.draws += 1;
            HeadToHead::Draw
        }
    };

    team1.head_to_head.insert(team2.code.clone(), outcome);
    team2.head_to_head.insert(team1.code.clone(), outcome.flipped());

    team1.points_scored += result.score1;
    team1.points_allowed += result.score2;
    team2.points_scored += result.score2;
    team2.points_allowed += result.score1;
}
