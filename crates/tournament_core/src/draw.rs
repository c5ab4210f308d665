//! Quarterfinal draw with same-group avoidance

use serde::{Deserialize, Serialize};

use crate::seeding::Seeding;
use crate::types::{Fixture, Pot, Team};

#[cfg(test)]
#[path = "draw_tests.rs"]
mod draw_tests;

/// Pot pairings used to build the quarterfinals: (Pot D, Pot G) then (Pot E, Pot F)
pub const POT_PAIRINGS: [(usize, usize); 2] = [(0, 3), (1, 2)];

/// A quarterfinal left between two teams of the same origin group
/// because no valid swap existed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawConflict {
    pub team1: String,
    pub team2: String,
    pub group: String,
}

/// Quarterfinal fixtures plus any pairing that could not be separated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Draw {
    pub quarterfinals: [Fixture; 4],
    pub conflicts: Vec<DrawConflict>,
}

/// Draw the quarterfinals from the four seeding pots.
///
/// Pot D meets Pot G (QF1, QF2) and Pot E meets Pot F (QF3, QF4). Within a
/// pairing, position `i` of the first pot plays position `i` of the second
/// after [`separate_groups`] has had a chance to swap the second pot.
pub fn draw_quarterfinals(seeding: &Seeding) -> Draw {
    draw_from_pots(&seeding.pots)
}

pub fn draw_from_pots(pots: &[Pot; 4]) -> Draw {
    let mut conflicts = Vec::new();
    let [(d, g), (e, f)] = POT_PAIRINGS;
    let [qf1, qf2] = pair_pots(&pots[d], &pots[g], &mut conflicts);
    let [qf3, qf4] = pair_pots(&pots[e], &pots[f], &mut conflicts);

    Draw {
        quarterfinals: [qf1, qf2, qf3, qf4],
        conflicts,
    }
}

fn pair_pots(first: &Pot, second: &Pot, conflicts: &mut Vec<DrawConflict>) -> [Fixture; 2] {
    let top = &first.teams;
    let mut bottom = second.teams.clone();
    separate_groups(top, &mut bottom);

    for (a, b) in top.iter().zip(bottom.iter()) {
        if a.group == b.group {
            tracing::warn!(
                team1 = %a.code,
                team2 = %b.code,
                group = %a.group,
                "no swap separates same-group quarterfinal"
            );
            conflicts.push(DrawConflict {
                team1: a.code.clone(),
                team2: b.code.clone(),
                group: a.group.clone(),
            });
        }
    }

    [
        Fixture::new(&top[0].code, &bottom[0].code),
        Fixture::new(&top[1].code, &bottom[1].code),
    ]
}

/// Swap entries of `bottom` so that `top[i]` and `bottom[i]` come from
/// different groups where possible.
///
/// For each conflicting position `i`, the first `j` with
/// `top[i].group != bottom[j].group` and `top[j].group != bottom[i].group`
/// is swapped into place. Positions without such a `j` stay as they are.
/// Both slices have the same length.
pub fn separate_groups(top: &[Team], bottom: &mut [Team]) {
    debug_assert_eq!(top.len(), bottom.len());
    for i in 0..top.len() {
        if top[i].group != bottom[i].group {
            continue;
        }
        let swap = (0..bottom.len()).find(|&j| {
            top[i].group != bottom[j].group && top[j].group != bottom[i].group
        });
        if let Some(j) = swap {
            bottom.swap(i, j);
        }
    }
}
