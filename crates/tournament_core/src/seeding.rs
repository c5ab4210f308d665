//! Promotion of the cross-group top eight into seeding pots

use serde::{Deserialize, Serialize};

use crate::error::{Result, TournamentError};
use crate::types::{Pot, Team};

#[cfg(test)]
#[path = "seeding_tests.rs"]
mod seeding_tests;

/// Teams advancing to the knockout stage
pub const PROMOTED_TEAMS: usize = 8;

/// Pot labels in seeding order
pub const POT_NAMES: [&str; 4] = ["Pot D", "Pot E", "Pot F", "Pot G"];

/// Outcome of the seeding step
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seeding {
    /// Top eight of the cross-group ranking, in ranking order
    pub promoted: Vec<Team>,
    /// Ninth-ranked team, if the ranking had one
    pub eliminated: Option<Team>,
    /// Positions 1-2, 3-4, 5-6 and 7-8 of the promoted list
    pub pots: [Pot; 4],
}

/// Split the cross-group ranking into promoted teams and pots.
///
/// `ranking` is the concatenated (winners, runners-up, third places) list.
/// Pot composition is fixed: consecutive pairs of the top eight.
pub fn build_seeding(ranking: &[Team]) -> Result<Seeding> {
    if ranking.len() < PROMOTED_TEAMS {
        return Err(TournamentError::NotEnoughQualifiers {
            found: ranking.len(),
            required: PROMOTED_TEAMS,
        });
    }

    let promoted = ranking[..PROMOTED_TEAMS].to_vec();
    let eliminated = ranking.get(PROMOTED_TEAMS).cloned();

    let pot = |index: usize| Pot {
        name: POT_NAMES[index].to_string(),
        teams: [promoted[index * 2].clone(), promoted[index * 2 + 1].clone()],
    };
    let pots = [pot(0), pot(1), pot(2), pot(3)];

    if let Some(team) = &eliminated {
        tracing::info!(eliminated = %team.code, "ninth-ranked team eliminated");
    }
    tracing::info!(
        pots = ?pots
            .iter()
            .map(|p| format!("{}: {}/{}", p.name, p.teams[0].code, p.teams[1].code))
            .collect::<Vec<_>>(),
        "pots drawn up"
    );

    Ok(Seeding {
        promoted,
        eliminated,
        pots,
    })
}
