//! End-to-end tournament run

use serde::{Deserialize, Serialize};

use crate::draw::{draw_quarterfinals, Draw};
use crate::error::Result;
use crate::group_stage::simulate_group_stage;
use crate::knockout::simulate_knockout;
use crate::random::RandomSource;
use crate::roster::validate_groups;
use crate::seeding::{build_seeding, Seeding};
use crate::simulator::{MatchSimulator, SimulationSettings};
use crate::standings::{rank_across_groups, rank_groups};
use crate::types::{Group, KnockoutStage, Medals, Team};

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;

/// Everything a finished run hands to the reporting layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TournamentOutcome {
    /// Groups in standings order, with their matches in play order
    pub groups: Vec<Group>,
    /// Cross-group ranking: winners, then runners-up, then third places
    pub ranking: Vec<Team>,
    pub seeding: Seeding,
    pub draw: Draw,
    pub knockout: KnockoutStage,
}

impl TournamentOutcome {
    pub fn medals(&self) -> Option<Medals> {
        self.knockout.medals()
    }

    /// Display name for a team code, falling back to the code itself
    pub fn team_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.groups
            .iter()
            .find_map(|g| g.team(code))
            .map(|t| t.name.as_str())
            .unwrap_or(code)
    }
}

/// A tournament ready to be played from its initial groups
#[derive(Debug, Clone)]
pub struct Tournament {
    groups: Vec<Group>,
    simulator: MatchSimulator,
}

impl Tournament {
    pub fn new(groups: Vec<Group>, settings: SimulationSettings) -> Self {
        Self {
            groups,
            simulator: MatchSimulator::new(settings),
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Play the whole tournament in one pass.
    ///
    /// Validation happens before any match is simulated. The knockout field
    /// is the promoted snapshots, so knockout form changes leave the group
    /// records untouched.
    pub fn run<R: RandomSource + ?Sized>(self, rng: &mut R) -> Result<TournamentOutcome> {
        let Tournament {
            mut groups,
            simulator,
        } = self;

        validate_groups(&groups)?;
        tracing::info!(groups = groups.len(), "starting group stage");

        simulate_group_stage(&mut groups, &simulator, rng);
        rank_groups(&mut groups);

        let ranking = rank_across_groups(&groups)?;
        let seeding = build_seeding(&ranking)?;
        let draw = draw_quarterfinals(&seeding);
        if !draw.conflicts.is_empty() {
            tracing::warn!(
                conflicts = draw.conflicts.len(),
                "quarterfinal draw kept same-group pairings"
            );
        }

        let mut field = seeding.promoted.clone();
        let knockout = simulate_knockout(&draw, &mut field, &simulator, rng)?;

        Ok(TournamentOutcome {
            groups,
            ranking,
            seeding,
            draw,
            knockout,
        })
    }
}
