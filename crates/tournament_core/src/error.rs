//! Errors surfaced by the tournament engine.
//!
//! Every failure is terminal for the run. Variants carry the team and stage
//! involved so the caller can report what went wrong without re-deriving it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of the tournament an error or warning belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Stage {
    Roster,
    GroupStage,
    Seeding,
    Quarterfinal,
    Semifinal,
    ThirdPlace,
    Final,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Roster => "roster",
            Stage::GroupStage => "group stage",
            Stage::Seeding => "seeding",
            Stage::Quarterfinal => "quarterfinal",
            Stage::Semifinal => "semifinal",
            Stage::ThirdPlace => "third-place match",
            Stage::Final => "final",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TournamentError {
    #[error("malformed exhibition score {raw:?} for team {team} (vs {opponent} on {date})")]
    MalformedScore {
        team: String,
        opponent: String,
        date: String,
        raw: String,
    },

    #[error("no form factor for team {name} ({code}): missing from exhibition history")]
    MissingFormFactor { name: String, code: String },

    #[error("group {group} has {found} teams, at least {required} are required")]
    GroupTooSmall {
        group: String,
        found: usize,
        required: usize,
    },

    #[error("{found} teams qualify for the knockout stage, at least {required} are required")]
    NotEnoughQualifiers { found: usize, required: usize },

    #[error("team code {code} appears more than once in the roster")]
    DuplicateTeam { code: String },

    #[error("team {code} is not part of the {stage} field")]
    UnknownTeam { code: String, stage: Stage },
}

pub type Result<T> = std::result::Result<T, TournamentError>;
