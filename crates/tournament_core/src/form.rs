//! Starting form factors derived from exhibition results

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, TournamentError};
use crate::types::FORM_FACTOR_STEP;

#[cfg(test)]
#[path = "form_tests.rs"]
mod form_tests;

/// Form factor of a team with no exhibition games
pub const BASE_FORM_FACTOR: f64 = 1.0;

/// A single pre-tournament exhibition game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exhibition {
    pub date: String,
    pub opponent: String,
    /// "teamScore-opponentScore"
    pub result: String,
}

impl Exhibition {
    pub fn new(date: &str, opponent: &str, result: &str) -> Self {
        Self {
            date: date.to_string(),
            opponent: opponent.to_string(),
            result: result.to_string(),
        }
    }
}

/// Exhibition history keyed by team code, each list in chronological order
pub type ExhibitionHistory = BTreeMap<String, Vec<Exhibition>>;

/// Starting form factor keyed by team code
pub type FormFactors = BTreeMap<String, f64>;

/// Compute starting form factors.
///
/// Every team starts at [`BASE_FORM_FACTOR`] and moves one step up per win
/// and one step down per loss. No clamping happens here.
pub fn calculate_form_factors(history: &ExhibitionHistory) -> Result<FormFactors> {
    let mut factors = FormFactors::new();

    for (team, games) in history {
        let mut form = BASE_FORM_FACTOR;
        for game in games {
            let (own, opponent) = parse_score(team, game)?;
            if own > opponent {
                form += FORM_FACTOR_STEP;
            } else if own < opponent {
                form -= FORM_FACTOR_STEP;
            }
        }
        tracing::debug!(team = %team, games = games.len(), form, "form factor computed");
        factors.insert(team.clone(), form);
    }

    Ok(factors)
}

/// Parse an "X-Y" score string from `team`'s perspective
pub fn parse_score(team: &str, game: &Exhibition) -> Result<(u32, u32)> {
    let malformed = || TournamentError::MalformedScore {
        team: team.to_string(),
        opponent: game.opponent.clone(),
        date: game.date.clone(),
        raw: game.result.clone(),
    };

    let (own, opponent) = game.result.split_once('-').ok_or_else(malformed)?;
    let own = own.trim().parse::<u32>().map_err(|_| malformed())?;
    let opponent = opponent.trim().parse::<u32>().map_err(|_| malformed())?;
    Ok((own, opponent))
}
