//! Single-match simulation for group and knockout play

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::types::{MatchResult, Team};

#[cfg(test)]
#[path = "simulator_tests.rs"]
mod simulator_tests;

/// Winner's score range in a group game
pub const GROUP_WINNER_MIN: u32 = 80;
pub const GROUP_WINNER_MAX: u32 = 100;
/// Lowest possible losing score in a group game
pub const GROUP_LOSER_MIN: u32 = 70;

/// Base knockout score and the width of its uniform draw
pub const KNOCKOUT_BASE: u32 = 80;
pub const KNOCKOUT_SPREAD: u32 = 20;

/// Default cap on knockout tie redraws before overtime is decided by a coin flip
pub const DEFAULT_TIE_REDRAW_LIMIT: u32 = 100;

/// Tunables for a simulation run
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationSettings {
    /// Maximum number of full redraws when a knockout game ends level
    pub tie_redraw_limit: u32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tie_redraw_limit: DEFAULT_TIE_REDRAW_LIMIT,
        }
    }
}

/// Probability that `team1` wins a group game against `team2`.
///
/// `0.5 + (rankingDiff + 10 * formFactorDiff) / 100`, both differences
/// taken as team1 minus team2. The value is not clamped; a draw below it
/// always means team1 wins.
pub fn group_win_probability(team1: &Team, team2: &Team) -> f64 {
    let ranking_diff = f64::from(team1.ranking) - f64::from(team2.ranking);
    let form_diff = team1.form_factor - team2.form_factor;
    0.5 + (ranking_diff + form_diff * 10.0) / 100.0
}

/// Knockout score bonus from form: `floor(10 * formFactor)`, never negative
pub fn form_bonus(team: &Team) -> u32 {
    (team.form_factor * 10.0).floor().max(0.0) as u32
}

/// Simulates individual games and applies the form-factor adjustment.
#[derive(Debug, Clone, Default)]
pub struct MatchSimulator {
    settings: SimulationSettings,
}

impl MatchSimulator {
    pub fn new(settings: SimulationSettings) -> Self {
        Self { settings }
    }

    /// Play a group game.
    ///
    /// The designated winner scores in `[80, 100]` and the loser in
    /// `[70, winner - 1]`, so group games cannot end level.
    pub fn group_match<R: RandomSource + ?Sized>(
        &self,
        team1: &mut Team,
        team2: &mut Team,
        rng: &mut R,
    ) -> MatchResult {
        let probability = group_win_probability(team1, team2);
        let team1_wins = rng.unit() < probability;

        let winner_score = rng.between(GROUP_WINNER_MIN, GROUP_WINNER_MAX);
        let loser_score = rng.between(GROUP_LOSER_MIN, winner_score - 1);

        let (score1, score2) = if team1_wins {
            (winner_score, loser_score)
        } else {
            (loser_score, winner_score)
        };

        team1.adjust_form(team1_wins);
        team2.adjust_form(!team1_wins);

        tracing::debug!(
            team1 = %team1.code,
            team2 = %team2.code,
            score1,
            score2,
            probability,
            "group match"
        );

        MatchResult {
            team1: team1.code.clone(),
            team2: team2.code.clone(),
            score1,
            score2,
        }
    }

    /// Play a knockout game, which always produces a winner.
    ///
    /// Each side scores `uniform[0, 20] + floor(10 * formFactor) + 80`. Level
    /// scores are redrawn as plain `uniform[80, 100]` pairs up to the
    /// configured limit; if still level, a coin flip awards one extra point.
    pub fn knockout_match<R: RandomSource + ?Sized>(
        &self,
        team1: &mut Team,
        team2: &mut Team,
        rng: &mut R,
    ) -> MatchResult {
        let mut score1 = rng.between(0, KNOCKOUT_SPREAD) + form_bonus(team1) + KNOCKOUT_BASE;
        let mut score2 = rng.between(0, KNOCKOUT_SPREAD) + form_bonus(team2) + KNOCKOUT_BASE;

        let mut redraws = 0;
        while score1 == score2 && redraws < self.settings.tie_redraw_limit {
            score1 = rng.between(KNOCKOUT_BASE, KNOCKOUT_BASE + KNOCKOUT_SPREAD);
            score2 = rng.between(KNOCKOUT_BASE, KNOCKOUT_BASE + KNOCKOUT_SPREAD);
            redraws += 1;
        }

        if score1 == score2 {
            let team1_takes_overtime = rng.unit() < 0.5;
            tracing::warn!(
                team1 = %team1.code,
                team2 = %team2.code,
                redraws,
                "knockout tie survived the redraw limit, deciding by coin flip"
            );
            if team1_takes_overtime {
                score1 += 1;
            } else {
                score2 += 1;
            }
        }

        let team1_wins = score1 > score2;
        team1.adjust_form(team1_wins);
        team2.adjust_form(!team1_wins);

        tracing::debug!(
            team1 = %team1.code,
            team2 = %team2.code,
            score1,
            score2,
            redraws,
            "knockout match"
        );

        MatchResult {
            team1: team1.code.clone(),
            team2: team2.code.clone(),
            score1,
            score2,
        }
    }
}

/// Borrow two distinct teams of a slice mutably at once
pub(crate) fn pair_mut(teams: &mut [Team], i: usize, j: usize) -> (&mut Team, &mut Team) {
    assert_ne!(i, j, "a team cannot play itself");
    if i < j {
        let (left, right) = teams.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = teams.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
