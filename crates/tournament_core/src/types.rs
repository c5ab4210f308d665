//! Records shared by every stage of the tournament.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lower and upper bound for a team's form factor during the tournament.
pub const FORM_FACTOR_MIN: f64 = 0.0;
pub const FORM_FACTOR_MAX: f64 = 2.0;

/// Amount a single result moves the form factor.
pub const FORM_FACTOR_STEP: f64 = 0.1;

/// Outcome of a single game from one team's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HeadToHead {
    Win,
    Draw,
    Loss,
}

impl HeadToHead {
    pub fn flipped(self) -> Self {
        match self {
            HeadToHead::Win => HeadToHead::Loss,
            HeadToHead::Loss => HeadToHead::Win,
            HeadToHead::Draw => HeadToHead::Draw,
        }
    }
}

/// A national team and its running group-stage record.
///
/// Statistics and form factor are updated in place as matches are
/// simulated. The short `code` is the team's identity everywhere else in
/// the crate (head-to-head keys, fixtures, results).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub name: String,
    pub code: String,
    /// Fixed ranking, lower is stronger
    pub ranking: u32,
    pub form_factor: f64,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub points_scored: u32,
    pub points_allowed: u32,
    /// Originating group label
    pub group: String,
    /// Result against each opponent, keyed by opponent code
    pub head_to_head: HashMap<String, HeadToHead>,
}

impl Team {
    pub fn new(name: &str, code: &str, ranking: u32, form_factor: f64, group: &str) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            ranking,
            form_factor,
            wins: 0,
            losses: 0,
            draws: 0,
            points_scored: 0,
            points_allowed: 0,
            group: group.to_string(),
            head_to_head: HashMap::new(),
        }
    }

    /// League points: two for a win, one for a draw
    pub fn league_points(&self) -> u32 {
        self.wins * 2 + self.draws
    }

    pub fn point_differential(&self) -> i64 {
        i64::from(self.points_scored) - i64::from(self.points_allowed)
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Recorded result against `opponent`, if they have met
    pub fn result_against(&self, opponent: &str) -> Option<HeadToHead> {
        self.head_to_head.get(opponent).copied()
    }

    /// Nudge the form factor after a game and clamp it into range.
    pub fn adjust_form(&mut self, won: bool) {
        let delta = if won {
            FORM_FACTOR_STEP
        } else {
            -FORM_FACTOR_STEP
        };
        self.form_factor = (self.form_factor + delta).clamp(FORM_FACTOR_MIN, FORM_FACTOR_MAX);
    }
}

/// A pairing that has not been played yet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fixture {
    pub team1: String,
    pub team2: String,
}

impl Fixture {
    pub fn new(team1: &str, team2: &str) -> Self {
        Self {
            team1: team1.to_string(),
            team2: team2.to_string(),
        }
    }
}

/// Final score of a played match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub team1: String,
    pub team2: String,
    pub score1: u32,
    pub score2: u32,
}

impl MatchResult {
    /// Code of the winning team, `None` on level scores
    pub fn winner(&self) -> Option<&str> {
        match self.score1.cmp(&self.score2) {
            std::cmp::Ordering::Greater => Some(&self.team1),
            std::cmp::Ordering::Less => Some(&self.team2),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Code of the losing team, `None` on level scores
    pub fn loser(&self) -> Option<&str> {
        match self.score1.cmp(&self.score2) {
            std::cmp::Ordering::Greater => Some(&self.team2),
            std::cmp::Ordering::Less => Some(&self.team1),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// A round-robin group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Group {
    pub name: String,
    /// Teams in roster order until ranked, standings order afterwards
    pub teams: Vec<Team>,
    /// Matches in the order they were simulated
    pub matches: Vec<MatchResult>,
}

impl Group {
    pub fn new(name: &str, teams: Vec<Team>) -> Self {
        Self {
            name: name.to_string(),
            teams,
            matches: Vec::new(),
        }
    }

    pub fn team(&self, code: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.code == code)
    }
}

/// A two-team seeding bucket for the knockout draw
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pot {
    pub name: String,
    pub teams: [Team; 2],
}

/// Every knockout game, populated once the bracket has been played.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnockoutStage {
    pub quarterfinals: Vec<MatchResult>,
    pub semifinals: Vec<MatchResult>,
    pub third_place: MatchResult,
    pub final_match: MatchResult,
}

/// Podium derived from the final and the third-place match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Medals {
    pub gold: String,
    pub silver: String,
    pub bronze: String,
}

impl KnockoutStage {
    /// Podium, `None` only if a medal game somehow ended level
    pub fn medals(&self) -> Option<Medals> {
        Some(Medals {
            gold: self.final_match.winner()?.to_string(),
            silver: self.final_match.loser()?.to_string(),
            bronze: self.third_place.winner()?.to_string(),
        })
    }
}
