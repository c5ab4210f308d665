//! Roster and exhibition-history input files
//!
//! Both files are JSON objects keyed by group name or team code:
//!
//! ```json
//! { "A": [ { "Team": "Canada", "ISOCode": "CAN", "FIBARanking": 7 } ] }
//! { "CAN": [ { "Date": "06/07/24", "Opponent": "GER", "Result": "86-79" } ] }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use tournament_core::{Exhibition, ExhibitionHistory, RosterEntry, RosterGroup};

use crate::error::{Result, RunnerError};

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;

/// One team as written in the roster file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamRecord {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "ISOCode")]
    pub iso_code: String,
    #[serde(rename = "FIBARanking")]
    pub fiba_ranking: u32,
}

/// One exhibition game as written in the history file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExhibitionRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Opponent")]
    pub opponent: String,
    #[serde(rename = "Result")]
    pub result: String,
}

impl From<TeamRecord> for RosterEntry {
    fn from(record: TeamRecord) -> Self {
        RosterEntry {
            name: record.team,
            code: record.iso_code,
            ranking: record.fiba_ranking,
        }
    }
}

impl From<ExhibitionRecord> for Exhibition {
    fn from(record: ExhibitionRecord) -> Self {
        Exhibition {
            date: record.date,
            opponent: record.opponent,
            result: record.result,
        }
    }
}

/// Parse a roster document. Groups come back sorted by name.
pub fn parse_groups(text: &str, path: &Path) -> Result<Vec<RosterGroup>> {
    let raw: BTreeMap<String, Vec<TeamRecord>> = parse_json(text, path)?;
    Ok(raw
        .into_iter()
        .map(|(name, teams)| RosterGroup {
            name,
            teams: teams.into_iter().map(RosterEntry::from).collect(),
        })
        .collect())
}

/// Parse an exhibition-history document
pub fn parse_exhibitions(text: &str, path: &Path) -> Result<ExhibitionHistory> {
    let raw: BTreeMap<String, Vec<ExhibitionRecord>> = parse_json(text, path)?;
    Ok(raw
        .into_iter()
        .map(|(code, games)| (code, games.into_iter().map(Exhibition::from).collect()))
        .collect())
}

pub fn load_groups(path: &Path) -> Result<Vec<RosterGroup>> {
    let groups = parse_groups(&read(path)?, path)?;
    tracing::info!(
        path = %path.display(),
        groups = groups.len(),
        teams = groups.iter().map(|g| g.teams.len()).sum::<usize>(),
        "roster loaded"
    );
    Ok(groups)
}

pub fn load_exhibitions(path: &Path) -> Result<ExhibitionHistory> {
    let history = parse_exhibitions(&read(path)?, path)?;
    tracing::info!(path = %path.display(), teams = history.len(), "exhibition history loaded");
    Ok(history)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| RunnerError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(text: &str, path: &Path) -> Result<T> {
    serde_json::from_str(text).map_err(|source| RunnerError::Json {
        path: path.to_path_buf(),
        source,
    })
}
