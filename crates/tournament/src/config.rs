//! Run configuration loaded from a TOML file

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use tournament_core::{SimulationSettings, DEFAULT_TIE_REDRAW_LIMIT};

use crate::error::{Result, RunnerError};

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

/// Configuration file picked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "tournament.toml";

const SAMPLE_GROUPS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/groups.json");
const SAMPLE_EXHIBITIONS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/exhibitions.json");

/// Complete run configuration.
///
/// Every section and key is optional; missing values fall back to the
/// bundled sample data and the default simulation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub input: InputConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Roster file, group name to list of teams
    pub groups: PathBuf,
    /// Exhibition history file, team code to list of games
    pub exhibitions: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            groups: PathBuf::from(SAMPLE_GROUPS),
            exhibitions: PathBuf::from(SAMPLE_EXHIBITIONS),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Seed for the random source; a fresh one is drawn when absent
    pub seed: Option<u64>,
    pub tie_redraw_limit: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tie_redraw_limit: DEFAULT_TIE_REDRAW_LIMIT,
        }
    }
}

impl SimulationConfig {
    pub fn settings(&self) -> SimulationSettings {
        SimulationSettings {
            tie_redraw_limit: self.tie_redraw_limit,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Where to write the full outcome as JSON, if anywhere
    pub json: Option<PathBuf>,
}

impl RunConfig {
    /// Parse a configuration from TOML text. `path` is only used for errors.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| RunnerError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a configuration file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| RunnerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Load a configuration file, using defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }
}
