//! Errors from loading input, configuration and writing output

use std::path::PathBuf;

use tournament_core::TournamentError;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration in {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Tournament(#[from] TournamentError),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
