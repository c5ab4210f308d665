//! Runner for the national-team tournament simulator
//!
//! This crate provides:
//! - Roster and exhibition-history loading from JSON
//! - Run configuration from a TOML file plus command-line overrides
//! - A plain-text report and a JSON dump of the finished tournament
//!
//! # Usage
//!
//! ```bash
//! # Simulate with the bundled sample data
//! cargo run -p tournament
//!
//! # Reproducible run with custom input, saving the outcome
//! cargo run -p tournament -- run --groups groups.json --exhibitions exhibitions.json --seed 42 --json outcome.json
//! ```

mod cli;
mod config;
mod error;
mod input;
mod report;
mod run;

pub use cli::*;
pub use config::*;
pub use error::*;
pub use input::*;
pub use report::*;
pub use run::*;
