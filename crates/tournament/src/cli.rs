//! Command-line arguments

use std::path::PathBuf;

use crate::config::{RunConfig, DEFAULT_CONFIG_PATH};
use crate::error::{Result, RunnerError};

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(CliOptions),
    Help,
}

/// Flags that override the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub config: Option<PathBuf>,
    pub groups: Option<PathBuf>,
    pub exhibitions: Option<PathBuf>,
    pub seed: Option<u64>,
    pub json: Option<PathBuf>,
}

impl CliOptions {
    /// Configuration file to read, `tournament.toml` unless overridden
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Layer the flags on top of a loaded configuration
    pub fn apply(&self, config: &mut RunConfig) {
        if let Some(groups) = &self.groups {
            config.input.groups = groups.clone();
        }
        if let Some(exhibitions) = &self.exhibitions {
            config.input.exhibitions = exhibitions.clone();
        }
        if let Some(seed) = self.seed {
            config.simulation.seed = Some(seed);
        }
        if let Some(json) = &self.json {
            config.output.json = Some(json.clone());
        }
    }
}

pub fn print_usage() {
    println!("Basketball Tournament Simulator");
    println!();
    println!("Usage:");
    println!("  tournament [run] [--config FILE] [--groups FILE] [--exhibitions FILE]");
    println!("                   [--seed N] [--json FILE]");
    println!("  tournament help");
    println!();
    println!("Options:");
    println!("  --config, -c       TOML run configuration (default: {})", DEFAULT_CONFIG_PATH);
    println!("  --groups           Roster JSON, group name to teams");
    println!("  --exhibitions      Exhibition history JSON, team code to games");
    println!("  --seed, -s         Seed for a reproducible run");
    println!("  --json             Also write the full outcome as JSON");
    println!();
    println!("Set RUST_LOG=debug to see every simulated game.");
}

/// Parse arguments, without the program name.
///
/// A bare invocation means `run` with no overrides.
pub fn parse_args(args: &[String]) -> Result<Command> {
    let rest = match args.first().map(String::as_str) {
        None => return Ok(Command::Run(CliOptions::default())),
        Some("help" | "--help" | "-h") => return Ok(Command::Help),
        Some("run") => &args[1..],
        Some(_) => args,
    };

    let mut options = CliOptions::default();
    let mut i = 0;
    while i < rest.len() {
        let flag = rest[i].as_str();
        match flag {
            "--config" | "-c" => options.config = Some(PathBuf::from(value(rest, i)?)),
            "--groups" | "-g" => options.groups = Some(PathBuf::from(value(rest, i)?)),
            "--exhibitions" | "-e" => {
                options.exhibitions = Some(PathBuf::from(value(rest, i)?))
            }
            "--seed" | "-s" => {
                let raw = value(rest, i)?;
                let seed = raw.parse().map_err(|_| {
                    RunnerError::Usage(format!("--seed expects an unsigned integer, got {raw:?}"))
                })?;
                options.seed = Some(seed);
            }
            "--json" => options.json = Some(PathBuf::from(value(rest, i)?)),
            "help" | "--help" | "-h" => return Ok(Command::Help),
            other => return Err(RunnerError::Usage(format!("unknown argument: {other}"))),
        }
        i += 2;
    }

    Ok(Command::Run(options))
}

fn value(args: &[String], i: usize) -> Result<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| RunnerError::Usage(format!("{} requires a value", args[i])))
}
