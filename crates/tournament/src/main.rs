//! Tournament CLI
//!
//! Simulate the group stage and knockout bracket and print the report.

use anyhow::Context;
use std::env;
use tournament::{
    parse_args, print_report, print_usage, save_outcome, simulate, CliOptions, Command, RunConfig,
};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(options: &CliOptions) -> anyhow::Result<()> {
    let config_path = options.config_path();
    let mut config = if options.config.is_some() {
        RunConfig::load(&config_path)
    } else {
        RunConfig::load_or_default(&config_path)
    }
    .with_context(|| format!("loading configuration {}", config_path.display()))?;
    options.apply(&mut config);

    let run = simulate(&config).context("simulating tournament")?;
    print_report(&run.outcome);
    println!();
    println!("Seed: {}", run.seed);

    if let Some(path) = &config.output.json {
        save_outcome(&run.outcome, path)
            .with_context(|| format!("saving outcome to {}", path.display()))?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    match parse_args(&args) {
        Ok(Command::Help) => {
            print_usage();
            Ok(())
        }
        Ok(Command::Run(options)) => run(&options),
        Err(e) => {
            print_usage();
            Err(e.into())
        }
    }
}
