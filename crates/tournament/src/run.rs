//! One complete simulation from configuration to outcome

use rand::rngs::StdRng;
use rand::SeedableRng;

use tournament_core::{build_groups, calculate_form_factors, Tournament, TournamentOutcome};

use crate::config::RunConfig;
use crate::error::Result;
use crate::input::{load_exhibitions, load_groups};

/// A finished run and the seed that reproduces it
#[derive(Debug, Clone)]
pub struct SimulationRun {
    pub seed: u64,
    pub outcome: TournamentOutcome,
}

/// Load the inputs named by `config` and play the tournament.
///
/// Form factors are computed from the exhibition history and handed
/// straight to roster construction. Without a configured seed a fresh one
/// is drawn and logged so the run can be repeated.
pub fn simulate(config: &RunConfig) -> Result<SimulationRun> {
    let history = load_exhibitions(&config.input.exhibitions)?;
    let form_factors = calculate_form_factors(&history)?;
    let groups = build_groups(&load_groups(&config.input.groups)?, &form_factors)?;

    let seed = match config.simulation.seed {
        Some(seed) => seed,
        None => {
            let seed = rand::random::<u64>();
            tracing::info!(seed, "no seed configured, drew a fresh one");
            seed
        }
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let outcome = Tournament::new(groups, config.simulation.settings()).run(&mut rng)?;

    if let Some(medals) = outcome.medals() {
        tracing::info!(
            seed,
            gold = %medals.gold,
            silver = %medals.silver,
            bronze = %medals.bronze,
            "tournament complete"
        );
    }

    Ok(SimulationRun { seed, outcome })
}
