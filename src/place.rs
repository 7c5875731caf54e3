//! Strategy selection and the engine entry point.

use std::time::Instant;

use log::info;

use crate::fallback::place_random;
use crate::prng::{clock_seed, Pcg32};
use crate::search::place_exhaustive;
use crate::types::{Grid, PlacementParams, PlacementResult, Strategy, EXHAUSTIVE_THRESHOLD};

/// Exhaustive search up to the threshold, random placement above it.
pub fn select_strategy(num_houses: usize) -> Strategy {
    if num_houses <= EXHAUSTIVE_THRESHOLD {
        Strategy::Exhaustive
    } else {
        Strategy::Random
    }
}

/// Place `params.num_houses` houses on `grid`.
///
/// Inputs are assumed validated. All run state lives in this call;
/// nothing outlives it.
pub fn place(grid: &Grid, params: &PlacementParams) -> PlacementResult {
    let started = Instant::now();
    let deadline = params.time_budget().map(|b| started + b);
    let strategy = select_strategy(params.num_houses);
    info!(
        "placing {} houses on {}x{} grid ({:?})",
        params.num_houses,
        grid.width(),
        grid.height(),
        strategy
    );

    let result = match strategy {
        Strategy::Exhaustive => {
            let out = place_exhaustive(grid, params.num_houses, params.scan, deadline);
            PlacementResult {
                strategy,
                positions: out.occupancy.into_positions(),
                step_scores: out.step_scores,
                seed: None,
                interrupted: out.interrupted,
            }
        }
        Strategy::Random => {
            let seed = params.seed.unwrap_or_else(clock_seed);
            let mut rng = Pcg32::new(seed, 0);
            let out = place_random(grid, params.num_houses, params.duplicates, &mut rng, deadline);
            PlacementResult {
                strategy,
                positions: out.occupancy.into_positions(),
                step_scores: Vec::new(),
                seed: Some(seed),
                interrupted: out.interrupted,
            }
        }
    };

    info!(
        "placed {} houses in {:.3}s",
        result.positions.len(),
        started.elapsed().as_secs_f64()
    );
    result
}
