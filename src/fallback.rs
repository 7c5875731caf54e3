//! Random placement for house counts too large for the exhaustive scan.
//!
//! No scoring happens here. Each house gets uniformly drawn coordinates,
//! redrawn while the policy rejects them.

use std::time::Instant;

use log::warn;

use crate::occupancy::Occupancy;
use crate::prng::Pcg32;
use crate::types::{DuplicatePolicy, Grid, Position};

#[derive(Debug, Clone)]
pub struct FallbackOutcome {
    pub occupancy: Occupancy,
    pub interrupted: bool,
}

fn draw(rng: &mut Pcg32, grid: &Grid) -> Position {
    let x = rng.next_below(grid.width());
    let y = rng.next_below(grid.height());
    Position::new(x, y)
}

fn rejects(policy: DuplicatePolicy, grid: &Grid, occupancy: &Occupancy, pos: Position) -> bool {
    match policy {
        // Each slot starts out holding the origin and the draw is only
        // compared against that, so the origin is never picked and
        // repeats across slots go through.
        DuplicatePolicy::LegacySlot => grid.area() > 1 && pos == Position::default(),
        DuplicatePolicy::Distinct => occupancy.is_occupied(pos),
    }
}

/// Place up to `num_houses` houses at random cells.
pub fn place_random(
    grid: &Grid,
    num_houses: usize,
    policy: DuplicatePolicy,
    rng: &mut Pcg32,
    deadline: Option<Instant>,
) -> FallbackOutcome {
    let mut occupancy = Occupancy::new(grid, num_houses);
    let mut interrupted = false;

    while occupancy.len() < num_houses {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            warn!(
                "time budget exhausted after {}/{} houses",
                occupancy.len(),
                num_houses
            );
            interrupted = true;
            break;
        }
        if policy == DuplicatePolicy::Distinct && occupancy.free_cells() == 0 {
            warn!(
                "no free cell left after {}/{} houses",
                occupancy.len(),
                num_houses
            );
            break;
        }

        let pos = loop {
            let pos = draw(rng, grid);
            if !rejects(policy, grid, &occupancy, pos) {
                break pos;
            }
        };
        occupancy.push(pos);
    }

    FallbackOutcome {
        occupancy,
        interrupted,
    }
}
