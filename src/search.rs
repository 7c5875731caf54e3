//! Exhaustive greedy search.
//!
//! Places houses one at a time. Each placement scans every free cell,
//! scores it against all houses placed so far and commits the best one.
//! Earlier placements are never revisited.
//!
//! The scan runs either serially or as a rayon fold over grid rows.
//! Both produce the same cell: workers keep a local best and the merge
//! prefers the higher score, then the lower row-major index, which is
//! exactly what a sequential strict-greater scan keeps.

use std::time::Instant;

use log::{debug, warn};
use rayon::prelude::*;

use crate::occupancy::Occupancy;
use crate::scoring::happiness;
use crate::types::{Grid, Position, ScanMode};

/// Best cell seen by a scan: its score and row-major index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub score: u64,
    pub index: usize,
}

/// Merge two partial bests. Ties go to the earlier cell in scan order.
fn merge(a: Option<Candidate>, b: Option<Candidate>) -> Option<Candidate> {
    match (a, b) {
        (None, x) | (x, None) => x,
        (Some(a), Some(b)) => {
            if b.score > a.score || (b.score == a.score && b.index < a.index) {
                Some(b)
            } else {
                Some(a)
            }
        }
    }
}

fn scan_row(grid: &Grid, occupancy: &Occupancy, y: usize) -> Option<Candidate> {
    let width = grid.width();
    let placed = occupancy.positions();
    let mut best: Option<Candidate> = None;
    for x in 0..width {
        let index = y * width + x;
        if occupancy.is_occupied_index(index) {
            continue;
        }
        let score = happiness(grid, Position::new(x, y), placed);
        if best.map_or(true, |b| score > b.score) {
            best = Some(Candidate { score, index });
        }
    }
    best
}

/// Highest-scoring free cell, or `None` when the grid is full.
pub fn best_free_cell(
    grid: &Grid,
    occupancy: &Occupancy,
    scan: ScanMode,
) -> Option<Candidate> {
    match scan {
        ScanMode::Serial => (0..grid.height())
            .map(|y| scan_row(grid, occupancy, y))
            .fold(None, merge),
        ScanMode::Parallel => (0..grid.height())
            .into_par_iter()
            .fold(|| None, |acc, y| merge(acc, scan_row(grid, occupancy, y)))
            .reduce(|| None, merge),
    }
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub occupancy: Occupancy,
    pub step_scores: Vec<u64>,
    pub interrupted: bool,
}

/// Greedily place up to `num_houses` houses.
///
/// The deadline is only consulted between placements. A scan that
/// finds no free cell ends the run with what was placed so far.
pub fn place_exhaustive(
    grid: &Grid,
    num_houses: usize,
    scan: ScanMode,
    deadline: Option<Instant>,
) -> SearchOutcome {
    let mut occupancy = Occupancy::new(grid, num_houses);
    let mut step_scores = Vec::with_capacity(num_houses);
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

        let Some(best) = best_free_cell(grid, &occupancy, scan) else {
            warn!(
                "no free cell left after {}/{} houses",
                occupancy.len(),
                num_houses
            );
            break;
        };

        let pos = grid.position_of(best.index);
        debug!(
            "house {} -> ({}, {}) score {}",
            occupancy.len() + 1,
            pos.x,
            pos.y,
            best.score
        );
        occupancy.push(pos);
        step_scores.push(best.score);
    }

    SearchOutcome {
        occupancy,
        step_scores,
        interrupted,
    }
}

// -----------------------------------------------------------------
// Tests
// -----------------------------------------------------------------
