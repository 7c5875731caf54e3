//! Happiness scoring.

use crate::types::{Grid, Position};

#[inline]
pub fn manhattan_distance(a: Position, b: Position) -> u64 {
    (a.x.abs_diff(b.x) + a.y.abs_diff(b.y)) as u64
}

/// Score of `candidate` against every placed house: the sum of
/// `weight(candidate) * distance(candidate, house)`.
///
/// Zero when nothing is placed yet, and zero for weight-0 cells.
pub fn happiness(grid: &Grid, candidate: Position, placed: &[Position]) -> u64 {
    let weight = grid.weight(candidate);
    placed
        .iter()
        .map(|&house| weight * manhattan_distance(candidate, house))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = Position::new(1, 5);
        let b = Position::new(4, 2);
        assert_eq!(manhattan_distance(a, b), 6);
        assert_eq!(manhattan_distance(b, a), 6);
        assert_eq!(manhattan_distance(a, a), 0);
    }

    #[test]
    fn empty_occupancy_scores_zero() {
        let grid = Grid::uniform(3, 3, 100);
        assert_eq!(happiness(&grid, Position::new(1, 1), &[]), 0);
    }

    #[test]
    fn sums_weighted_distances() {
        let grid = Grid::from_rows(3, 1, &[vec![2, 0, 5]]).unwrap();
        let placed = [Position::new(0, 0), Position::new(1, 0)];
        // 5 * 2 + 5 * 1
        assert_eq!(happiness(&grid, Position::new(2, 0), &placed), 15);
    }

    #[test]
    fn zero_weight_cell_scores_zero() {
        let grid = Grid::from_rows(2, 2, &[vec![0, 9], vec![9, 9]]).unwrap();
        let placed = [Position::new(1, 1)];
        assert_eq!(happiness(&grid, Position::new(0, 0), &placed), 0);
        assert_eq!(happiness(&grid, Position::new(1, 0), &placed), 9);
    }
}
