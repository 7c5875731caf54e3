//! The Occupancy Set: houses in placement order.

use crate::types::{Grid, Position};

/// Placed houses, in the order they were placed, plus a per-cell
/// count for constant-time "is anything here" checks.
///
/// Only ever grows. A count above 1 can only come from the legacy
/// random fallback, which tolerates shared cells.
#[derive(Debug, Clone)]
pub struct Occupancy {
    positions: Vec<Position>,
    counts: Vec<u16>,
    width: usize,
    free: usize,
}

impl Occupancy {
    pub fn new(grid: &Grid, capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            counts: vec![0; grid.area()],
            width: grid.width(),
            free: grid.area(),
        }
    }

    pub fn push(&mut self, pos: Position) {
        let idx = pos.y * self.width + pos.x;
        if self.counts[idx] == 0 {
            self.free -= 1;
        }
        self.counts[idx] = self.counts[idx].saturating_add(1);
        self.positions.push(pos);
    }

    #[inline]
    pub fn is_occupied_index(&self, index: usize) -> bool {
        self.counts[index] > 0
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.is_occupied_index(pos.y * self.width + pos.x)
    }

    /// Cells without any house.
    pub fn free_cells(&self) -> usize {
        self.free
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let grid = Grid::uniform(3, 3, 1);
        let mut occ = Occupancy::new(&grid, 3);
        occ.push(Position::new(2, 2));
        occ.push(Position::new(0, 1));
        occ.push(Position::new(1, 0));
        assert_eq!(
            occ.positions(),
            &[Position::new(2, 2), Position::new(0, 1), Position::new(1, 0)]
        );
        assert_eq!(occ.len(), 3);
        assert_eq!(occ.free_cells(), 6);
    }

    #[test]
    fn tracks_occupied_cells() {
        let grid = Grid::uniform(4, 2, 1);
        let mut occ = Occupancy::new(&grid, 2);
        assert!(occ.is_empty());
        occ.push(Position::new(3, 1));
        assert!(occ.is_occupied(Position::new(3, 1)));
        assert!(occ.is_occupied_index(7));
        assert!(!occ.is_occupied(Position::new(3, 0)));
    }

    #[test]
    fn shared_cell_counts_once_as_taken() {
        let grid = Grid::uniform(2, 2, 1);
        let mut occ = Occupancy::new(&grid, 2);
        occ.push(Position::new(1, 1));
        occ.push(Position::new(1, 1));
        assert_eq!(occ.len(), 2);
        assert_eq!(occ.free_cells(), 3);
    }
}
