//! Core data types for the placement engine.
//!
//! Configuration and result structs derive Serialize + Deserialize so
//! they can round-trip through the JSON interchange format.

use serde::{Deserialize, Serialize};

use crate::input::InputError;

// -- Capacity / policy constants -----------------------------------

/// Largest accepted grid width or height.
pub const MAX_DIMENSION: usize = 1000;

/// Upper bound on the house count regardless of grid area.
pub const MAX_HOUSES: usize = 10_000;

/// Smallest house count accepted on grids with more than one cell.
pub const MIN_HOUSES: usize = 2;

/// Largest desirability weight a cell may carry.
pub const MAX_WEIGHT: u32 = 100;

/// House counts at or under this use the exhaustive search.
pub const EXHAUSTIVE_THRESHOLD: usize = 100;

// -- Geometry ------------------------------------------------------

/// A 0-based cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Immutable grid of per-cell desirability weights, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    weights: Vec<u8>,
}

impl Grid {
    /// Build a grid from `height` rows of `width` weights each.
    ///
    /// Checks dimensions, row lengths and weight range; the engine
    /// itself never re-validates.
    pub fn from_rows(
        width: usize,
        height: usize,
        rows: &[Vec<u32>],
    ) -> Result<Self, InputError> {
        crate::input::check_dimensions(width, height)?;
        if rows.len() != height {
            return Err(InputError::MissingLine);
        }
        let mut weights = Vec::with_capacity(width * height);
        for row in rows {
            if row.len() != width {
                return Err(InputError::RowLength { width });
            }
            for &w in row {
                if w > MAX_WEIGHT {
                    return Err(InputError::WeightRange);
                }
                weights.push(w as u8);
            }
        }
        Ok(Self {
            width,
            height,
            weights,
        })
    }

    /// Grid with every cell set to `weight`. Mostly useful in tests
    /// and benches.
    pub fn uniform(width: usize, height: usize, weight: u8) -> Self {
        Self {
            width,
            height,
            weights: vec![weight; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn weight(&self, pos: Position) -> u64 {
        self.weights[self.index_of(pos)] as u64
    }

    /// Row-major index of `pos`. Scan order and tie-breaks use this.
    #[inline]
    pub fn index_of(&self, pos: Position) -> usize {
        pos.y * self.width + pos.x
    }

    #[inline]
    pub fn position_of(&self, index: usize) -> Position {
        Position::new(index % self.width, index / self.width)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }
}

// -- Engine configuration ------------------------------------------

/// How the exhaustive search walks the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    Serial,
    #[default]
    Parallel,
}

/// Which placements the random fallback refuses.
///
/// `LegacySlot` only compares a draw against whatever the slot being
/// filled held before (the origin, since slots start zeroed), so two
/// houses may share a cell. `Distinct` rejects any occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    LegacySlot,
    #[default]
    Distinct,
}

/// Placement strategy picked from the house count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Exhaustive,
    Random,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementParams {
    pub num_houses: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub scan: ScanMode,
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_budget_ms: Option<u64>,
}

impl PlacementParams {
    pub fn new(num_houses: usize) -> Self {
        Self {
            num_houses,
            seed: None,
            scan: ScanMode::default(),
            duplicates: DuplicatePolicy::default(),
            time_budget_ms: None,
        }
    }

    pub fn time_budget(&self) -> Option<std::time::Duration> {
        self.time_budget_ms.map(std::time::Duration::from_millis)
    }
}

/// JSON request: the grid plus placement parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementRequest {
    pub width: usize,
    pub height: usize,
    pub weights: Vec<Vec<u32>>,
    #[serde(flatten)]
    pub params: PlacementParams,
}

fn is_false(v: &bool) -> bool {
    !v
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementResult {
    pub strategy: Strategy,
    pub positions: Vec<Position>,
    /// Score each exhaustive placement won with; empty for random runs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub step_scores: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub interrupted: bool,
}

// -- Tests ---------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_indexing_is_row_major() {
        let grid = Grid::from_rows(3, 2, &[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.index_of(Position::new(2, 0)), 2);
        assert_eq!(grid.index_of(Position::new(0, 1)), 3);
        assert_eq!(grid.position_of(5), Position::new(2, 1));
        assert_eq!(grid.weight(Position::new(1, 1)), 5);
        assert!(!grid.contains(Position::new(3, 0)));
    }

    #[test]
    fn grid_rejects_heavy_weight() {
        let err = Grid::from_rows(2, 1, &[vec![0, 101]]).unwrap_err();
        assert_eq!(err, InputError::WeightRange);
    }

    #[test]
    fn grid_rejects_short_row() {
        let err = Grid::from_rows(2, 2, &[vec![0, 1], vec![3]]).unwrap_err();
        assert_eq!(err, InputError::RowLength { width: 2 });
    }

    #[test]
    fn grid_rejects_missing_rows() {
        let err = Grid::from_rows(2, 2, &[vec![0, 1]]).unwrap_err();
        assert_eq!(err, InputError::MissingLine);
    }

    #[test]
    fn request_defaults() {
        let json = r#"{
            "width": 2,
            "height": 1,
            "weights": [[0, 10]],
            "num_houses": 2
        }"#;
        let req: PlacementRequest = serde_json::from_str(json).expect("deserialize");
        assert_eq!(req.params.num_houses, 2);
        assert_eq!(req.params.scan, ScanMode::Parallel);
        assert_eq!(req.params.duplicates, DuplicatePolicy::Distinct);
        assert!(req.params.seed.is_none());
        assert!(req.params.time_budget().is_none());
    }

    #[test]
    fn request_with_options() {
        let json = r#"{
            "width": 20,
            "height": 20,
            "weights": [],
            "num_houses": 150,
            "seed": 7,
            "scan": "serial",
            "duplicates": "legacy_slot",
            "time_budget_ms": 250
        }"#;
        let req: PlacementRequest = serde_json::from_str(json).expect("deserialize");
        assert_eq!(req.params.seed, Some(7));
        assert_eq!(req.params.scan, ScanMode::Serial);
        assert_eq!(req.params.duplicates, DuplicatePolicy::LegacySlot);
        assert_eq!(req.params.time_budget_ms, Some(250));
    }

    #[test]
    fn result_serializes() {
        let result = PlacementResult {
            strategy: Strategy::Exhaustive,
            positions: vec![Position::new(0, 0), Position::new(1, 0)],
            step_scores: vec![0, 10],
            seed: None,
            interrupted: false,
        };
        let json = serde_json::to_string(&result).expect("serialize");
        assert!(json.contains("\"strategy\":\"exhaustive\""));
        assert!(json.contains("\"positions\":[{\"x\":0,\"y\":0},{\"x\":1,\"y\":0}]"));
        assert!(!json.contains("interrupted"));
        assert!(!json.contains("seed"));
    }
}
