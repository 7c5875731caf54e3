//! House placement engine.
//!
//! Places a fixed number of houses on a grid of desirability weights,
//! greedily maximizing each new house's weighted Manhattan distance to
//! the houses already placed. Large house counts fall back to random
//! placement.
//!
//! Besides the Rust API (`place::place`) the crate exposes
//! `place_json`, which accepts a JSON `PlacementRequest` and returns a
//! JSON `PlacementResult`.

use thiserror::Error;

pub mod fallback;
pub mod input;
pub mod occupancy;
pub mod place;
pub mod prng;
pub mod render;
pub mod scoring;
pub mod search;
pub mod types;

#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("Invalid placement request JSON: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Failed to serialize placement result: {0}")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Input(#[from] input::InputError),
}

/// Run the placement engine on a JSON request.
pub fn place_json(request_json: &str) -> Result<String, PlacementError> {
    let request: types::PlacementRequest =
        serde_json::from_str(request_json).map_err(PlacementError::Decode)?;
    let parsed = input::validate_request(&request)?;

    let mut params = request.params;
    params.num_houses = parsed.num_houses;
    let result = place::place(&parsed.grid, &params);

    serde_json::to_string(&result).map_err(PlacementError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PlacementResult, Position, Strategy};

    #[test]
    fn json_round_trip() {
        let json = r#"{
            "width": 3,
            "height": 3,
            "weights": [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
            "num_houses": 3,
            "scan": "serial"
        }"#;
        let out = place_json(json).expect("placement");
        let result: PlacementResult = serde_json::from_str(&out).expect("result JSON");
        assert_eq!(result.strategy, Strategy::Exhaustive);
        assert_eq!(
            result.positions,
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
        );
    }

    #[test]
    fn json_rejects_bad_weights() {
        let json = r#"{"width": 2, "height": 1, "weights": [[0, 500]], "num_houses": 2}"#;
        let err = place_json(json).unwrap_err();
        assert!(matches!(
            err,
            PlacementError::Input(input::InputError::WeightRange)
        ));
    }

    #[test]
    fn json_rejects_malformed() {
        let err = place_json("{not json").unwrap_err();
        assert!(matches!(err, PlacementError::Decode(_)));
        assert!(err.to_string().starts_with("Invalid placement request JSON"));
    }
}
