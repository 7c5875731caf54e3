//! Text and JSON input ingestion and validation.
//!
//! Text format: a header line `W H N`, then `H` lines of `W` weights.
//! Only the first 3 header tokens and the first `W` tokens of a grid
//! line are read; anything after them on the same line is ignored.

use thiserror::Error;

use crate::types::{
    Grid, PlacementRequest, MAX_DIMENSION, MAX_HOUSES, MAX_WEIGHT, MIN_HOUSES,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unable to read input.")]
    MissingLine,
    #[error("'{0}' is not a valid input value.")]
    InvalidToken(String),
    #[error("The first line must contain 3 numbers.")]
    HeaderTokens,
    #[error("Width must be between 1 and {}, inclusive.", MAX_DIMENSION)]
    WidthRange,
    #[error("Height must be between 1 and {}, inclusive.", MAX_DIMENSION)]
    HeightRange,
    #[error("Number of houses must be between {} and {}, inclusive.", MIN_HOUSES, .max)]
    HouseCount { max: usize },
    #[error("Only 1 house can be placed on a 1x1 grid.")]
    SingleCell,
    #[error("This line must contain {width} numbers.")]
    RowLength { width: usize },
    #[error("Each number must be between 0 and {}, inclusive.", MAX_WEIGHT)]
    WeightRange,
}

/// A validated grid and house count, ready for the engine.
#[derive(Debug, Clone)]
pub struct ParsedInput {
    pub grid: Grid,
    pub num_houses: usize,
}

/// Parse an unsigned integer token. Every character must be an ASCII
/// digit; values too big for u64 saturate so range checks reject them.
fn parse_token(token: &str) -> Result<u64, InputError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidToken(token.to_string()));
    }
    Ok(token.parse::<u64>().unwrap_or(u64::MAX))
}

fn dimension(value: u64) -> Option<usize> {
    (1..=MAX_DIMENSION as u64)
        .contains(&value)
        .then_some(value as usize)
}

pub fn check_dimensions(width: usize, height: usize) -> Result<(), InputError> {
    if !(1..=MAX_DIMENSION).contains(&width) {
        return Err(InputError::WidthRange);
    }
    if !(1..=MAX_DIMENSION).contains(&height) {
        return Err(InputError::HeightRange);
    }
    Ok(())
}

/// Largest house count a `width` x `height` grid accepts.
pub fn house_cap(width: usize, height: usize) -> usize {
    (width * height).min(MAX_HOUSES)
}

/// A 1x1 grid takes exactly one house; every other grid takes
/// `MIN_HOUSES..=house_cap`.
pub fn check_house_count(width: usize, height: usize, n: u64) -> Result<usize, InputError> {
    if width * height == 1 {
        return if n == 1 { Ok(1) } else { Err(InputError::SingleCell) };
    }
    let max = house_cap(width, height);
    if n < MIN_HOUSES as u64 || n > max as u64 {
        return Err(InputError::HouseCount { max });
    }
    Ok(n as usize)
}

/// Parse and validate the text format.
pub fn parse_text(text: &str) -> Result<ParsedInput, InputError> {
    let mut lines = text.lines();

    let header = lines.next().ok_or(InputError::MissingLine)?;
    let mut width = 0;
    let mut height = 0;
    let mut num_houses = 0;
    let mut count = 0;
    for token in header.split_whitespace().take(3) {
        let value = parse_token(token)?;
        match count {
            0 => width = dimension(value).ok_or(InputError::WidthRange)?,
            1 => height = dimension(value).ok_or(InputError::HeightRange)?,
            _ => num_houses = check_house_count(width, height, value)?,
        }
        count += 1;
    }
    if count != 3 {
        return Err(InputError::HeaderTokens);
    }

    let mut rows = Vec::with_capacity(height);
    for _ in 0..height {
        let line = lines.next().ok_or(InputError::MissingLine)?;
        let mut row = Vec::with_capacity(width);
        for token in line.split_whitespace().take(width) {
            let value = parse_token(token)?;
            if value > MAX_WEIGHT as u64 {
                return Err(InputError::WeightRange);
            }
            row.push(value as u32);
        }
        if row.len() != width {
            return Err(InputError::RowLength { width });
        }
        rows.push(row);
    }

    let grid = Grid::from_rows(width, height, &rows)?;
    Ok(ParsedInput { grid, num_houses })
}

/// Validate a JSON request the same way the text format is validated.
pub fn validate_request(request: &PlacementRequest) -> Result<ParsedInput, InputError> {
    check_dimensions(request.width, request.height)?;
    let num_houses =
        check_house_count(request.width, request.height, request.params.num_houses as u64)?;
    let grid = Grid::from_rows(request.width, request.height, &request.weights)?;
    Ok(ParsedInput { grid, num_houses })
}
