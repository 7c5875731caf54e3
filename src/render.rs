//! Text rendering of a placement.

use std::fmt::Write;

use crate::types::Position;

/// One `x y` line per house, 1-based, in placement order.
pub fn render_positions(positions: &[Position]) -> String {
    let mut out = String::with_capacity(positions.len() * 8);
    for p in positions {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{} {}", p.x + 1, p.y + 1);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_lines() {
        let text = render_positions(&[Position::new(0, 0), Position::new(999, 4)]);
        assert_eq!(text, "1 1\n1000 5\n");
    }

    #[test]
    fn empty_placement_renders_nothing() {
        assert_eq!(render_positions(&[]), "");
    }
}
