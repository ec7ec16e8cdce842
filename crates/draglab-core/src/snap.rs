//! Grid snapping for drag movement.

use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Grid cell size for snapped dragging, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub x: f64,
    pub y: f64,
}

impl Grid {
    /// Create a grid with independent horizontal and vertical steps.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Square grid with the same step on both axes.
    pub fn square(step: f64) -> Self {
        Self::new(step, step)
    }

    /// Snap a pending delta to whole grid steps.
    ///
    /// Each component rounds to the nearest grid multiple, so a move
    /// smaller than half a cell rounds to zero. The caller keeps the
    /// remainder pending by advancing its anchor only by the snapped
    /// amount.
    pub fn snap_delta(&self, delta: Vec2) -> Vec2 {
        Vec2::new(
            (delta.x / self.x).round() * self.x,
            (delta.y / self.y).round() * self.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_delta_rounds_to_cells() {
        let grid = Grid::square(25.0);
        assert_eq!(grid.snap_delta(Vec2::new(30.0, 40.0)), Vec2::new(25.0, 50.0));
    }

    #[test]
    fn test_snap_delta_below_half_cell() {
        let grid = Grid::square(50.0);
        assert_eq!(grid.snap_delta(Vec2::new(24.0, -24.0)), Vec2::ZERO);
    }

    #[test]
    fn test_snap_delta_exact() {
        let grid = Grid::new(25.0, 50.0);
        assert_eq!(
            grid.snap_delta(Vec2::new(-50.0, 100.0)),
            Vec2::new(-50.0, 100.0)
        );
    }

    #[test]
    fn test_snap_delta_negative() {
        let grid = Grid::square(25.0);
        assert_eq!(
            grid.snap_delta(Vec2::new(-30.0, -13.0)),
            Vec2::new(-25.0, 0.0)
        );
    }
}
