//! Movement constraints: axis locks and bounds.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Which components of a drag step may move the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    /// Free movement on both axes.
    #[default]
    Both,
    /// Horizontal movement only.
    X,
    /// Vertical movement only.
    Y,
    /// Track the drag without moving.
    None,
}

impl Axis {
    /// Zero out the locked component(s) of a step.
    pub fn apply(self, step: Vec2) -> Vec2 {
        match self {
            Axis::Both => step,
            Axis::X => Vec2::new(step.x, 0.0),
            Axis::Y => Vec2::new(0.0, step.y),
            Axis::None => Vec2::ZERO,
        }
    }

    /// Check if horizontal movement is allowed.
    pub fn allows_x(self) -> bool {
        matches!(self, Axis::Both | Axis::X)
    }

    /// Check if vertical movement is allowed.
    pub fn allows_y(self) -> bool {
        matches!(self, Axis::Both | Axis::Y)
    }
}

/// Inclusive limits on a drag offset, in logical pixels.
///
/// Limits apply to the offset from the layout position, not to the
/// pointer. `left`/`top` may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundsRect {
    /// Create bounds from explicit edge limits.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Symmetric bounds: at most `extent` pixels in any direction.
    pub fn symmetric(extent: f64) -> Self {
        Self::new(-extent, -extent, extent, extent)
    }

    /// Clamp an offset into the bounds.
    ///
    /// The min edge wins when the bounds are degenerate (right < left),
    /// which can happen when a parent is smaller than its child.
    pub fn clamp(&self, offset: Point) -> Point {
        Point::new(
            offset.x.min(self.right).max(self.left),
            offset.y.min(self.bottom).max(self.top),
        )
    }

    /// Check if an offset already satisfies the bounds.
    pub fn contains(&self, offset: Point) -> bool {
        offset.x >= self.left
            && offset.x <= self.right
            && offset.y >= self.top
            && offset.y <= self.bottom
    }
}

/// Bounds specification for a draggable region.
///
/// `Parent` and `Window` name a containing rect that only the widget
/// layer can see; it resolves them to a concrete [`BoundsRect`] each
/// frame before stepping the session.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Bounds {
    /// No movement limits.
    #[default]
    Unbounded,
    /// Fixed offset limits.
    Rect(BoundsRect),
    /// Confined to the parent content rect.
    Parent,
    /// Confined to the window.
    Window,
}

impl Bounds {
    /// Check if these bounds need a frame-resolved rect.
    pub fn needs_resolution(self) -> bool {
        matches!(self, Bounds::Parent | Bounds::Window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_apply() {
        let step = Vec2::new(3.0, -7.0);
        assert_eq!(Axis::Both.apply(step), step);
        assert_eq!(Axis::X.apply(step), Vec2::new(3.0, 0.0));
        assert_eq!(Axis::Y.apply(step), Vec2::new(0.0, -7.0));
        assert_eq!(Axis::None.apply(step), Vec2::ZERO);
    }

    #[test]
    fn test_axis_flags() {
        assert!(Axis::Both.allows_x());
        assert!(Axis::Both.allows_y());
        assert!(Axis::X.allows_x());
        assert!(!Axis::X.allows_y());
        assert!(!Axis::Y.allows_x());
        assert!(Axis::Y.allows_y());
        assert!(!Axis::None.allows_x());
        assert!(!Axis::None.allows_y());
    }

    #[test]
    fn test_clamp_inside() {
        let bounds = BoundsRect::symmetric(100.0);
        let offset = Point::new(40.0, -60.0);
        assert_eq!(bounds.clamp(offset), offset);
        assert!(bounds.contains(offset));
    }

    #[test]
    fn test_clamp_outside() {
        let bounds = BoundsRect::symmetric(100.0);
        assert_eq!(
            bounds.clamp(Point::new(250.0, -130.0)),
            Point::new(100.0, -100.0)
        );
        assert!(!bounds.contains(Point::new(250.0, -130.0)));
    }

    #[test]
    fn test_clamp_degenerate() {
        // Parent smaller than child: min edge wins, no panic.
        let bounds = BoundsRect::new(0.0, 0.0, -50.0, -50.0);
        assert_eq!(bounds.clamp(Point::new(10.0, 10.0)), Point::new(0.0, 0.0));
    }
}
