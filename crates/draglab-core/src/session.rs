//! Per-region drag state machine.
//!
//! A [`DragSession`] owns the rendered offset of one draggable region and
//! the in-flight drag bookkeeping: the pointer anchor for grid stepping
//! and the slack accumulated against the bounds clamp. It is fed pointer
//! positions by whatever layer captures them; nothing here touches a UI
//! framework.

use crate::constraint::{Axis, Bounds, BoundsRect};
use crate::snap::Grid;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Configuration for a draggable region.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragConfig {
    /// Which axes the region may move along.
    pub axis: Axis,
    /// Movement limits on the offset.
    pub bounds: Bounds,
    /// Grid step for snapped movement.
    pub grid: Option<Grid>,
    /// Initial offset from the layout position.
    pub start: Point,
    /// A disabled region refuses to start a drag.
    pub disabled: bool,
}

impl DragConfig {
    /// Free dragging with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict movement to one axis.
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Limit the offset.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Snap movement to a grid.
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Start offset from the layout position.
    pub fn starting_at(mut self, start: Point) -> Self {
        self.start = start;
        self
    }

    /// Refuse all drag starts.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Payload reported for each accepted drag event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragData {
    /// Offset after the event.
    pub position: Point,
    /// Applied delta for this event.
    pub delta: Vec2,
    /// Offset before the event.
    pub last: Point,
}

/// Drag state for a single draggable region.
#[derive(Debug, Clone)]
pub struct DragSession {
    config: DragConfig,
    /// Current offset from the layout position.
    position: Point,
    dragging: bool,
    /// Pointer position at the last accepted step.
    anchor: Option<Point>,
    /// Movement swallowed by the bounds clamp, repaid when the pointer
    /// comes back inside.
    slack: Vec2,
}

impl DragSession {
    /// Create a session at the configured start offset.
    pub fn new(config: DragConfig) -> Self {
        Self {
            position: config.start,
            config,
            dragging: false,
            anchor: None,
            slack: Vec2::ZERO,
        }
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Current offset from the layout position.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Replace the offset from outside the drag pipeline.
    ///
    /// Controlled regions are re-anchored through this every frame; the
    /// written position is authoritative for rendering.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Try to begin a drag at `pointer`.
    ///
    /// Returns false for disabled regions, leaving the session idle.
    pub fn start(&mut self, pointer: Point) -> bool {
        if self.config.disabled {
            log::debug!("drag refused: region is disabled");
            return false;
        }
        self.dragging = true;
        self.anchor = Some(pointer);
        self.slack = Vec2::ZERO;
        true
    }

    /// Advance the drag to `pointer`.
    ///
    /// Returns `None` when nothing moved: the session is idle, the
    /// pointer has not crossed a grid step yet, or the whole step was
    /// clamped away. `resolved_bounds` carries the frame's concrete
    /// limits for [`Bounds::Parent`]/[`Bounds::Window`]; fixed rect
    /// bounds ignore it.
    pub fn drag(&mut self, pointer: Point, resolved_bounds: Option<BoundsRect>) -> Option<DragData> {
        if !self.dragging {
            return None;
        }
        let anchor = self.anchor?;
        let mut step = pointer - anchor;
        if let Some(grid) = self.config.grid {
            step = grid.snap_delta(step);
            if step.x == 0.0 && step.y == 0.0 {
                return None;
            }
        }
        // Advance only by the snapped step; the remainder stays pending.
        self.anchor = Some(anchor + step);
        self.apply_step(step, resolved_bounds)
    }

    /// Finish the drag. Reports the final offset when one was active.
    pub fn stop(&mut self) -> Option<DragData> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        self.anchor = None;
        self.slack = Vec2::ZERO;
        Some(DragData {
            position: self.position,
            delta: Vec2::ZERO,
            last: self.position,
        })
    }

    fn apply_step(&mut self, step: Vec2, resolved_bounds: Option<BoundsRect>) -> Option<DragData> {
        let step = self.config.axis.apply(step);
        let last = self.position;
        let desired = last + step;

        let bounds = match self.config.bounds {
            Bounds::Unbounded => None,
            Bounds::Rect(rect) => Some(rect),
            Bounds::Parent | Bounds::Window => resolved_bounds,
        };

        let next = match bounds {
            Some(rect) => {
                // Clamp with slack: overshoot accumulates and must be
                // walked back before the region moves again.
                let clamped = rect.clamp(desired + self.slack);
                self.slack += desired - clamped;
                clamped
            }
            None => desired,
        };

        if next == last {
            return None;
        }
        self.position = next;
        Some(DragData {
            position: next,
            delta: next - last,
            last,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag_by(session: &mut DragSession, from: Point, by: Vec2) -> Option<DragData> {
        session.drag(from + by, None)
    }

    #[test]
    fn test_free_drag_moves_with_pointer() {
        let mut session = DragSession::new(DragConfig::new());
        let origin = Point::new(100.0, 100.0);
        assert!(session.start(origin));

        let data = drag_by(&mut session, origin, Vec2::new(30.0, -15.0)).unwrap();
        assert_eq!(data.position, Point::new(30.0, -15.0));
        assert_eq!(data.delta, Vec2::new(30.0, -15.0));
        assert_eq!(data.last, Point::ZERO);

        let data = session.stop().unwrap();
        assert_eq!(data.position, Point::new(30.0, -15.0));
        assert!(!session.is_dragging());
    }

    #[test]
    fn test_disabled_refuses_start() {
        let mut session = DragSession::new(DragConfig::new().disabled());
        assert!(!session.start(Point::ZERO));
        assert!(!session.is_dragging());
        assert!(session.drag(Point::new(50.0, 50.0), None).is_none());
        assert!(session.stop().is_none());
        assert_eq!(session.position(), Point::ZERO);
    }

    #[test]
    fn test_axis_lock_keeps_other_coordinate() {
        let mut session = DragSession::new(
            DragConfig::new()
                .with_axis(Axis::X)
                .starting_at(Point::new(5.0, 7.0)),
        );
        session.start(Point::ZERO);
        let data = session.drag(Point::new(40.0, 90.0), None).unwrap();
        assert_eq!(data.position, Point::new(45.0, 7.0));

        // The locked coordinate never drifts across many steps.
        session.drag(Point::new(-20.0, 300.0), None);
        assert_eq!(session.position().y, 7.0);
    }

    #[test]
    fn test_grid_moves_in_whole_steps() {
        let mut session = DragSession::new(DragConfig::new().with_grid(Grid::square(25.0)));
        session.start(Point::ZERO);

        // Below half a cell: nothing happens.
        assert!(session.drag(Point::new(12.0, 0.0), None).is_none());
        assert_eq!(session.position(), Point::ZERO);

        // Crossing the half-cell line snaps a whole step.
        let data = session.drag(Point::new(13.0, 0.0), None).unwrap();
        assert_eq!(data.position, Point::new(25.0, 0.0));
        assert_eq!(data.delta, Vec2::new(25.0, 0.0));
    }

    #[test]
    fn test_grid_remainder_carries_over() {
        let mut session = DragSession::new(DragConfig::new().with_grid(Grid::square(25.0)));
        session.start(Point::ZERO);

        session.drag(Point::new(30.0, 0.0), None);
        assert_eq!(session.position(), Point::new(25.0, 0.0));

        // Anchor advanced by 25, so 5px is still pending; 8 more crosses
        // the next half cell.
        let data = session.drag(Point::new(38.0, 0.0), None).unwrap();
        assert_eq!(data.position, Point::new(50.0, 0.0));
    }

    #[test]
    fn test_bounds_clamp_offset() {
        let mut session = DragSession::new(
            DragConfig::new().with_bounds(Bounds::Rect(BoundsRect::symmetric(100.0))),
        );
        session.start(Point::ZERO);
        let data = session.drag(Point::new(250.0, -40.0), None).unwrap();
        assert_eq!(data.position, Point::new(100.0, -40.0));
    }

    #[test]
    fn test_bounds_slack_repaid_on_return() {
        let mut session = DragSession::new(
            DragConfig::new().with_bounds(Bounds::Rect(BoundsRect::symmetric(100.0))),
        );
        session.start(Point::ZERO);

        // 150px right, clamped to 100; 50px of slack outstanding.
        session.drag(Point::new(150.0, 0.0), None);
        assert_eq!(session.position(), Point::new(100.0, 0.0));

        // 30px back: still repaying slack, no movement.
        assert!(session.drag(Point::new(120.0, 0.0), None).is_none());
        assert_eq!(session.position(), Point::new(100.0, 0.0));

        // Past the slack: movement resumes from the clamped edge.
        let data = session.drag(Point::new(80.0, 0.0), None).unwrap();
        assert_eq!(data.position, Point::new(80.0, 0.0));
    }

    #[test]
    fn test_slack_resets_between_drags() {
        let mut session = DragSession::new(
            DragConfig::new().with_bounds(Bounds::Rect(BoundsRect::symmetric(100.0))),
        );
        session.start(Point::ZERO);
        session.drag(Point::new(300.0, 0.0), None);
        session.stop();

        // A fresh drag is not burdened by the previous overshoot.
        session.start(Point::ZERO);
        let data = session.drag(Point::new(-10.0, 0.0), None).unwrap();
        assert_eq!(data.position, Point::new(90.0, 0.0));
    }

    #[test]
    fn test_parent_bounds_use_resolved_rect() {
        let mut session = DragSession::new(DragConfig::new().with_bounds(Bounds::Parent));
        session.start(Point::ZERO);

        // Without a resolved rect the session moves freely.
        session.drag(Point::new(10.0, 10.0), None);
        assert_eq!(session.position(), Point::new(10.0, 10.0));

        let resolved = BoundsRect::new(0.0, 0.0, 40.0, 40.0);
        let data = session.drag(Point::new(500.0, 500.0), Some(resolved)).unwrap();
        assert_eq!(data.position, Point::new(40.0, 40.0));
    }

    #[test]
    fn test_set_position_is_authoritative() {
        let mut session = DragSession::new(DragConfig::new());
        session.set_position(Point::new(-400.0, 200.0));
        assert_eq!(session.position(), Point::new(-400.0, 200.0));

        // The next drag steps from the written position.
        session.start(Point::ZERO);
        let data = session.drag(Point::new(10.0, 0.0), None).unwrap();
        assert_eq!(data.position, Point::new(-390.0, 200.0));
    }

    #[test]
    fn test_default_position_offsets_start() {
        let session = DragSession::new(DragConfig::new().starting_at(Point::new(25.0, 25.0)));
        assert_eq!(session.position(), Point::new(25.0, 25.0));
    }
}
