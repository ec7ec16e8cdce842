//! Shared gallery state and drag-callback wiring.
//!
//! Both gallery flavors render the same roster of draggable boxes from
//! one [`GalleryState`]. The state is rebuilt when the user switches
//! flavor, so every position, delta, and count resets.

pub mod immediate;
pub mod structured;

use draglab_core::{
    Axis, Bounds, BoundsRect, ClickCounter, DragConfig, DragSession, DragTracker, Grid,
};
use draglab_widgets::DragBoxEvent;
use kurbo::Point;

/// Extent of the fixed-rect bounds demo: that many pixels in any
/// direction.
pub const RECT_BOUND_EXTENT: f64 = 100.0;
/// Viewport size of the parent-bounds pen.
pub const PEN_VIEWPORT: f32 = 500.0;
/// Scrollable content size inside the pen.
pub const PEN_CONTENT: f32 = 1000.0;
/// Start offset of the offset demo box.
pub const OFFSET_START: Point = Point::new(25.0, 25.0);
/// Vertical gap between demo boxes.
pub const BOX_GAP: f32 = 12.0;

/// Click counters embedded in the demo boxes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Counters {
    pub axis_x: ClickCounter,
    pub axis_y: ClickCounter,
    pub delta: ClickCounter,
    pub handle: ClickCounter,
    pub cancel: ClickCounter,
    pub body: ClickCounter,
    pub floating: ClickCounter,
    pub offset: ClickCounter,
}

/// Everything one gallery instance owns.
#[derive(Debug, Clone)]
pub struct GalleryState {
    pub tracker: DragTracker,
    pub counters: Counters,
    /// "I can be dragged anywhere"
    pub free: DragSession,
    /// Horizontal movement only.
    pub axis_x: DragSession,
    /// Vertical movement only.
    pub axis_y: DragSession,
    /// Refuses every drag start.
    pub locked: DragSession,
    /// Feeds the tracker's delta accumulator.
    pub delta: DragSession,
    /// Draggable by its handle bar only.
    pub handle: DragSession,
    /// Draggable everywhere except its cancel bar.
    pub cancel: DragSession,
    pub grid25: DragSession,
    pub grid50: DragSession,
    /// Fixed-rect bounds.
    pub bounded: DragSession,
    /// Confined to the scrollable pen.
    pub penned_a: DragSession,
    pub penned_b: DragSession,
    /// Confined to the window.
    pub body: DragSession,
    /// Anchored bottom-right instead of flowing with the roster.
    pub floating: DragSession,
    /// Starts slightly offset.
    pub offset: DragSession,
    /// Controlled; the tracker position is synced from drag events.
    pub synced_on_drag: DragSession,
    /// Controlled; the tracker position is synced on release.
    pub synced_on_stop: DragSession,
}

impl GalleryState {
    pub fn new() -> Self {
        let tracker = DragTracker::new();
        let controlled = DragConfig::new().starting_at(tracker.controlled());
        Self {
            tracker,
            counters: Counters::default(),
            free: DragSession::new(DragConfig::new()),
            axis_x: DragSession::new(DragConfig::new().with_axis(Axis::X)),
            axis_y: DragSession::new(DragConfig::new().with_axis(Axis::Y)),
            locked: DragSession::new(DragConfig::new().disabled()),
            delta: DragSession::new(DragConfig::new()),
            handle: DragSession::new(DragConfig::new()),
            cancel: DragSession::new(DragConfig::new()),
            grid25: DragSession::new(DragConfig::new().with_grid(Grid::square(25.0))),
            grid50: DragSession::new(DragConfig::new().with_grid(Grid::square(50.0))),
            bounded: DragSession::new(
                DragConfig::new().with_bounds(Bounds::Rect(BoundsRect::symmetric(
                    RECT_BOUND_EXTENT,
                ))),
            ),
            penned_a: DragSession::new(DragConfig::new().with_bounds(Bounds::Parent)),
            penned_b: DragSession::new(DragConfig::new().with_bounds(Bounds::Parent)),
            body: DragSession::new(DragConfig::new().with_bounds(Bounds::Window)),
            floating: DragSession::new(DragConfig::new()),
            offset: DragSession::new(DragConfig::new().starting_at(OFFSET_START)),
            synced_on_drag: DragSession::new(controlled),
            synced_on_stop: DragSession::new(controlled),
        }
    }

    /// Re-anchor the controlled sessions from the tracker.
    ///
    /// Runs before the controlled boxes are shown each frame. A mid-drag
    /// session keeps its in-flight position; if nothing synced the
    /// tracker by release, the box snaps back here on the next frame.
    pub fn sync_controlled(&mut self) {
        let controlled = self.tracker.controlled();
        if !self.synced_on_drag.is_dragging() {
            self.synced_on_drag.set_position(controlled);
        }
        if !self.synced_on_stop.is_dragging() {
            self.synced_on_stop.set_position(controlled);
        }
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold the shared start/stop handler pair into the tracker. Boxes with
/// richer wiring (delta accumulation, controlled sync) match on the
/// event themselves.
pub fn track(tracker: &mut DragTracker, event: Option<DragBoxEvent>) {
    match event {
        Some(DragBoxEvent::Started) => tracker.drag_started(),
        Some(DragBoxEvent::Released(_)) => tracker.drag_stopped(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draglab_core::DragData;
    use kurbo::Vec2;

    #[test]
    fn test_controlled_sessions_start_at_tracker_position() {
        let state = GalleryState::new();
        assert_eq!(state.synced_on_drag.position(), state.tracker.controlled());
        assert_eq!(state.synced_on_stop.position(), state.tracker.controlled());
    }

    #[test]
    fn test_sync_controlled_follows_nudges() {
        let mut state = GalleryState::new();
        state.tracker.nudge_x();
        state.tracker.nudge_y();
        state.sync_controlled();
        assert_eq!(state.synced_on_drag.position(), state.tracker.controlled());
        assert_eq!(state.synced_on_stop.position(), state.tracker.controlled());
    }

    #[test]
    fn test_track_counts_paired_events() {
        let mut tracker = DragTracker::new();
        let data = DragData {
            position: Point::ZERO,
            delta: Vec2::ZERO,
            last: Point::ZERO,
        };
        track(&mut tracker, Some(DragBoxEvent::Started));
        track(&mut tracker, Some(DragBoxEvent::Dragged(data)));
        assert_eq!(tracker.active_drags(), 1);
        track(&mut tracker, Some(DragBoxEvent::Released(data)));
        assert_eq!(tracker.active_drags(), 0);
        track(&mut tracker, Some(DragBoxEvent::Refused));
        track(&mut tracker, None);
        assert_eq!(tracker.active_drags(), 0);
    }

    #[test]
    fn test_fresh_state_matches_remount_semantics() {
        let mut state = GalleryState::new();
        state.counters.delta.increment();
        state.tracker.drag_started();

        let fresh = GalleryState::new();
        assert_eq!(fresh.counters.delta.count(), 0);
        assert_eq!(fresh.tracker.active_drags(), 0);
    }
}
