//! Draggable box widget.
//!
//! `DragBox` is the drag-capture surface of the gallery: it lays out a
//! fixed-size box, paints it offset by its session position, feeds
//! pointer drags through the session's constraint pipeline (axis, grid,
//! bounds), and reports lifecycle events for the caller to fold into
//! shared state. Widgets rendered inside the box win pointer priority
//! over the drag surface.

use draglab_core::{Axis, Bounds, BoundsRect, DragData, DragSession};
use egui::{
    Align, Align2, Color32, CornerRadius, CursorIcon, FontId, Layout, Pos2, Rect, Response, Sense,
    Stroke, StrokeKind, Ui, UiBuilder, Vec2, vec2,
};
use kurbo::Point;

use crate::{sizing, theme};

/// Which part of the box initiates a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grip {
    /// The whole box.
    #[default]
    Anywhere,
    /// Only the rendered handle bar.
    Handle,
    /// Everywhere except the rendered cancel bar.
    Cancel,
}

/// Drag lifecycle reported by [`DragBox::show`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragBoxEvent {
    /// A drag began.
    Started,
    /// The region moved. Fires only for accepted movement, not for
    /// sub-grid-step or fully clamped pointer travel.
    Dragged(DragData),
    /// The drag ended at the reported offset.
    Released(DragData),
    /// A press was swallowed by a disabled region.
    Refused,
}

/// What [`DragBox::show`] hands back.
pub struct DragBoxResponse {
    /// Response of the drag surface (the handle bar for [`Grip::Handle`]).
    pub response: Response,
    /// Lifecycle event for this frame, if any.
    pub event: Option<DragBoxEvent>,
    /// Painted box rect, offset included.
    pub rect: Rect,
}

/// A draggable region driven by a [`DragSession`].
pub struct DragBox<'a> {
    session: &'a mut DragSession,
    id_salt: egui::Id,
    size: Vec2,
    grip: Grip,
    grip_label: &'a str,
}

impl<'a> DragBox<'a> {
    pub fn new(id_salt: impl std::hash::Hash, session: &'a mut DragSession) -> Self {
        Self {
            session,
            id_salt: egui::Id::new(id_salt),
            size: vec2(sizing::BOX_WIDTH, sizing::BOX_HEIGHT),
            grip: Grip::Anywhere,
            grip_label: "",
        }
    }

    /// Override the box size.
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Select which part of the box initiates a drag and the label
    /// rendered on its bar.
    pub fn with_grip(mut self, grip: Grip, label: &'a str) -> Self {
        self.grip = grip;
        self.grip_label = label;
        self
    }

    /// Lay out the box, process the drag, and render `content` inside.
    pub fn show(self, ui: &mut Ui, content: impl FnOnce(&mut Ui)) -> DragBoxResponse {
        let (slot, _) = ui.allocate_exact_size(self.size, Sense::hover());
        let id = ui.id().with(self.id_salt);

        // Parent/window limits depend on the live rects, so they are
        // resolved fresh each frame against the zero-offset slot.
        let resolved = resolve_bounds(
            self.session.config().bounds,
            slot,
            ui.max_rect(),
            ui.ctx().screen_rect(),
        );

        let rect = slot.translate(offset_of(self.session.position()));
        let grip_rect = grip_bar_rect(rect, self.grip);
        let drag_rect = match self.grip {
            Grip::Handle => grip_rect.unwrap_or(rect),
            Grip::Anywhere | Grip::Cancel => rect,
        };
        let response = ui.interact(drag_rect, id, Sense::drag());

        let mut event = None;
        if response.drag_started() {
            let pressed_cancel = self.grip == Grip::Cancel
                && ui
                    .input(|i| i.pointer.press_origin())
                    .zip(grip_rect)
                    .is_some_and(|(origin, bar)| bar.contains(origin));
            if !pressed_cancel {
                if let Some(pointer) = response.interact_pointer_pos() {
                    event = if self.session.start(to_point(pointer)) {
                        Some(DragBoxEvent::Started)
                    } else {
                        Some(DragBoxEvent::Refused)
                    };
                }
            }
        } else if response.dragged() && self.session.is_dragging() {
            if let Some(pointer) = response.interact_pointer_pos() {
                if let Some(data) = self.session.drag(to_point(pointer), resolved) {
                    event = Some(DragBoxEvent::Dragged(data));
                }
            }
        }
        if response.drag_stopped() {
            if let Some(data) = self.session.stop() {
                event = Some(DragBoxEvent::Released(data));
            }
        }

        // Repaint at the stepped position so the box tracks the pointer
        // within the frame.
        let rect = slot.translate(offset_of(self.session.position()));
        let grip_rect = grip_bar_rect(rect, self.grip);

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, grip_rect);
        }

        let mut content_ui = ui.new_child(
            UiBuilder::new()
                .max_rect(inner_rect(rect, grip_rect))
                .layout(Layout::top_down(Align::Min)),
        );
        content(&mut content_ui);

        let cursor = if self.session.config().disabled {
            CursorIcon::NotAllowed
        } else if self.session.is_dragging() {
            CursorIcon::Grabbing
        } else {
            match self.session.config().axis {
                Axis::X => CursorIcon::ResizeHorizontal,
                Axis::Y => CursorIcon::ResizeVertical,
                Axis::Both | Axis::None => CursorIcon::Grab,
            }
        };
        let response = response.on_hover_cursor(cursor);

        DragBoxResponse {
            response,
            event,
            rect,
        }
    }

    fn paint(&self, ui: &Ui, rect: Rect, grip_rect: Option<Rect>) {
        let dragging = self.session.is_dragging();
        let fill = if dragging {
            theme::BOX_FILL_ACTIVE
        } else {
            theme::BOX_FILL
        };
        let border = if dragging {
            theme::BOX_BORDER_ACTIVE
        } else {
            theme::BOX_BORDER
        };

        let painter = ui.painter();
        painter.rect(
            rect,
            CornerRadius::same(sizing::CORNER_RADIUS),
            fill,
            Stroke::new(1.0, border),
            StrokeKind::Inside,
        );

        if let Some(bar) = grip_rect {
            let bar_fill = match self.grip {
                Grip::Handle => theme::GRIP_FILL,
                Grip::Cancel => theme::CANCEL_FILL,
                Grip::Anywhere => Color32::TRANSPARENT,
            };
            let top_radius = CornerRadius {
                nw: sizing::CORNER_RADIUS,
                ne: sizing::CORNER_RADIUS,
                sw: 0,
                se: 0,
            };
            painter.rect_filled(bar.shrink(1.0), top_radius, bar_fill);
            painter.text(
                Pos2::new(bar.left() + sizing::BOX_PADDING, bar.center().y),
                Align2::LEFT_CENTER,
                self.grip_label,
                FontId::proportional(12.0),
                theme::TEXT,
            );
        }
    }
}

/// Turn `Parent`/`Window` bounds into concrete offset limits for this
/// frame: the limits that keep the zero-offset `slot` rect inside the
/// containing rect.
fn resolve_bounds(bounds: Bounds, slot: Rect, parent: Rect, window: Rect) -> Option<BoundsRect> {
    let containing = match bounds {
        Bounds::Parent => parent,
        Bounds::Window => window,
        Bounds::Unbounded | Bounds::Rect(_) => return None,
    };
    Some(BoundsRect::new(
        f64::from(containing.left() - slot.left()),
        f64::from(containing.top() - slot.top()),
        f64::from(containing.right() - slot.right()),
        f64::from(containing.bottom() - slot.bottom()),
    ))
}

fn grip_bar_rect(rect: Rect, grip: Grip) -> Option<Rect> {
    match grip {
        Grip::Anywhere => None,
        Grip::Handle | Grip::Cancel => Some(Rect::from_min_max(
            rect.min,
            Pos2::new(rect.max.x, rect.min.y + sizing::GRIP_HEIGHT),
        )),
    }
}

fn inner_rect(rect: Rect, grip_rect: Option<Rect>) -> Rect {
    let top = grip_rect.map_or(rect.top(), |bar| bar.bottom());
    Rect::from_min_max(Pos2::new(rect.left(), top), rect.max).shrink(sizing::BOX_PADDING)
}

fn to_point(pos: Pos2) -> Point {
    Point::new(f64::from(pos.x), f64::from(pos.y))
}

fn offset_of(position: Point) -> Vec2 {
    vec2(position.x as f32, position.y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_bounds_keeps_slot_inside_parent() {
        let slot = Rect::from_min_max(Pos2::new(100.0, 100.0), Pos2::new(150.0, 140.0));
        let parent = Rect::from_min_max(Pos2::new(50.0, 50.0), Pos2::new(400.0, 300.0));
        let window = Rect::from_min_max(Pos2::ZERO, Pos2::new(1280.0, 800.0));

        let limits = resolve_bounds(Bounds::Parent, slot, parent, window).unwrap();
        assert_eq!(limits, BoundsRect::new(-50.0, -50.0, 250.0, 160.0));

        // Offset zero (the layout position) is always inside.
        assert!(limits.contains(kurbo::Point::ZERO));
    }

    #[test]
    fn test_resolve_bounds_window_uses_screen_rect() {
        let slot = Rect::from_min_max(Pos2::new(10.0, 20.0), Pos2::new(60.0, 50.0));
        let parent = Rect::from_min_max(Pos2::ZERO, Pos2::new(100.0, 100.0));
        let window = Rect::from_min_max(Pos2::ZERO, Pos2::new(640.0, 480.0));

        let limits = resolve_bounds(Bounds::Window, slot, parent, window).unwrap();
        assert_eq!(limits, BoundsRect::new(-10.0, -20.0, 580.0, 430.0));
    }

    #[test]
    fn test_resolve_bounds_fixed_rects_pass_through() {
        let slot = Rect::from_min_max(Pos2::ZERO, Pos2::new(10.0, 10.0));
        let any = Rect::from_min_max(Pos2::ZERO, Pos2::new(100.0, 100.0));
        assert!(resolve_bounds(Bounds::Unbounded, slot, any, any).is_none());
        assert!(
            resolve_bounds(Bounds::Rect(BoundsRect::symmetric(5.0)), slot, any, any).is_none()
        );
    }

    #[test]
    fn test_grip_bar_only_for_handle_and_cancel() {
        let rect = Rect::from_min_max(Pos2::ZERO, Pos2::new(200.0, 120.0));
        assert!(grip_bar_rect(rect, Grip::Anywhere).is_none());
        let bar = grip_bar_rect(rect, Grip::Handle).unwrap();
        assert_eq!(bar.height(), sizing::GRIP_HEIGHT);
        assert_eq!(bar.width(), rect.width());
    }
}
