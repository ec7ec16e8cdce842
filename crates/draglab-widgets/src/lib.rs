//! Reusable egui widgets for the DragLab gallery.
//!
//! - **DragBox**: a draggable region driven by a [`draglab_core::DragSession`],
//!   with axis/bounds/grid constraints and handle/cancel grips
//! - **CounterButton**: the embedded click-counter button

pub mod counter;
pub mod drag_box;

pub use counter::CounterButton;
pub use drag_box::{DragBox, DragBoxEvent, DragBoxResponse, Grip};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Default draggable box width
    pub const BOX_WIDTH: f32 = 200.0;
    /// Default draggable box height
    pub const BOX_HEIGHT: f32 = 120.0;
    /// Height of a handle/cancel grip bar
    pub const GRIP_HEIGHT: f32 = 22.0;
    /// Inner padding of a box
    pub const BOX_PADDING: f32 = 8.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Box background
    pub const BOX_FILL: Color32 = Color32::from_rgb(252, 252, 252);
    /// Box background while dragging
    pub const BOX_FILL_ACTIVE: Color32 = Color32::from_rgb(235, 245, 255);
    /// Box border
    pub const BOX_BORDER: Color32 = Color32::from_rgb(153, 153, 153);
    /// Box border while dragging (blue)
    pub const BOX_BORDER_ACTIVE: Color32 = Color32::from_rgb(59, 130, 246);
    /// Handle grip bar fill
    pub const GRIP_FILL: Color32 = Color32::from_rgb(219, 234, 254);
    /// Cancel grip bar fill
    pub const CANCEL_FILL: Color32 = Color32::from_rgb(254, 226, 226);
}
