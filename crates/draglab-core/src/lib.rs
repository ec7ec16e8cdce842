//! DragLab Core Library
//!
//! UI-framework-free drag state: movement constraints, grid snapping, the
//! per-region drag session, and the shared gallery tracker.

pub mod constraint;
pub mod counter;
pub mod session;
pub mod snap;
pub mod tracker;

pub use constraint::{Axis, Bounds, BoundsRect};
pub use counter::ClickCounter;
pub use session::{DragConfig, DragData, DragSession};
pub use snap::Grid;
pub use tracker::{DragTracker, NUDGE_STEP};
