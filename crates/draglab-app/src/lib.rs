//! DragLab application shell.
//!
//! Hosts the draggable-box demo gallery in a winit + wgpu + egui window.

pub mod app;
pub mod error;
pub mod gallery;
pub mod ui;

pub use app::{App, AppConfig};
pub use error::ShellError;
