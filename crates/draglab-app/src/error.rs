//! Shell initialization errors.

use thiserror::Error;

/// Everything that can go wrong while bringing up the window and GPU.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),

    #[error("failed to create rendering surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable graphics adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to acquire graphics device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface configuration not supported by adapter")]
    UnsupportedSurface,
}
