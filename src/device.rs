//! Backend selection for the training and inference binaries.
//!
//! The device is created here and threaded explicitly through every
//! construction and forward call; there is no process-global device state.

use burn::backend::wgpu::WgpuDevice;
use burn::backend::{Autodiff, Wgpu};

/// Backend used by the binaries.
pub type Backend = Wgpu<f32, i32>;

/// Autodiff backend used for training.
pub type AutodiffBackend = Autodiff<Backend>;

/// Create the default WGPU device.
pub fn init_device() -> WgpuDevice {
    WgpuDevice::default()
}
