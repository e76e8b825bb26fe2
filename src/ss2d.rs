use burn::prelude::*;

use crate::s6::{S6, S6Config};
use crate::scan::{extract_scan_paths, fold_row_major};

/// Configuration for the 2D selective scan module.
#[derive(Config, Debug)]
pub struct Ss2dConfig {
    /// Channel width of the feature maps the module operates on.
    pub channels: usize,
    /// Initialize every per-direction transform to the identity.
    #[config(default = "false")]
    pub identity_init: bool,
}

impl Ss2dConfig {
    /// Returns the initialized scan module.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Ss2d<B> {
        let transform = S6Config::new(self.channels).with_identity_init(self.identity_init);
        Ss2d {
            transforms: [
                transform.init(device),
                transform.init(device),
                transform.init(device),
                transform.init(device),
            ],
            channels: self.channels,
        }
    }
}

/// 2D selective scan: unroll a feature map along four directions, transform
/// each path with its own unit, fuse by element-wise mean, fold back to a grid.
///
/// The transform units are a fixed array indexed by scan direction, so the
/// path/unit correspondence holds by construction. Fusion averages the paths
/// in their flattened scan order; only the row-major layout is restored when
/// folding, so reversed and transposed outputs contribute at their flattened
/// coordinates rather than their original grid positions.
#[derive(Module, Debug)]
pub struct Ss2d<B: Backend> {
    transforms: [S6<B>; 4],
    channels: usize,
}

impl<B: Backend> Ss2d<B> {
    /// # Shapes
    ///   - Input `[batch, channel, height, width]`
    ///   - Output `[batch, channel, height, width]`
    pub fn forward(&self, features: Tensor<B, 4>) -> Tensor<B, 4> {
        let [_, channels, height, width] = features.dims();
        assert_eq!(
            channels, self.channels,
            "feature map has {channels} channels but the scan module expects {}",
            self.channels
        );

        let paths = extract_scan_paths(features);
        let scanned: Vec<Tensor<B, 3>> = self
            .transforms
            .iter()
            .zip(paths)
            .map(|(transform, path)| transform.forward(path))
            .collect();

        let fused = Tensor::stack::<4>(scanned, 3).mean_dim(3).squeeze::<3>(3);
        fold_row_major(fused, height, width)
    }
}
