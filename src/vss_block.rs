use burn::nn::conv::{Conv2d, Conv2dConfig};
use burn::nn::{BatchNorm, BatchNormConfig, PaddingConfig2d, Relu};
use burn::prelude::*;

use crate::ss2d::{Ss2d, Ss2dConfig};

/// Configuration for a visual selective scan block.
#[derive(Config, Debug)]
pub struct VssBlockConfig {
    pub in_channels: usize,
    pub out_channels: usize,
    /// Forwarded to the scan module's transform units.
    #[config(default = "false")]
    pub identity_init: bool,
}

impl VssBlockConfig {
    /// Returns the initialized block.
    pub fn init<B: Backend>(&self, device: &B::Device) -> VssBlock<B> {
        let conv1 = Conv2dConfig::new([self.in_channels, self.out_channels], [3, 3])
            .with_padding(PaddingConfig2d::Explicit(1, 1))
            .init(device);
        let norm1 = BatchNormConfig::new(self.out_channels).init(device);
        let conv2 = Conv2dConfig::new([self.out_channels, self.out_channels], [3, 3])
            .with_padding(PaddingConfig2d::Explicit(1, 1))
            .init(device);
        let norm2 = BatchNormConfig::new(self.out_channels).init(device);
        let ss2d = Ss2dConfig::new(self.out_channels)
            .with_identity_init(self.identity_init)
            .init(device);
        let channel_adjust =
            Conv2dConfig::new([self.out_channels, self.out_channels], [1, 1]).init(device);

        VssBlock {
            conv1,
            norm1,
            conv2,
            norm2,
            activation: Relu::new(),
            ss2d,
            channel_adjust,
        }
    }
}

/// Feature extraction stage: two conv/norm/relu stages, the 2D selective scan,
/// then a 1x1 channel projection. Spatial dimensions are preserved; channels
/// move from `in_channels` to `out_channels` at the first convolution.
#[derive(Module, Debug)]
pub struct VssBlock<B: Backend> {
    conv1: Conv2d<B>,
    norm1: BatchNorm<B, 2>,
    conv2: Conv2d<B>,
    norm2: BatchNorm<B, 2>,
    activation: Relu,
    ss2d: Ss2d<B>,
    channel_adjust: Conv2d<B>,
}

impl<B: Backend> VssBlock<B> {
    /// # Shapes
    ///   - Input `[batch, in_channels, height, width]`
    ///   - Output `[batch, out_channels, height, width]`
    pub fn forward(&self, features: Tensor<B, 4>) -> Tensor<B, 4> {
        let x = self.conv1.forward(features);
        let x = self.norm1.forward(x);
        let x = self.activation.forward(x);

        let x = self.conv2.forward(x);
        let x = self.norm2.forward(x);
        let x = self.activation.forward(x);

        let x = self.ss2d.forward(x);
        self.channel_adjust.forward(x)
    }
}
