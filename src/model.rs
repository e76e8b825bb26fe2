use burn::nn::conv::{Conv2d, Conv2dConfig};
use burn::nn::pool::{AdaptiveAvgPool2d, AdaptiveAvgPool2dConfig};
use burn::nn::{Linear, LinearConfig, PaddingConfig2d};
use burn::prelude::*;

use crate::vss_block::{VssBlock, VssBlockConfig};

#[derive(Config, Debug)]
pub struct ModelConfig {
    pub num_classes: usize,
    #[config(default = "4")]
    pub num_blocks: usize,
    #[config(default = "3")]
    pub in_channels: usize,
    #[config(default = "32")]
    pub stem_channels: usize,
    /// Initialize every scan transform to the identity.
    #[config(default = "false")]
    pub identity_init: bool,
}

impl ModelConfig {
    /// Returns the initialized backbone.
    ///
    /// The classification head is built here, eagerly: the final channel
    /// width is known once the block widths are laid out, so there is no
    /// deferred state to create on the first forward call.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Model<B> {
        let stem = Conv2dConfig::new([self.in_channels, self.stem_channels], [3, 3])
            .with_padding(PaddingConfig2d::Explicit(1, 1))
            .init(device);

        let mut blocks = Vec::with_capacity(self.num_blocks);
        let mut channels = self.stem_channels;
        for _ in 0..self.num_blocks {
            let next_channels = channels * 2;
            blocks.push(
                VssBlockConfig::new(channels, next_channels)
                    .with_identity_init(self.identity_init)
                    .init(device),
            );
            channels = next_channels;
        }

        Model {
            stem,
            blocks,
            pool: AdaptiveAvgPool2dConfig::new([1, 1]).init(),
            head: LinearConfig::new(channels, self.num_classes).init(device),
            final_channels: channels,
        }
    }
}

/// VMamba backbone: stem convolution, a stack of selective scan blocks with
/// doubling channel widths, global average pooling, and a linear head.
#[derive(Module, Debug)]
pub struct Model<B: Backend> {
    stem: Conv2d<B>,
    blocks: Vec<VssBlock<B>>,
    pool: AdaptiveAvgPool2d,
    head: Linear<B>,
    final_channels: usize,
}

impl<B: Backend> Model<B> {
    /// Channel width entering the classification head.
    pub fn final_channels(&self) -> usize {
        self.final_channels
    }

    /// # Shapes
    ///   - Images `[batch, in_channels, height, width]`
    ///   - Output `[batch, num_classes]`
    pub fn forward(&self, images: Tensor<B, 4>) -> Tensor<B, 2> {
        let mut x = self.stem.forward(images);
        for block in &self.blocks {
            x = block.forward(x);
        }
        let x = self.pool.forward(x);
        let x = x.flatten::<2>(1, 3);
        self.head.forward(x)
    }
}
