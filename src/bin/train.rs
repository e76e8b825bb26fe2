#![recursion_limit = "256"]

use burn::optim::AdamConfig;
use vmamba_rust::{
    device::{AutodiffBackend, init_device},
    model::ModelConfig,
    training::{self, TrainingConfig},
};

fn main() {
    println!("🧠 VMamba Training - selective scan vision backbone on CIFAR-10");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let device = init_device();
    println!("🚀 Initializing WGPU device: {:?}", device);

    // All the training artifacts will be saved in this directory
    let artifact_dir = "/tmp/vmamba-training";

    let config = TrainingConfig::new(ModelConfig::new(10), AdamConfig::new());

    println!("📊 Model Configuration:");
    println!("  - Classes: {}", config.model.num_classes);
    println!("  - Blocks: {}", config.model.num_blocks);
    println!("  - Stem Channels: {}", config.model.stem_channels);
    println!("  - Epochs: {} | Batch Size: {}", config.num_epochs, config.batch_size);
    println!();

    training::train::<AutodiffBackend>(artifact_dir, config, device);

    println!();
    println!("✅ Training completed successfully!");
    println!("📁 Artifacts saved in: {artifact_dir}");
}
