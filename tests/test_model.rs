use burn::backend::NdArray;
use burn::tensor::{Distribution, Tensor};
use vmamba_rust::{ModelConfig, VssBlockConfig};

type TestBackend = NdArray<f32>;

#[test]
fn test_block_channel_transition() {
    let device = Default::default();
    let block = VssBlockConfig::new(32, 64).init::<TestBackend>(&device);

    let features =
        Tensor::<TestBackend, 4>::random([2, 32, 8, 8], Distribution::Normal(0.0, 1.0), &device);
    let output = block.forward(features);

    assert_eq!(output.dims(), [2, 64, 8, 8]);
}

#[test]
fn test_backbone_end_to_end() {
    let device = Default::default();
    let model = ModelConfig::new(10)
        .with_num_blocks(2)
        .with_identity_init(true)
        .init::<TestBackend>(&device);

    // Two doubling blocks on a 32-channel stem feed a 128-wide head.
    assert_eq!(model.final_channels(), 128);

    let images =
        Tensor::<TestBackend, 4>::random([4, 3, 32, 32], Distribution::Uniform(0.0, 1.0), &device);
    let logits = model.forward(images);

    assert_eq!(logits.dims(), [4, 10]);
}

#[test]
fn test_forward_is_pure_between_calls() {
    let device = Default::default();
    let model = ModelConfig::new(10)
        .with_num_blocks(1)
        .init::<TestBackend>(&device);

    let images =
        Tensor::<TestBackend, 4>::random([1, 3, 8, 8], Distribution::Uniform(0.0, 1.0), &device);

    // The head exists from construction and forward never mutates the model,
    // so repeated calls agree exactly.
    let first = model.forward(images.clone());
    let second = model.forward(images);

    assert_eq!(first.dims(), [1, 10]);
    assert!(first.equal(second).all().into_scalar());
}
