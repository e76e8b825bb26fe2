use burn::backend::NdArray;
use burn::tensor::{Distribution, Tensor};
use vmamba_rust::Ss2dConfig;

type TestBackend = NdArray<f32>;

#[test]
fn test_output_shape_matches_input() {
    let device = Default::default();
    let ss2d = Ss2dConfig::new(4).init::<TestBackend>(&device);

    for [batch, height, width] in [[1, 1, 1], [2, 4, 6], [3, 5, 2]] {
        let features = Tensor::<TestBackend, 4>::random(
            [batch, 4, height, width],
            Distribution::Normal(0.0, 1.0),
            &device,
        );
        let output = ss2d.forward(features);
        assert_eq!(output.dims(), [batch, 4, height, width]);
    }
}

#[test]
fn test_identity_transforms_preserve_constant_input() {
    let device = Default::default();
    let ss2d = Ss2dConfig::new(2)
        .with_identity_init(true)
        .init::<TestBackend>(&device);

    // Averaging four permutations of a constant grid gives the grid back.
    let features = Tensor::<TestBackend, 4>::full([1, 2, 3, 4], 3.0, &device);
    let output = ss2d.forward(features.clone());

    assert!(output.equal(features).all().into_scalar());
}

#[test]
fn test_identity_fusion_mixes_mirrored_positions() {
    let device = Default::default();
    let ss2d = Ss2dConfig::new(1)
        .with_identity_init(true)
        .init::<TestBackend>(&device);

    // For a 2x2 grid [[a, b], [c, d]] the four flattened orders are
    // [a,b,c,d], [d,c,b,a], [a,c,b,d] and [d,b,c,a]; fusing them in scan
    // order averages each position with its mirror.
    let features = Tensor::<TestBackend, 4>::from_floats([[[[1.0, 2.0], [4.0, 8.0]]]], &device);
    let output = ss2d.forward(features);

    let values: Vec<f32> = output.into_data().to_vec().unwrap();
    assert_eq!(values, vec![4.5, 3.0, 3.0, 4.5]);
}

#[test]
#[should_panic(expected = "scan module expects")]
fn test_channel_mismatch_rejected() {
    let device = Default::default();
    let ss2d = Ss2dConfig::new(4).init::<TestBackend>(&device);
    let features = Tensor::<TestBackend, 4>::zeros([1, 8, 2, 2], &device);
    let _ = ss2d.forward(features);
}
