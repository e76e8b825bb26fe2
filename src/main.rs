use burn::tensor::{Distribution, Tensor};
use vmamba_rust::{
    ModelConfig, ScanDirection, Ss2dConfig,
    device::{Backend, init_device},
    extract_scan_paths, fold_row_major,
};

fn main() {
    let device = init_device();
    println!("WGPU device selected: {:?}", device);

    // Verify the scan path round trip on a random feature map
    let features =
        Tensor::<Backend, 4>::random([2, 8, 16, 16], Distribution::Normal(0.0, 1.0), &device);
    let paths = extract_scan_paths(features.clone());
    for (direction, path) in ScanDirection::ALL.into_iter().zip(&paths) {
        println!("{:<14} path shape: {:?}", direction.name(), path.dims());
    }
    let [_, _, height, width] = features.dims();
    let rebuilt = fold_row_major(paths[0].clone(), height, width);
    println!("Row-major round trip shape: {:?}", rebuilt.dims());

    // Scan module preserves feature map shape
    let ss2d = Ss2dConfig::new(8).init::<Backend>(&device);
    let scanned = ss2d.forward(features);
    println!("Scan module output shape: {:?}", scanned.dims());

    // Full backbone forward pass on a CIFAR-sized batch
    let model = ModelConfig::new(10).with_num_blocks(2).init::<Backend>(&device);
    println!("Final channel width: {}", model.final_channels());

    let images =
        Tensor::<Backend, 4>::random([4, 3, 32, 32], Distribution::Uniform(0.0, 1.0), &device);
    let logits = model.forward(images);
    println!("Backbone output shape: {:?}", logits.dims());
    println!("Backbone output device: {:?}", logits.device());
}
