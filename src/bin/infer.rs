#![recursion_limit = "256"]
use burn::data::dataset::{Dataset, vision::ImageFolderDataset};
use rand::Rng;
use vmamba_rust::device::{Backend, init_device};
use vmamba_rust::inference;

fn main() {
    let device = init_device();

    // All the training artifacts are saved in this directory
    let artifact_dir = "/tmp/vmamba-training";

    // Classify a random test sample
    let dataset = ImageFolderDataset::cifar10_test();
    let index = rand::rng().random_range(0..dataset.len());

    inference::infer::<Backend>(artifact_dir, device, dataset.get(index).unwrap());
}
