use burn::data::dataloader::batcher::Batcher;
use burn::data::dataset::vision::{Annotation, ImageDatasetItem};
use burn::prelude::*;
use burn::record::{CompactRecorder, Recorder};

use crate::data::CifarBatcher;
use crate::model::Model;
use crate::training::TrainingConfig;

/// CIFAR-10 class names, in label order.
pub const CLASSES: [&str; 10] = [
    "airplane",
    "automobile",
    "bird",
    "cat",
    "deer",
    "dog",
    "frog",
    "horse",
    "ship",
    "truck",
];

pub fn infer<B: Backend>(artifact_dir: &str, device: B::Device, item: ImageDatasetItem) {
    let config = TrainingConfig::load(format!("{artifact_dir}/config.json"))
        .expect("Config should exist for the model; run train first");
    let record = CompactRecorder::new()
        .load(format!("{artifact_dir}/model").into(), &device)
        .expect("Trained model should exist; run train first");

    let model: Model<B> = config.model.init(&device).load_record(record);

    let label = match item.annotation {
        Annotation::Label(label) => label,
        _ => panic!("expected a class label annotation"),
    };
    let batcher = CifarBatcher::default();
    let batch = batcher.batch(vec![item], &device);
    let output = model.forward(batch.images);
    let predicted: i64 = output.argmax(1).flatten::<1>(0, 1).into_scalar().elem();

    println!(
        "Predicted {} Expected {}",
        CLASSES[predicted as usize], CLASSES[label]
    );
}
