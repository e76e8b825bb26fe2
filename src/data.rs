use burn::data::dataloader::batcher::Batcher;
use burn::data::dataset::vision::{Annotation, ImageDatasetItem, PixelDepth};
use burn::prelude::*;

// CIFAR-10 per-channel statistics.
const MEAN: [f32; 3] = [0.4914, 0.48216, 0.44653];
const STD: [f32; 3] = [0.24703, 0.24349, 0.26159];

const IMAGE_SIZE: usize = 32;

/// Per-channel normalizer for CIFAR-10 images in `[0, 1]`.
#[derive(Clone)]
pub struct Normalizer<B: Backend> {
    pub mean: Tensor<B, 4>,
    pub std: Tensor<B, 4>,
}

impl<B: Backend> Normalizer<B> {
    pub fn new(device: &B::Device) -> Self {
        let mean = Tensor::<B, 1>::from_floats(MEAN, device).reshape([1, 3, 1, 1]);
        let std = Tensor::<B, 1>::from_floats(STD, device).reshape([1, 3, 1, 1]);
        Self { mean, std }
    }

    pub fn normalize(&self, images: Tensor<B, 4>) -> Tensor<B, 4> {
        (images - self.mean.clone()) / self.std.clone()
    }
}

#[derive(Clone, Default)]
pub struct CifarBatcher {}

#[derive(Clone, Debug)]
pub struct CifarBatch<B: Backend> {
    pub images: Tensor<B, 4>,
    pub targets: Tensor<B, 1, Int>,
}

impl<B: Backend> Batcher<B, ImageDatasetItem, CifarBatch<B>> for CifarBatcher {
    fn batch(&self, items: Vec<ImageDatasetItem>, device: &B::Device) -> CifarBatch<B> {
        let targets = items
            .iter()
            .map(|item| match item.annotation {
                Annotation::Label(label) => Tensor::<B, 1, Int>::from_data(
                    TensorData::from([(label as i64).elem::<B::IntElem>()]),
                    device,
                ),
                _ => panic!("expected a class label annotation"),
            })
            .collect();

        let images = items
            .into_iter()
            .map(|item| {
                // CIFAR images are stored as 32x32x3 u8 pixels.
                let pixels = item
                    .image
                    .into_iter()
                    .map(|p: PixelDepth| -> u8 { p.try_into().unwrap() })
                    .collect::<Vec<u8>>();
                TensorData::new(pixels, Shape::new([IMAGE_SIZE, IMAGE_SIZE, 3]))
            })
            .map(|data| {
                Tensor::<B, 3>::from_data(data.convert::<B::FloatElem>(), device)
                    .swap_dims(2, 1)
                    .swap_dims(1, 0)
            })
            .map(|tensor| tensor / 255)
            .collect();

        let images = Tensor::stack(images, 0);
        let targets = Tensor::cat(targets, 0);

        let images = Normalizer::<B>::new(device).normalize(images);

        CifarBatch { images, targets }
    }
}
