use burn::module::Param;
use burn::nn::{Linear, LinearConfig};
use burn::prelude::*;

/// Configuration for a single selective-scan transform unit.
#[derive(Config, Debug)]
pub struct S6Config {
    /// Channel width of the scan paths the unit operates on.
    pub channels: usize,
    /// Start from weight = I, bias = 0 instead of the default random init.
    #[config(default = "false")]
    pub identity_init: bool,
}

impl S6Config {
    /// Returns the initialized transform unit.
    pub fn init<B: Backend>(&self, device: &B::Device) -> S6<B> {
        let mut linear = LinearConfig::new(self.channels, self.channels).init(device);
        if self.identity_init {
            linear.weight = Param::from_tensor(Tensor::eye(self.channels, device));
            linear.bias = Some(Param::from_tensor(Tensor::zeros([self.channels], device)));
        }
        S6 {
            linear,
            channels: self.channels,
        }
    }
}

/// Selective-scan transform unit: a learned affine over the channel axis,
/// applied independently at every position of a scan path.
#[derive(Module, Debug)]
pub struct S6<B: Backend> {
    linear: Linear<B>,
    channels: usize,
}

impl<B: Backend> S6<B> {
    /// # Shapes
    ///   - Input `[batch, channel, len]`
    ///   - Output `[batch, channel, len]`
    pub fn forward(&self, path: Tensor<B, 3>) -> Tensor<B, 3> {
        let [_, channels, _] = path.dims();
        assert_eq!(
            channels, self.channels,
            "scan path has {channels} channels but the transform unit expects {}",
            self.channels
        );
        // Linear acts on the trailing dimension, so bring channels last.
        let x = path.swap_dims(1, 2);
        let x = self.linear.forward(x);
        x.swap_dims(1, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    #[test]
    fn identity_init_is_the_identity_function() {
        let device = Default::default();
        let unit: S6<TestBackend> = S6Config::new(3).with_identity_init(true).init(&device);
        let path = Tensor::<TestBackend, 3>::random(
            [2, 3, 7],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        );
        let output = unit.forward(path.clone());
        assert!(output.equal(path).all().into_scalar());
    }

    #[test]
    fn output_shape_matches_input() {
        let device = Default::default();
        let unit: S6<TestBackend> = S6Config::new(5).init(&device);
        let path = Tensor::<TestBackend, 3>::zeros([1, 5, 12], &device);
        assert_eq!(unit.forward(path).dims(), [1, 5, 12]);
    }
}
