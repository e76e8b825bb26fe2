//! Scan path extraction for 2D feature maps.
//!
//! A `[batch, channel, height, width]` feature map is unrolled into four 1D
//! traversal sequences, one per scan direction. The direction order is fixed
//! and load-bearing: path `i` is always consumed by transform unit `i` of the
//! owning scan module.

use burn::prelude::*;

/// The four traversal directions, in their canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Row-major flatten of the grid.
    LeftToRight,
    /// Row-major flatten, reversed along the flattened axis.
    RightToLeft,
    /// Height/width axes swapped, then flattened.
    TopToBottom,
    /// Height/width axes swapped, flattened, reversed along the flattened axis.
    BottomToTop,
}

impl ScanDirection {
    pub const ALL: [ScanDirection; 4] = [
        ScanDirection::LeftToRight,
        ScanDirection::RightToLeft,
        ScanDirection::TopToBottom,
        ScanDirection::BottomToTop,
    ];

    pub fn index(self) -> usize {
        match self {
            ScanDirection::LeftToRight => 0,
            ScanDirection::RightToLeft => 1,
            ScanDirection::TopToBottom => 2,
            ScanDirection::BottomToTop => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScanDirection::LeftToRight => "left-to-right",
            ScanDirection::RightToLeft => "right-to-left",
            ScanDirection::TopToBottom => "top-to-bottom",
            ScanDirection::BottomToTop => "bottom-to-top",
        }
    }
}

/// Unroll a feature map along a single scan direction.
///
/// Input `[batch, channel, height, width]`, output `[batch, channel, height * width]`.
pub fn scan_path<B: Backend>(features: Tensor<B, 4>, direction: ScanDirection) -> Tensor<B, 3> {
    let [batch, channels, height, width] = features.dims();
    assert!(
        height > 0 && width > 0,
        "scan paths require non-empty spatial dimensions, got {height}x{width}"
    );
    let len = height * width;

    match direction {
        ScanDirection::LeftToRight => features.reshape([batch, channels, len]),
        ScanDirection::RightToLeft => features.reshape([batch, channels, len]).flip([2]),
        ScanDirection::TopToBottom => features.swap_dims(2, 3).reshape([batch, channels, len]),
        ScanDirection::BottomToTop => {
            features.swap_dims(2, 3).reshape([batch, channels, len]).flip([2])
        }
    }
}

/// Unroll a feature map along all four directions, in canonical order.
pub fn extract_scan_paths<B: Backend>(features: Tensor<B, 4>) -> [Tensor<B, 3>; 4] {
    ScanDirection::ALL.map(|direction| scan_path(features.clone(), direction))
}

/// Fold a row-major scan path back into a `[batch, channel, height, width]` grid.
///
/// Exact inverse of the `LeftToRight` unroll.
pub fn fold_row_major<B: Backend>(path: Tensor<B, 3>, height: usize, width: usize) -> Tensor<B, 4> {
    let [batch, channels, len] = path.dims();
    assert_eq!(
        len,
        height * width,
        "sequence length {len} does not match a {height}x{width} grid"
    );
    path.reshape([batch, channels, height, width])
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    #[test]
    fn direction_order_is_stable() {
        for (i, direction) in ScanDirection::ALL.into_iter().enumerate() {
            assert_eq!(direction.index(), i);
        }
    }

    #[test]
    fn paths_share_batch_channel_and_length() {
        let device = Default::default();
        let features = Tensor::<TestBackend, 4>::random(
            [2, 3, 4, 5],
            burn::tensor::Distribution::Normal(0.0, 1.0),
            &device,
        );
        for path in extract_scan_paths(features) {
            assert_eq!(path.dims(), [2, 3, 20]);
        }
    }
}
