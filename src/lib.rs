//! VMamba: a selective-scan vision backbone for image classification.

// Algorithmic core: scan path extraction, per-path transforms, fusion
pub mod s6;
pub mod scan;
pub mod ss2d;
pub mod vss_block;

// Backbone and training driver
pub mod data;
pub mod device;
pub mod inference;
pub mod model;
pub mod training;

// Re-exports for convenience
pub use model::{Model, ModelConfig};
pub use s6::{S6, S6Config};
pub use scan::{ScanDirection, extract_scan_paths, fold_row_major, scan_path};
pub use ss2d::{Ss2d, Ss2dConfig};
pub use vss_block::{VssBlock, VssBlockConfig};
