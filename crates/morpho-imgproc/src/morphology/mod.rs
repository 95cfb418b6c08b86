// Morphological image processing operations.

/// Kernel (structuring element) types and builders.
pub mod kernel;

/// Core dilate/erode/open/close and hat transforms.
pub mod ops;

/// Topology-preserving thinning of binary masks.
pub mod skeleton;

pub use kernel::{Kernel, KernelShape, LineOrientation};
pub use ops::{bottom_hat, close, dilate, erode, morph, open, top_hat, MorphOp};
pub use skeleton::skeletonize;
