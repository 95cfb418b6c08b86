#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the io module.
pub mod error;

/// PNG encoding/decoding for grayscale images.
pub mod png;

pub use crate::error::IoError;
pub use crate::png::{read_image_png_mono8, write_image_png_gray8};
