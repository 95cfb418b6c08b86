#![deny(missing_docs)]
//! Raster container types for generating and manipulating grayscale images.

/// raster representation used by all image operators.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
