#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// utilities to draw on images.
pub mod draw;

/// error types for the image processing operators.
pub mod error;

/// morphological image processing module.
pub mod morphology;

/// salt noise injection.
pub mod noise;

/// module containing parallelization utilities.
pub mod parallel;

/// reference pipelines composing the morphology operators.
pub mod pipeline;

/// procedural synthesis of the demo scenes.
pub mod synthesis;

/// operations to threshold images.
pub mod threshold;

pub use crate::error::ImgprocError;
