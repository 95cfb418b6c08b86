use std::path::PathBuf;

use morpho_image::ImageError;

/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("The file does not exist: {0}")]
    FileDoesNotExist(PathBuf),

    /// Error when the file extension is not supported.
    #[error("Invalid file extension: {0}")]
    InvalidFileExtension(PathBuf),

    /// Error when decoding the png file.
    #[error("Error decoding the png file: {0}")]
    PngDecodeError(String),

    /// Error when encoding the png file.
    #[error("Error encoding the png file: {0}")]
    PngEncodeError(String),

    /// Error from the underlying file system.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error at the raster container level.
    #[error(transparent)]
    Image(#[from] ImageError),
}
