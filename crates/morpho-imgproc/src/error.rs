use morpho_image::ImageError;

/// Errors produced by the image processing operators.
#[derive(thiserror::Error, Debug)]
pub enum ImgprocError {
    /// Error at the raster container level.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error when a draw coordinate falls outside the image bounds.
    #[error("Draw coordinate ({0}, {1}) out of bounds for image {2}x{3}")]
    InvalidGeometry(i64, i64, usize, usize),

    /// Error when a polygon has fewer than three vertices.
    #[error("Polygon requires at least 3 vertices, got {0}")]
    DegeneratePolygon(usize),

    /// Error when a structuring element is incompatible with the image dimensions.
    #[error("Structuring element {0}x{1} incompatible with image {2}x{3}")]
    ShapeMismatch(usize, usize, usize, usize),
}
