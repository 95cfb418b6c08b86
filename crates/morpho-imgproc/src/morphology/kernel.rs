/// Orientation of a line structuring element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOrientation {
    /// A 1-pixel-tall horizontal line.
    Horizontal,
    /// A 1-pixel-wide vertical line.
    Vertical,
}

/// Shapes of morphological kernels.
///
/// Defines the geometry of the kernel used in morphological operations.
/// All kernels are centered at their geometric center.
#[derive(Debug, Clone)]
pub enum KernelShape {
    /// A rectangular structuring element; all pixels within the rectangle are
    /// included in the morphological operation.
    Rect {
        /// The width of the rectangle.
        width: usize,
        /// The height of the rectangle.
        height: usize,
    },

    /// An ellipse (or disk) shaped structuring element.
    ///
    /// Pixels inside the elliptical boundary are included, defined by the
    /// equation: (x^2 / rx^2) + (y^2 / ry^2) <= 1.
    Ellipse {
        /// The width of the ellipse.
        width: usize,
        /// The height of the ellipse.
        height: usize,
    },

    /// A 1-pixel-thick line structuring element.
    Line {
        /// The direction the line extends in.
        orientation: LineOrientation,
        /// The length of the line in pixels.
        length: usize,
    },
}

/// A morphological structuring element.
///
/// The kernel defines the neighborhood structure used in morphological
/// operations (dilate, erode, open, close and the hat transforms). It stores a
/// binary mask where 1 indicates pixels included in the operation and 0
/// indicates excluded pixels.
///
/// # Example
///
/// ```rust
/// use morpho_imgproc::morphology::{Kernel, KernelShape};
///
/// let kernel = Kernel::new(KernelShape::Rect { width: 3, height: 3 });
/// assert_eq!(kernel.width(), 3);
/// assert_eq!(kernel.height(), 3);
/// assert_eq!(kernel.pad(), (1, 1));
/// ```
pub struct Kernel {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl Kernel {
    /// Create a morphological kernel from a shape.
    ///
    /// # Arguments
    ///
    /// * `shape` - The shape of the kernel (Rect, Ellipse, or Line).
    pub fn new(shape: KernelShape) -> Self {
        match shape {
            KernelShape::Rect { width, height } => rect_kernel(width, height),
            KernelShape::Ellipse { width, height } => ellipse_kernel(width, height),
            KernelShape::Line {
                orientation,
                length,
            } => line_kernel(orientation, length),
        }
    }

    /// Get a reference to the kernel data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the width of the kernel.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the kernel.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the padding for the kernel (offset of the center cell).
    pub fn pad(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }
}

/// Create a rectangular structuring element filled with 1s.
pub fn rect_kernel(width: usize, height: usize) -> Kernel {
    Kernel {
        data: vec![1u8; width * height],
        width,
        height,
    }
}

/// Create an ellipse structuring element.
///
/// # Arguments
///
/// * `width` - The width of the ellipse.
/// * `height` - The height of the ellipse.
///
/// # Returns
///
/// A [`Kernel`] with 1s inside the ellipse boundary.
pub fn ellipse_kernel(width: usize, height: usize) -> Kernel {
    let mut data = vec![0u8; width * height];
    let rx = (width.saturating_sub(1)) as f32 / 2.0;
    let ry = (height.saturating_sub(1)) as f32 / 2.0;

    for i in 0..height {
        for j in 0..width {
            let nx = if rx > 0.0 {
                (j as f32 - rx) / rx
            } else {
                0.0
            };
            let ny = if ry > 0.0 {
                (i as f32 - ry) / ry
            } else {
                0.0
            };
            if nx * nx + ny * ny <= 1.0 {
                data[i * width + j] = 1;
            }
        }
    }

    Kernel {
        data,
        width,
        height,
    }
}

/// Create a 1-pixel-thick line structuring element of the given length.
pub fn line_kernel(orientation: LineOrientation, length: usize) -> Kernel {
    match orientation {
        LineOrientation::Horizontal => Kernel {
            data: vec![1u8; length],
            width: length,
            height: 1,
        },
        LineOrientation::Vertical => Kernel {
            data: vec![1u8; length],
            width: 1,
            height: length,
        },
    }
}
