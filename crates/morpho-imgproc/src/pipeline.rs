//! The two reference pipelines: a side-by-side operation gallery and a
//! directed vein-extraction chain. Both collect every intermediate result in
//! a strongly typed struct so downstream consumers get all fields checked at
//! compile time.

use morpho_image::Image;

use crate::error::ImgprocError;
use crate::morphology::{morph, skeletonize, Kernel, KernelShape, LineOrientation, MorphOp};
use crate::threshold::threshold_binary;

/// Fixed threshold used to binarize synthesized shape images.
pub const SHAPE_MASK_THRESHOLD: u8 = 128;

/// Fixed threshold applied to the vein top-hat response.
pub const VEIN_THRESHOLD: u8 = 50;

/// Every result of the operation gallery, one field per operation.
///
/// Dilation, erosion, opening, closing and the skeleton are computed on the
/// binarized mask; the hat transforms are computed on the original grayscale
/// image.
pub struct MorphologyGallery {
    /// The unmodified input image.
    pub original: Image<u8, 1>,
    /// The input binarized at [`SHAPE_MASK_THRESHOLD`].
    pub binary: Image<u8, 1>,
    /// Dilation with a 5x5 ellipse.
    pub dilated_disk: Image<u8, 1>,
    /// Dilation with a 1x7 vertical line.
    pub dilated_line_vert: Image<u8, 1>,
    /// Dilation with a 7x1 horizontal line.
    pub dilated_line_horiz: Image<u8, 1>,
    /// Erosion with a 5x5 ellipse.
    pub eroded_disk: Image<u8, 1>,
    /// Erosion with a 1x7 vertical line.
    pub eroded_line_vert: Image<u8, 1>,
    /// Erosion with a 7x1 horizontal line.
    pub eroded_line_horiz: Image<u8, 1>,
    /// Opening with a 3x3 rectangle.
    pub opened_3x3: Image<u8, 1>,
    /// Opening with a 5x5 rectangle.
    pub opened_5x5: Image<u8, 1>,
    /// Opening with a 9x9 rectangle.
    pub opened_9x9: Image<u8, 1>,
    /// Closing with a 3x3 rectangle.
    pub closed_3x3: Image<u8, 1>,
    /// Closing with a 5x5 rectangle.
    pub closed_5x5: Image<u8, 1>,
    /// Closing with a 9x9 rectangle.
    pub closed_9x9: Image<u8, 1>,
    /// Zhang-Suen skeleton of the binarized mask.
    pub skeleton: Image<u8, 1>,
    /// Top-hat of the original with a 25x25 rectangle.
    pub top_hat: Image<u8, 1>,
    /// Bottom-hat of the original with a 25x25 rectangle.
    pub bottom_hat: Image<u8, 1>,
}

impl MorphologyGallery {
    /// All results paired with a stable name, in presentation order.
    pub fn entries(&self) -> [(&'static str, &Image<u8, 1>); 17] {
        [
            ("original", &self.original),
            ("binary", &self.binary),
            ("dilated_disk", &self.dilated_disk),
            ("dilated_line_vert", &self.dilated_line_vert),
            ("dilated_line_horiz", &self.dilated_line_horiz),
            ("eroded_disk", &self.eroded_disk),
            ("eroded_line_vert", &self.eroded_line_vert),
            ("eroded_line_horiz", &self.eroded_line_horiz),
            ("opened_3x3", &self.opened_3x3),
            ("opened_5x5", &self.opened_5x5),
            ("opened_9x9", &self.opened_9x9),
            ("closed_3x3", &self.closed_3x3),
            ("closed_5x5", &self.closed_5x5),
            ("closed_9x9", &self.closed_9x9),
            ("skeleton", &self.skeleton),
            ("top_hat", &self.top_hat),
            ("bottom_hat", &self.bottom_hat),
        ]
    }
}

/// Every stage of the vein-extraction chain, one field per stage.
pub struct VeinExtraction {
    /// The input after closing with a 5x5 ellipse.
    pub closed: Image<u8, 1>,
    /// The closed image after opening with a 3x3 ellipse.
    pub opened: Image<u8, 1>,
    /// Top-hat of the opened image with a 15x15 rectangle.
    pub top_hat: Image<u8, 1>,
    /// The top-hat response binarized at [`VEIN_THRESHOLD`].
    pub binary: Image<u8, 1>,
    /// Zhang-Suen skeleton of the binarized response.
    pub skeleton: Image<u8, 1>,
}

impl VeinExtraction {
    /// All stages paired with a stable name, in pipeline order.
    pub fn entries(&self) -> [(&'static str, &Image<u8, 1>); 5] {
        [
            ("closed", &self.closed),
            ("opened", &self.opened),
            ("top_hat", &self.top_hat),
            ("binary", &self.binary),
            ("skeleton", &self.skeleton),
        ]
    }
}

fn run(op: MorphOp, src: &Image<u8, 1>, kernel: &Kernel) -> Result<Image<u8, 1>, ImgprocError> {
    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    morph(op, src, &mut dst, kernel)?;
    Ok(dst)
}

/// Run the operation gallery over a grayscale image.
///
/// The gallery exists to let a viewer compare operation families side by
/// side; apart from the hat transforms requiring the original grayscale
/// input, the operations are independent of each other.
///
/// # Arguments
///
/// * `src` - The grayscale input image.
///
/// # Returns
///
/// A [`MorphologyGallery`] holding every result, or [`ImgprocError`] if the
/// image is smaller than the largest structuring element.
pub fn morphology_gallery(src: &Image<u8, 1>) -> Result<MorphologyGallery, ImgprocError> {
    let mut binary = Image::from_size_val(src.size(), 0u8)?;
    threshold_binary(src, &mut binary, SHAPE_MASK_THRESHOLD, 255)?;

    let disk = Kernel::new(KernelShape::Ellipse {
        width: 5,
        height: 5,
    });
    let line_vert = Kernel::new(KernelShape::Line {
        orientation: LineOrientation::Vertical,
        length: 7,
    });
    let line_horiz = Kernel::new(KernelShape::Line {
        orientation: LineOrientation::Horizontal,
        length: 7,
    });
    let rect_3x3 = Kernel::new(KernelShape::Rect {
        width: 3,
        height: 3,
    });
    let rect_5x5 = Kernel::new(KernelShape::Rect {
        width: 5,
        height: 5,
    });
    let rect_9x9 = Kernel::new(KernelShape::Rect {
        width: 9,
        height: 9,
    });
    let rect_25x25 = Kernel::new(KernelShape::Rect {
        width: 25,
        height: 25,
    });

    let mut skeleton = Image::from_size_val(src.size(), 0u8)?;
    skeletonize(&binary, &mut skeleton)?;

    Ok(MorphologyGallery {
        original: src.clone(),
        dilated_disk: run(MorphOp::Dilate, &binary, &disk)?,
        dilated_line_vert: run(MorphOp::Dilate, &binary, &line_vert)?,
        dilated_line_horiz: run(MorphOp::Dilate, &binary, &line_horiz)?,
        eroded_disk: run(MorphOp::Erode, &binary, &disk)?,
        eroded_line_vert: run(MorphOp::Erode, &binary, &line_vert)?,
        eroded_line_horiz: run(MorphOp::Erode, &binary, &line_horiz)?,
        opened_3x3: run(MorphOp::Open, &binary, &rect_3x3)?,
        opened_5x5: run(MorphOp::Open, &binary, &rect_5x5)?,
        opened_9x9: run(MorphOp::Open, &binary, &rect_9x9)?,
        closed_3x3: run(MorphOp::Close, &binary, &rect_3x3)?,
        closed_5x5: run(MorphOp::Close, &binary, &rect_5x5)?,
        closed_9x9: run(MorphOp::Close, &binary, &rect_9x9)?,
        skeleton,
        top_hat: run(MorphOp::TopHat, src, &rect_25x25)?,
        bottom_hat: run(MorphOp::BottomHat, src, &rect_25x25)?,
        binary,
    })
}

/// Run the vein-extraction chain over a grayscale image.
///
/// The only pipeline where operation order is load-bearing: closing first
/// repairs small holes, opening then removes isolated specks, the top-hat
/// isolates thin structures, and the thresholded response is thinned to a
/// skeleton.
///
/// # Arguments
///
/// * `src` - The grayscale input image.
///
/// # Returns
///
/// A [`VeinExtraction`] holding every stage, or [`ImgprocError`] if the image
/// is smaller than the largest structuring element.
pub fn extract_veins(src: &Image<u8, 1>) -> Result<VeinExtraction, ImgprocError> {
    let close_kernel = Kernel::new(KernelShape::Ellipse {
        width: 5,
        height: 5,
    });
    let open_kernel = Kernel::new(KernelShape::Ellipse {
        width: 3,
        height: 3,
    });
    let hat_kernel = Kernel::new(KernelShape::Rect {
        width: 15,
        height: 15,
    });

    let closed = run(MorphOp::Close, src, &close_kernel)?;
    let opened = run(MorphOp::Open, &closed, &open_kernel)?;
    let top_hat = run(MorphOp::TopHat, &opened, &hat_kernel)?;

    let mut binary = Image::from_size_val(src.size(), 0u8)?;
    threshold_binary(&top_hat, &mut binary, VEIN_THRESHOLD, 255)?;

    let mut skeleton = Image::from_size_val(src.size(), 0u8)?;
    skeletonize(&binary, &mut skeleton)?;

    Ok(VeinExtraction {
        closed,
        opened,
        top_hat,
        binary,
        skeleton,
    })
}
