use rayon::prelude::*;

use morpho_image::{Image, ImageError};

use crate::error::ImgprocError;
use crate::parallel;

use super::kernel::Kernel;

/// The family of morphological transforms exposed by [`morph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphOp {
    /// Neighborhood maximum; expands bright regions.
    Dilate,
    /// Neighborhood minimum; shrinks bright regions.
    Erode,
    /// Erosion followed by dilation; removes small bright specks.
    Open,
    /// Dilation followed by erosion; fills small dark gaps.
    Close,
    /// Source minus its opening; isolates small bright features.
    TopHat,
    /// Closing minus the source; isolates small dark features.
    BottomHat,
}

fn check_shapes<T, const C: usize>(
    src: &Image<T, C>,
    dst: &Image<T, C>,
    kernel: &Kernel,
) -> Result<(), ImgprocError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        )
        .into());
    }

    if src.width() == 0
        || src.height() == 0
        || kernel.width() == 0
        || kernel.height() == 0
        || kernel.width() > src.width()
        || kernel.height() > src.height()
    {
        return Err(ImgprocError::ShapeMismatch(
            kernel.width(),
            kernel.height(),
            src.width(),
            src.height(),
        ));
    }

    Ok(())
}

/// Replace every pixel by an extremum over the active kernel cells.
/// Out-of-bounds samples are skipped, so border pixels reduce over the
/// in-bounds part of their neighborhood only.
fn reduce_neighborhood<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
    select: impl Fn(T, T) -> T + Send + Sync,
) where
    T: Copy + Default + Send + Sync,
{
    let width = src.width();
    let height = src.height();
    let (pad_h, pad_w) = kernel.pad();
    let k_width = kernel.width();
    let k_height = kernel.height();
    let k_data = kernel.data();
    let src_slice = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_mut(width * C)
        .enumerate()
        .for_each(|(y, row_chunk)| {
            for x in 0..width {
                for c in 0..C {
                    let mut acc: Option<T> = None;

                    for ky in 0..k_height {
                        for kx in 0..k_width {
                            if k_data[ky * k_width + kx] != 1 {
                                continue;
                            }
                            let ny = y as i64 + ky as i64 - pad_h as i64;
                            let nx = x as i64 + kx as i64 - pad_w as i64;
                            if ny < 0 || ny >= height as i64 || nx < 0 || nx >= width as i64 {
                                continue;
                            }
                            let val = src_slice[(ny as usize * width + nx as usize) * C + c];
                            acc = Some(match acc {
                                None => val,
                                Some(v) => select(v, val),
                            });
                        }
                    }

                    row_chunk[x * C + c] = acc.unwrap_or_default();
                }
            }
        });
}

/// Dilate an image using a [`Kernel`].
///
/// Dilation expands bright regions in the image. Each pixel is replaced by the
/// maximum value in the neighborhood defined by the kernel.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image (will be overwritten).
/// * `kernel` - The morphological structuring element ([`Kernel`]).
///
/// # Returns
///
/// Ok(()) on success, or [`ImgprocError`] if shapes don't match.
pub fn dilate<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
) -> Result<(), ImgprocError>
where
    T: Copy + Default + Send + Sync + Ord,
{
    check_shapes(src, dst, kernel)?;
    reduce_neighborhood(src, dst, kernel, |a: T, b: T| a.max(b));
    Ok(())
}

/// Erode an image using a [`Kernel`].
///
/// Erosion shrinks bright regions in the image. Each pixel is replaced by the
/// minimum value in the neighborhood defined by the kernel.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image (will be overwritten).
/// * `kernel` - The morphological structuring element ([`Kernel`]).
///
/// # Returns
///
/// Ok(()) on success, or [`ImgprocError`] if shapes don't match.
pub fn erode<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
) -> Result<(), ImgprocError>
where
    T: Copy + Default + Send + Sync + Ord,
{
    check_shapes(src, dst, kernel)?;
    reduce_neighborhood(src, dst, kernel, |a: T, b: T| a.min(b));
    Ok(())
}

/// Opening: erosion followed by dilation.
///
/// Removes small objects and smooths object boundaries.
pub fn open<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
) -> Result<(), ImgprocError>
where
    T: Copy + Default + Send + Sync + Ord,
{
    let mut temp = src.clone();
    erode(src, &mut temp, kernel)?;
    dilate(&temp, dst, kernel)?;
    Ok(())
}

/// Closing: dilation followed by erosion.
///
/// Fills small holes and smooths object boundaries.
pub fn close<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
) -> Result<(), ImgprocError>
where
    T: Copy + Default + Send + Sync + Ord,
{
    let mut temp = src.clone();
    dilate(src, &mut temp, kernel)?;
    erode(&temp, dst, kernel)?;
    Ok(())
}

/// Top-hat transform: the source minus its opening.
///
/// Isolates bright features smaller than the structuring element. The
/// subtraction saturates, so the result stays within the `u8` range.
pub fn top_hat<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    kernel: &Kernel,
) -> Result<(), ImgprocError> {
    check_shapes(src, dst, kernel)?;
    let mut opened = Image::from_size_val(src.size(), 0u8)?;
    open(src, &mut opened, kernel)?;
    parallel::par_iter_rows_val_two(src, &opened, dst, |s, o, d| {
        *d = s.saturating_sub(*o);
    });
    Ok(())
}

/// Bottom-hat transform: the closing minus the source.
///
/// Isolates dark features smaller than the structuring element. The
/// subtraction saturates, so the result stays within the `u8` range.
pub fn bottom_hat<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    kernel: &Kernel,
) -> Result<(), ImgprocError> {
    check_shapes(src, dst, kernel)?;
    let mut closed = Image::from_size_val(src.size(), 0u8)?;
    close(src, &mut closed, kernel)?;
    parallel::par_iter_rows_val_two(&closed, src, dst, |c, s, d| {
        *d = c.saturating_sub(*s);
    });
    Ok(())
}

/// Apply a morphological transform selected by [`MorphOp`].
///
/// Single entry point over the individual operators, useful when the
/// operation is chosen by data rather than by code.
///
/// # Arguments
///
/// * `op` - The transform to apply.
/// * `src` - The source image.
/// * `dst` - The destination image (will be overwritten).
/// * `kernel` - The morphological structuring element ([`Kernel`]).
pub fn morph<const C: usize>(
    op: MorphOp,
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    kernel: &Kernel,
) -> Result<(), ImgprocError> {
    match op {
        MorphOp::Dilate => dilate(src, dst, kernel),
        MorphOp::Erode => erode(src, dst, kernel),
        MorphOp::Open => open(src, dst, kernel),
        MorphOp::Close => close(src, dst, kernel),
        MorphOp::TopHat => top_hat(src, dst, kernel),
        MorphOp::BottomHat => bottom_hat(src, dst, kernel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::kernel::{KernelShape, LineOrientation};
    use morpho_image::ImageSize;

    fn single_pixel_image(size: usize) -> Result<Image<u8, 1>, ImgprocError> {
        let mut img = Image::from_size_val(
            ImageSize {
                width: size,
                height: size,
            },
            0u8,
        )?;
        img.set_pixel(size / 2, size / 2, 0, 255)?;
        Ok(img)
    }

    #[rustfmt::skip]
    #[test]
    fn test_dilate_rect() -> Result<(), ImgprocError> {
        let img = single_pixel_image(5)?;
        let mut dilated = Image::from_size_val(img.size(), 0u8)?;
        let kernel = Kernel::new(KernelShape::Rect { width: 3, height: 3 });
        dilate(&img, &mut dilated, &kernel)?;
        assert_eq!(
            dilated.as_slice(),
            &[
                  0,   0,   0,   0,   0,
                  0, 255, 255, 255,   0,
                  0, 255, 255, 255,   0,
                  0, 255, 255, 255,   0,
                  0,   0,   0,   0,   0,
            ]
        );
        Ok(())
    }

    #[rustfmt::skip]
    #[test]
    fn test_dilate_line_vertical() -> Result<(), ImgprocError> {
        let img = single_pixel_image(5)?;
        let mut dilated = Image::from_size_val(img.size(), 0u8)?;
        let kernel = Kernel::new(KernelShape::Line {
            orientation: LineOrientation::Vertical,
            length: 3,
        });
        dilate(&img, &mut dilated, &kernel)?;
        assert_eq!(
            dilated.as_slice(),
            &[
                  0,   0,   0,   0,   0,
                  0,   0, 255,   0,   0,
                  0,   0, 255,   0,   0,
                  0,   0, 255,   0,   0,
                  0,   0,   0,   0,   0,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_erode_removes_isolated_pixel() -> Result<(), ImgprocError> {
        let img = single_pixel_image(5)?;
        let mut eroded = Image::from_size_val(img.size(), 0u8)?;
        let kernel = Kernel::new(KernelShape::Rect {
            width: 3,
            height: 3,
        });
        erode(&img, &mut eroded, &kernel)?;
        assert!(eroded.as_slice().iter().all(|&p| p == 0));
        Ok(())
    }

    #[rustfmt::skip]
    #[test]
    fn test_erode_shrinks_block() -> Result<(), ImgprocError> {
        let mut img = Image::from_size_val(ImageSize { width: 5, height: 5 }, 0u8)?;
        crate::draw::draw_filled_rect(&mut img, (1, 1), (3, 3), [255])?;
        let mut eroded = Image::from_size_val(img.size(), 0u8)?;
        let kernel = Kernel::new(KernelShape::Rect { width: 3, height: 3 });
        erode(&img, &mut eroded, &kernel)?;
        assert_eq!(
            eroded.as_slice(),
            &[
                  0,   0,   0,   0,   0,
                  0,   0,   0,   0,   0,
                  0,   0, 255,   0,   0,
                  0,   0,   0,   0,   0,
                  0,   0,   0,   0,   0,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_open_removes_speck_keeps_block() -> Result<(), ImgprocError> {
        let mut img = Image::from_size_val(
            ImageSize {
                width: 9,
                height: 9,
            },
            0u8,
        )?;
        crate::draw::draw_filled_rect(&mut img, (4, 4), (7, 7), [255])?;
        img.set_pixel(1, 1, 0, 255)?;
        let mut opened = Image::from_size_val(img.size(), 0u8)?;
        let kernel = Kernel::new(KernelShape::Rect {
            width: 3,
            height: 3,
        });
        open(&img, &mut opened, &kernel)?;
        // the isolated speck is gone, the block survives untouched
        assert_eq!(opened.get_pixel(1, 1, 0)?, &0);
        for y in 4..=7 {
            for x in 4..=7 {
                assert_eq!(opened.get_pixel(x, y, 0)?, &255);
            }
        }
        Ok(())
    }

    #[test]
    fn test_close_fills_hole() -> Result<(), ImgprocError> {
        let mut img = Image::from_size_val(
            ImageSize {
                width: 9,
                height: 9,
            },
            0u8,
        )?;
        crate::draw::draw_filled_rect(&mut img, (1, 1), (7, 7), [255])?;
        img.set_pixel(4, 4, 0, 0)?;
        let mut closed = Image::from_size_val(img.size(), 0u8)?;
        let kernel = Kernel::new(KernelShape::Rect {
            width: 3,
            height: 3,
        });
        close(&img, &mut closed, &kernel)?;
        assert_eq!(closed.get_pixel(4, 4, 0)?, &255);
        Ok(())
    }

    #[test]
    fn test_top_hat_flat_image_is_zero() -> Result<(), ImgprocError> {
        let img = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 8,
                height: 8,
            },
            180,
        )?;
        let mut hat = Image::from_size_val(img.size(), 0u8)?;
        let kernel = Kernel::new(KernelShape::Rect {
            width: 3,
            height: 3,
        });
        top_hat(&img, &mut hat, &kernel)?;
        assert!(hat.as_slice().iter().all(|&p| p == 0));

        let mut hat = Image::from_size_val(img.size(), 0u8)?;
        bottom_hat(&img, &mut hat, &kernel)?;
        assert!(hat.as_slice().iter().all(|&p| p == 0));
        Ok(())
    }

    #[test]
    fn test_morph_dispatch_matches_direct_call() -> Result<(), ImgprocError> {
        let img = single_pixel_image(7)?;
        let kernel = Kernel::new(KernelShape::Ellipse {
            width: 5,
            height: 5,
        });

        let mut via_dispatch = Image::from_size_val(img.size(), 0u8)?;
        morph(MorphOp::Dilate, &img, &mut via_dispatch, &kernel)?;

        let mut direct = Image::from_size_val(img.size(), 0u8)?;
        dilate(&img, &mut direct, &kernel)?;

        assert_eq!(via_dispatch.as_slice(), direct.as_slice());
        Ok(())
    }

    #[test]
    fn test_kernel_exceeds_image() -> Result<(), ImgprocError> {
        let img = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0,
        )?;
        let mut dst = Image::from_size_val(img.size(), 0u8)?;
        let kernel = Kernel::new(KernelShape::Rect {
            width: 5,
            height: 5,
        });
        let res = dilate(&img, &mut dst, &kernel);
        assert!(matches!(
            res,
            Err(ImgprocError::ShapeMismatch(5, 5, 4, 4))
        ));
        Ok(())
    }

    #[test]
    fn test_size_mismatch() -> Result<(), ImgprocError> {
        let img = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 8,
                height: 8,
            },
            0,
        )?;
        let mut dst = Image::from_size_val(
            ImageSize {
                width: 8,
                height: 9,
            },
            0u8,
        )?;
        let kernel = Kernel::new(KernelShape::Rect {
            width: 3,
            height: 3,
        });
        let res = erode(&img, &mut dst, &kernel);
        assert!(matches!(res, Err(ImgprocError::Image(_))));
        Ok(())
    }
}
