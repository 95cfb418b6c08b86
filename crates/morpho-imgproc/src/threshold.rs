use num_traits::Zero;
use std::cmp::PartialOrd;

use morpho_image::{Image, ImageError};

use crate::error::ImgprocError;
use crate::parallel;

/// Apply a binary threshold to an image.
///
/// # Arguments
///
/// * `src` - The input image of an arbitrary number of channels and type.
/// * `dst` - The output image of an arbitrary number of channels and type.
/// * `threshold` - The threshold value. Must be the same type as the image.
/// * `max_value` - The value assigned when the input value is strictly greater
///   than the threshold.
///
/// # Returns
///
/// The thresholded image with the same number of channels as the input image.
///
/// # Examples
///
/// ```
/// use morpho_image::{Image, ImageSize};
/// use morpho_imgproc::threshold::threshold_binary;
///
/// let data = vec![100u8, 200, 50, 150, 200, 250];
/// let image = Image::<_, 1>::new(ImageSize { width: 2, height: 3 }, data).unwrap();
///
/// let mut thresholded = Image::<_, 1>::from_size_val(image.size(), 0).unwrap();
///
/// threshold_binary(&image, &mut thresholded, 100, 255).unwrap();
/// assert_eq!(thresholded.as_slice(), &[0, 255, 0, 255, 255, 255]);
/// ```
pub fn threshold_binary<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    threshold: T,
    max_value: T,
) -> Result<(), ImgprocError>
where
    T: Copy + Send + Sync + PartialOrd + Zero,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        )
        .into());
    }

    if src.width() == 0 || src.height() == 0 {
        return Err(ImgprocError::ShapeMismatch(
            1,
            1,
            src.cols(),
            src.rows(),
        ));
    }

    // run the thresholding operation in parallel
    parallel::par_iter_rows_val(src, dst, |src_pixel, dst_pixel| {
        *dst_pixel = if *src_pixel > threshold {
            max_value
        } else {
            T::zero()
        };
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use morpho_image::ImageSize;

    #[test]
    fn threshold_binary_u8() -> Result<(), ImgprocError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![0u8, 127, 128, 129, 254, 255],
        )?;
        let mut binary = Image::<u8, 1>::from_size_val(image.size(), 0)?;
        threshold_binary(&image, &mut binary, 128, 255)?;
        assert_eq!(binary.as_slice(), &[0, 0, 0, 255, 255, 255]);
        Ok(())
    }

    #[test]
    fn threshold_binary_size_mismatch() -> Result<(), ImgprocError> {
        let image = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0,
        )?;
        let res = threshold_binary(&image, &mut dst, 128, 255);
        assert!(matches!(res, Err(ImgprocError::Image(_))));
        Ok(())
    }
}
