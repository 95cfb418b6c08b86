use morpho_image::{Image, ImageError};

use crate::error::ImgprocError;

/// Skeletonize a binary mask using Zhang-Suen thinning.
///
/// The input is treated as binary: any pixel greater than zero is foreground.
/// Foreground regions are iteratively peeled from alternating sides until only
/// a 1-pixel-wide, connectivity-preserving centerline remains. The output
/// holds 255 for skeleton pixels and 0 elsewhere.
///
/// Pixels on the outer image border are never removed; the algorithm operates
/// on the 3x3 neighborhoods of interior pixels only.
///
/// # Arguments
///
/// * `src` - The source binary mask.
/// * `dst` - The destination image (will be overwritten).
///
/// # Returns
///
/// Ok(()) on success, or [`ImgprocError`] if the image is empty or the sizes
/// don't match.
pub fn skeletonize(src: &Image<u8, 1>, dst: &mut Image<u8, 1>) -> Result<(), ImgprocError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        )
        .into());
    }

    let width = src.width();
    let height = src.height();
    if width == 0 || height == 0 {
        return Err(ImgprocError::ShapeMismatch(3, 3, width, height));
    }

    let mut grid: Vec<u8> = src.as_slice().iter().map(|&p| u8::from(p > 0)).collect();

    if width >= 3 && height >= 3 {
        thin_to_fixpoint(&mut grid, width, height);
    }

    dst.as_slice_mut()
        .iter_mut()
        .zip(grid.iter())
        .for_each(|(d, &g)| *d = g * 255);

    Ok(())
}

/// Run Zhang-Suen sub-iterations until no pixel changes.
fn thin_to_fixpoint(grid: &mut [u8], width: usize, height: usize) {
    let idx = |x: usize, y: usize| y * width + x;
    let mut marked = Vec::new();

    loop {
        let mut changed = false;

        for step in 0..2 {
            marked.clear();

            for y in 1..height - 1 {
                for x in 1..width - 1 {
                    if grid[idx(x, y)] == 0 {
                        continue;
                    }

                    // neighbors clockwise from north: p2..p9
                    let p = [
                        grid[idx(x, y - 1)],
                        grid[idx(x + 1, y - 1)],
                        grid[idx(x + 1, y)],
                        grid[idx(x + 1, y + 1)],
                        grid[idx(x, y + 1)],
                        grid[idx(x - 1, y + 1)],
                        grid[idx(x - 1, y)],
                        grid[idx(x - 1, y - 1)],
                    ];

                    let neighbors: u8 = p.iter().sum();
                    if !(2..=6).contains(&neighbors) {
                        continue;
                    }

                    // number of 0 -> 1 transitions around the ring
                    let transitions = (0..8)
                        .filter(|&i| p[i] == 0 && p[(i + 1) % 8] == 1)
                        .count();
                    if transitions != 1 {
                        continue;
                    }

                    let (a, b) = if step == 0 {
                        (p[0] * p[2] * p[4], p[2] * p[4] * p[6])
                    } else {
                        (p[0] * p[2] * p[6], p[0] * p[4] * p[6])
                    };
                    if a != 0 || b != 0 {
                        continue;
                    }

                    marked.push(idx(x, y));
                }
            }

            if !marked.is_empty() {
                changed = true;
            }
            for &i in &marked {
                grid[i] = 0;
            }
        }

        if !changed {
            break;
        }
    }
}
