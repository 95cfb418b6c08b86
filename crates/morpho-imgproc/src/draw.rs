use std::cmp::{max, min};

use morpho_image::Image;

use crate::error::ImgprocError;

/// Helper function to set a pixel's color, handling bounds checking.
#[inline]
fn set_pixel<const C: usize>(img: &mut Image<u8, C>, x: i64, y: i64, color: [u8; C]) {
    if x < 0 || y < 0 || x >= img.cols() as i64 || y >= img.rows() as i64 {
        return;
    }
    let start = (y as usize * img.cols() + x as usize) * C;
    img.as_slice_mut()[start..start + C].copy_from_slice(&color);
}

/// Check that every point lies inside the image bounds.
fn check_points<const C: usize>(
    img: &Image<u8, C>,
    points: &[(i64, i64)],
) -> Result<(), ImgprocError> {
    let (w, h) = (img.cols() as i64, img.rows() as i64);
    for &(x, y) in points {
        if x < 0 || y < 0 || x >= w || y >= h {
            return Err(ImgprocError::InvalidGeometry(x, y, img.cols(), img.rows()));
        }
    }
    Ok(())
}

/// Draws a line on an image inplace using a standard Bresenham's line algorithm.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `p0` - The start point of the line as a tuple of (x, y).
/// * `p1` - The end point of the line as a tuple of (x, y).
/// * `color` - The color of the line as an array of `C` elements.
/// * `thickness` - The thickness of the line. (Note: thickness > 1 is approximate).
///
/// # Errors
///
/// Returns [`ImgprocError::InvalidGeometry`] if either endpoint falls outside
/// the image bounds.
pub fn draw_line<const C: usize>(
    img: &mut Image<u8, C>,
    p0: (i64, i64),
    p1: (i64, i64),
    color: [u8; C],
    thickness: usize,
) -> Result<(), ImgprocError> {
    check_points(img, &[p0, p1])?;

    // Create local variables for moving start point
    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    // Get slopes
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut err = dx - dy;

    let half_thickness = thickness as i64 / 2;

    loop {
        if thickness <= 1 {
            set_pixel(img, x0, y0, color);
        } else {
            // Approximate thickness by stamping a small filled square at the point.
            for i in -half_thickness..=half_thickness {
                for j in -half_thickness..=half_thickness {
                    set_pixel(img, x0 + i, y0 + j, color);
                }
            }
        }

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;

        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }

    Ok(())
}

/// Draws a filled rectangle on an image inplace.
///
/// Both corners are inclusive.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `top_left` - The top-left corner coordinates (x, y).
/// * `bottom_right` - The bottom-right corner coordinates (x, y).
/// * `color` - The fill color of the rectangle.
///
/// # Errors
///
/// Returns [`ImgprocError::InvalidGeometry`] if either corner falls outside
/// the image bounds.
pub fn draw_filled_rect<const C: usize>(
    img: &mut Image<u8, C>,
    top_left: (i64, i64),
    bottom_right: (i64, i64),
    color: [u8; C],
) -> Result<(), ImgprocError> {
    check_points(img, &[top_left, bottom_right])?;

    let x_min = min(top_left.0, bottom_right.0);
    let x_max = max(top_left.0, bottom_right.0);
    let y_min = min(top_left.1, bottom_right.1);
    let y_max = max(top_left.1, bottom_right.1);

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            set_pixel(img, x, y, color);
        }
    }

    Ok(())
}

/// Draws a filled circle on an image inplace.
///
/// A pixel is filled when its offset (dx, dy) from the center satisfies
/// `dx^2 + dy^2 <= radius^2`.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `center` - The center coordinates (x, y).
/// * `radius` - The circle radius in pixels.
/// * `color` - The fill color of the circle.
///
/// # Errors
///
/// Returns [`ImgprocError::InvalidGeometry`] if the radius is negative or the
/// circle extends beyond the image bounds.
pub fn draw_filled_circle<const C: usize>(
    img: &mut Image<u8, C>,
    center: (i64, i64),
    radius: i64,
    color: [u8; C],
) -> Result<(), ImgprocError> {
    let (cx, cy) = center;
    if radius < 0 {
        return Err(ImgprocError::InvalidGeometry(
            cx,
            cy,
            img.cols(),
            img.rows(),
        ));
    }
    check_points(img, &[(cx - radius, cy - radius), (cx + radius, cy + radius)])?;

    for y in (cy - radius)..=(cy + radius) {
        for x in (cx - radius)..=(cx + radius) {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= radius * radius {
                set_pixel(img, x, y, color);
            }
        }
    }

    Ok(())
}

/// Draws a filled axis-aligned ellipse on an image inplace.
///
/// A pixel is filled when its offset (dx, dy) from the center satisfies
/// `(dx/rx)^2 + (dy/ry)^2 <= 1`, evaluated in integer arithmetic.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `center` - The center coordinates (x, y).
/// * `axes` - The semi-axes (rx, ry) in pixels.
/// * `color` - The fill color of the ellipse.
///
/// # Errors
///
/// Returns [`ImgprocError::InvalidGeometry`] if an axis is negative or the
/// ellipse extends beyond the image bounds.
pub fn draw_filled_ellipse<const C: usize>(
    img: &mut Image<u8, C>,
    center: (i64, i64),
    axes: (i64, i64),
    color: [u8; C],
) -> Result<(), ImgprocError> {
    let (cx, cy) = center;
    let (rx, ry) = axes;
    if rx < 0 || ry < 0 {
        return Err(ImgprocError::InvalidGeometry(
            cx,
            cy,
            img.cols(),
            img.rows(),
        ));
    }
    check_points(img, &[(cx - rx, cy - ry), (cx + rx, cy + ry)])?;

    for y in (cy - ry)..=(cy + ry) {
        for x in (cx - rx)..=(cx + rx) {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx * ry * ry + dy * dy * rx * rx <= rx * rx * ry * ry {
                set_pixel(img, x, y, color);
            }
        }
    }

    Ok(())
}

/// Draws a filled polygon on an image inplace using even-odd scanline filling.
///
/// Horizontal edges are skipped and each scanline fills between successive
/// edge crossings, so rows through the bottom-most vertices follow the
/// half-open scanline rule.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `points` - The polygon vertices (x, y), in order; the polygon is closed
///   implicitly between the last and first vertex.
/// * `color` - The fill color of the polygon.
///
/// # Errors
///
/// Returns [`ImgprocError::DegeneratePolygon`] for fewer than three vertices
/// and [`ImgprocError::InvalidGeometry`] if a vertex falls outside the image
/// bounds.
pub fn draw_filled_polygon<const C: usize>(
    img: &mut Image<u8, C>,
    points: &[(i64, i64)],
    color: [u8; C],
) -> Result<(), ImgprocError> {
    if points.len() < 3 {
        return Err(ImgprocError::DegeneratePolygon(points.len()));
    }
    check_points(img, points)?;

    let (y_min, y_max) = points
        .iter()
        .fold((i64::MAX, i64::MIN), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        });

    let mut crossings: Vec<f64> = Vec::with_capacity(points.len());
    for y in y_min..=y_max {
        let yc = y as f64;
        crossings.clear();

        for (i, &(x0, y0)) in points.iter().enumerate() {
            let (x1, y1) = points[(i + 1) % points.len()];
            let (fx0, fy0) = (x0 as f64, y0 as f64);
            let (fx1, fy1) = (x1 as f64, y1 as f64);
            if fy0 == fy1 {
                continue;
            }
            // half-open rule: each edge owns its lower endpoint only
            if (fy0 <= yc && yc < fy1) || (fy1 <= yc && yc < fy0) {
                let t = (yc - fy0) / (fy1 - fy0);
                crossings.push(fx0 + t * (fx1 - fx0));
            }
        }

        crossings.sort_by(|a, b| a.total_cmp(b));

        for pair in crossings.chunks_exact(2) {
            let x_start = pair[0].ceil() as i64;
            let x_end = pair[1].floor() as i64;
            for x in x_start..=x_end {
                set_pixel(img, x, y, color);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use morpho_image::ImageSize;

    #[rustfmt::skip]
    #[test]
    fn test_draw_line() -> Result<(), ImgprocError> {
        let mut img = Image::<u8, 1>::new(
            ImageSize { width: 5, height: 5 }, vec![0u8; 25],
        )?;
        draw_line(&mut img, (0, 0), (4, 4), [255], 1)?;
        assert_eq!(
            img.as_slice(),
            &[
                255,   0,   0,   0,   0,
                  0, 255,   0,   0,   0,
                  0,   0, 255,   0,   0,
                  0,   0,   0, 255,   0,
                  0,   0,   0,   0, 255,
            ]
        );
        Ok(())
    }

    #[rustfmt::skip]
    #[test]
    fn test_draw_filled_rect() -> Result<(), ImgprocError> {
        let mut img = Image::<u8, 1>::new(
            ImageSize { width: 5, height: 5 }, vec![0u8; 25],
        )?;
        draw_filled_rect(&mut img, (1, 1), (3, 2), [200])?;
        assert_eq!(
            img.as_slice(),
            &[
                  0,   0,   0,   0,   0,
                  0, 200, 200, 200,   0,
                  0, 200, 200, 200,   0,
                  0,   0,   0,   0,   0,
                  0,   0,   0,   0,   0,
            ]
        );
        Ok(())
    }

    #[rustfmt::skip]
    #[test]
    fn test_draw_filled_circle() -> Result<(), ImgprocError> {
        let mut img = Image::<u8, 1>::new(
            ImageSize { width: 5, height: 5 }, vec![0u8; 25],
        )?;
        draw_filled_circle(&mut img, (2, 2), 1, [255])?;
        assert_eq!(
            img.as_slice(),
            &[
                  0,   0,   0,   0,   0,
                  0,   0, 255,   0,   0,
                  0, 255, 255, 255,   0,
                  0,   0, 255,   0,   0,
                  0,   0,   0,   0,   0,
            ]
        );
        Ok(())
    }

    #[rustfmt::skip]
    #[test]
    fn test_draw_filled_ellipse() -> Result<(), ImgprocError> {
        let mut img = Image::<u8, 1>::new(
            ImageSize { width: 7, height: 5 }, vec![0u8; 35],
        )?;
        draw_filled_ellipse(&mut img, (3, 2), (2, 1), [255])?;
        assert_eq!(
            img.as_slice(),
            &[
                  0,   0,   0,   0,   0,   0,   0,
                  0,   0,   0, 255,   0,   0,   0,
                  0, 255, 255, 255, 255, 255,   0,
                  0,   0,   0, 255,   0,   0,   0,
                  0,   0,   0,   0,   0,   0,   0,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_draw_filled_polygon_triangle() -> Result<(), ImgprocError> {
        let mut img = Image::<u8, 1>::new(
            ImageSize {
                width: 10,
                height: 10,
            },
            vec![0u8; 100],
        )?;
        draw_filled_polygon(&mut img, &[(1, 1), (8, 1), (4, 8)], [255])?;
        // interior pixels are filled
        assert_eq!(img.get_pixel(4, 2, 0)?, &255);
        assert_eq!(img.get_pixel(4, 5, 0)?, &255);
        // pixels outside the triangle stay empty
        assert_eq!(img.get_pixel(0, 0, 0)?, &0);
        assert_eq!(img.get_pixel(9, 9, 0)?, &0);
        assert_eq!(img.get_pixel(1, 8, 0)?, &0);
        Ok(())
    }

    #[test]
    fn test_draw_filled_polygon_concave() -> Result<(), ImgprocError> {
        let mut img = Image::<u8, 1>::new(
            ImageSize {
                width: 20,
                height: 20,
            },
            vec![0u8; 400],
        )?;
        // arrow-like concave polygon; the notch between the legs stays empty
        draw_filled_polygon(
            &mut img,
            &[(5, 15), (10, 5), (15, 15), (12, 12), (8, 12)],
            [255],
        )?;
        assert_eq!(img.get_pixel(10, 8, 0)?, &255);
        assert_eq!(img.get_pixel(10, 14, 0)?, &0);
        Ok(())
    }

    #[test]
    fn test_draw_invalid_geometry() -> Result<(), ImgprocError> {
        let mut img = Image::<u8, 1>::new(
            ImageSize {
                width: 10,
                height: 10,
            },
            vec![0u8; 100],
        )?;
        let res = draw_line(&mut img, (0, 0), (10, 4), [255], 1);
        assert!(matches!(res, Err(ImgprocError::InvalidGeometry(10, 4, 10, 10))));

        let res = draw_filled_circle(&mut img, (5, 5), 6, [255]);
        assert!(matches!(res, Err(ImgprocError::InvalidGeometry(..))));

        let res = draw_filled_polygon(&mut img, &[(0, 0), (1, 1)], [255]);
        assert!(matches!(res, Err(ImgprocError::DegeneratePolygon(2))));

        // nothing was drawn by the failed calls
        assert!(img.as_slice().iter().all(|&p| p == 0));
        Ok(())
    }
}
