use morpho_image::{Image, ImageSize};

use crate::draw::{
    draw_filled_circle, draw_filled_ellipse, draw_filled_polygon, draw_filled_rect, draw_line,
};
use crate::error::ImgprocError;
use crate::noise::salt_noise;

const FOREGROUND: [u8; 1] = [255];
const VEIN_VALUE: [u8; 1] = [200];
const HOLE_VALUE: [u8; 1] = [0];

/// A 200x200 scene containing a filled letter-A-like polygon with 5% salt
/// noise.
///
/// # Arguments
///
/// * `seed` - Seed for the noise stream; a fixed seed reproduces the scene
///   exactly.
pub fn letter_a_scene(seed: u64) -> Result<Image<u8, 1>, ImgprocError> {
    let mut img = Image::from_size_val(
        ImageSize {
            width: 200,
            height: 200,
        },
        0u8,
    )?;

    draw_filled_polygon(
        &mut img,
        &[(50, 150), (100, 50), (150, 150), (120, 120), (80, 120)],
        FOREGROUND,
    )?;

    salt_noise(&mut img, 0.05, FOREGROUND, seed);

    Ok(img)
}

/// A 200x200 scene containing a filled rectangle, circle and triangle with 3%
/// salt noise.
pub fn shapes_scene(seed: u64) -> Result<Image<u8, 1>, ImgprocError> {
    let mut img = Image::from_size_val(
        ImageSize {
            width: 200,
            height: 200,
        },
        0u8,
    )?;

    draw_filled_rect(&mut img, (30, 30), (100, 100), FOREGROUND)?;
    draw_filled_circle(&mut img, (150, 80), 40, FOREGROUND)?;
    draw_filled_polygon(&mut img, &[(120, 150), (80, 120), (160, 120)], FOREGROUND)?;

    salt_noise(&mut img, 0.03, FOREGROUND, seed);

    Ok(img)
}

/// A 300x300 simulated leaf: an elliptical blade at full intensity, a main
/// vein and five pairs of secondary veins at a dimmer intensity, 2% salt
/// noise, and two small punched holes.
pub fn leaf_scene(seed: u64) -> Result<Image<u8, 1>, ImgprocError> {
    let mut img = Image::from_size_val(
        ImageSize {
            width: 300,
            height: 300,
        },
        0u8,
    )?;

    // blade
    draw_filled_ellipse(&mut img, (150, 150), (120, 80), FOREGROUND)?;

    // main vein
    draw_line(&mut img, (150, 70), (150, 230), VEIN_VALUE, 3)?;

    // secondary veins
    for i in 0..5 {
        let y = 90 + i * 30;
        draw_line(&mut img, (150, y), (80, y - 20), VEIN_VALUE, 2)?;
        draw_line(&mut img, (150, y), (220, y - 20), VEIN_VALUE, 2)?;
    }

    salt_noise(&mut img, 0.02, FOREGROUND, seed);

    // small holes in the blade
    draw_filled_circle(&mut img, (100, 120), 3, HOLE_VALUE)?;
    draw_filled_circle(&mut img, (200, 180), 2, HOLE_VALUE)?;

    Ok(img)
}
