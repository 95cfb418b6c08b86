use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use morpho_image::Image;

/// Inject salt noise into an image inplace.
///
/// Each pixel is flipped to `value` independently with probability `amount`.
/// The random stream is seeded, so a fixed `seed` reproduces the same noise
/// pattern.
///
/// # Arguments
///
/// * `img` - The image to corrupt.
/// * `amount` - The per-pixel flip probability in `[0, 1]`.
/// * `value` - The pixel value assigned to flipped pixels.
/// * `seed` - Seed for the random stream.
///
/// # Examples
///
/// ```
/// use morpho_image::{Image, ImageSize};
/// use morpho_imgproc::noise::salt_noise;
///
/// let mut image = Image::<u8, 1>::from_size_val(
///     ImageSize { width: 100, height: 100 }, 0u8,
/// ).unwrap();
///
/// salt_noise(&mut image, 0.05, [255], 42);
/// assert!(image.as_slice().iter().any(|&p| p == 255));
/// ```
pub fn salt_noise<const C: usize>(img: &mut Image<u8, C>, amount: f64, value: [u8; C], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for pixel in img.as_slice_mut().chunks_exact_mut(C) {
        if rng.random::<f64>() < amount {
            pixel.copy_from_slice(&value);
        }
    }
}
