use rewarp_image::{PixelBuffer, SampleType};

use super::interpolate::clamp_tap;

/// Kernel for nearest neighbor interpolation
///
/// Rounds the coordinate to the nearest integer index, with ties rounding
/// toward positive infinity for determinism, and returns that pixel
/// unchanged.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The channel samples of the nearest pixel.
pub(crate) fn nearest_neighbor_interpolation<T: SampleType, const C: usize>(
    image: &PixelBuffer<T, C>,
    u: f32,
    v: f32,
) -> [T; C] {
    let (rows, cols) = (image.rows(), image.cols());

    // round-half-up so ties like 0.5 go to 1, not away from zero
    let iu = clamp_tap((u + 0.5).floor() as i64, cols);
    let iv = clamp_tap((v + 0.5).floor() as i64, rows);

    let base = (iv * cols + iu) * C;
    let data = image.as_slice();

    let mut pixel = [T::default(); C];
    pixel.copy_from_slice(&data[base..base + C]);

    pixel
}
