use rewarp_image::{PixelBuffer, SampleType};

use super::interpolate::clamp_tap;

/// Kernel for bilinear interpolation
///
/// Blends the 2x2 neighborhood around the coordinate with weights
/// `(1 - fu)(1 - fv), fu(1 - fv), (1 - fu)fv, fu * fv`, where `fu` and `fv`
/// are the fractional parts of the coordinate.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated channel samples.
pub(crate) fn bilinear_interpolation<T: SampleType, const C: usize>(
    image: &PixelBuffer<T, C>,
    u: f32,
    v: f32,
) -> [T; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let u0 = u.floor();
    let v0 = v.floor();

    let frac_u = u - u0;
    let frac_v = v - v0;

    let iu0 = clamp_tap(u0 as i64, cols);
    let iv0 = clamp_tap(v0 as i64, rows);
    let iu1 = clamp_tap(u0 as i64 + 1, cols);
    let iv1 = clamp_tap(v0 as i64 + 1, rows);

    let w00 = (1.0 - frac_u) * (1.0 - frac_v);
    let w01 = frac_u * (1.0 - frac_v);
    let w10 = (1.0 - frac_u) * frac_v;
    let w11 = frac_u * frac_v;

    let base00 = (iv0 * cols + iu0) * C;
    let base01 = (iv0 * cols + iu1) * C;
    let base10 = (iv1 * cols + iu0) * C;
    let base11 = (iv1 * cols + iu1) * C;

    let data = image.as_slice();
    let p00 = &data[base00..base00 + C];
    let p01 = &data[base01..base01 + C];
    let p10 = &data[base10..base10 + C];
    let p11 = &data[base11..base11 + C];

    let mut pixel = [T::default(); C];
    for k in 0..C {
        let (s00, s01, s10, s11): (f32, f32, f32, f32) =
            (p00[k].into(), p01[k].into(), p10[k].into(), p11[k].into());
        pixel[k] = T::from_f32(s00 * w00 + s01 * w01 + s10 * w10 + s11 * w11);
    }

    pixel
}
