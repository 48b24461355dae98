use rewarp_image::{PixelBuffer, SampleType};

use super::interpolate::clamp_tap;

/// Catmull-Rom parameter of the cubic convolution kernel.
const A: f32 = -0.5;

/// Cubic convolution weight for a tap at distance `t` from the sample point.
fn cubic_weight(t: f32) -> f32 {
    let t = t.abs();
    if t <= 1.0 {
        (A + 2.0) * t * t * t - (A + 3.0) * t * t + 1.0
    } else if t < 2.0 {
        A * (t * t * t - 5.0 * t * t + 8.0 * t - 4.0)
    } else {
        0.0
    }
}

/// Kernel for bicubic interpolation
///
/// Separable cubic convolution over the 4x4 neighborhood around the
/// coordinate, using the Catmull-Rom weights with `a = -0.5`. Weights can be
/// negative, so the blended value may overshoot the input range; the
/// conversion through [`SampleType::from_f32`] clamps it back.
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
pub(crate) fn bicubic_interpolation<T: SampleType, const C: usize>(
    image: &PixelBuffer<T, C>,
    u: f32,
    v: f32,
) -> [T; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let u0 = u.floor();
    let v0 = v.floor();

    // per-axis weights for taps at offsets -1..=2 from (u0, v0)
    let mut wu = [0.0f32; 4];
    let mut wv = [0.0f32; 4];
    for (i, (wu_i, wv_i)) in wu.iter_mut().zip(wv.iter_mut()).enumerate() {
        let offset = i as f32 - 1.0;
        *wu_i = cubic_weight(u - (u0 + offset));
        *wv_i = cubic_weight(v - (v0 + offset));
    }

    let data = image.as_slice();

    let mut acc = [0.0f32; C];
    for (j, &wv_j) in wv.iter().enumerate() {
        let iv = clamp_tap(v0 as i64 + j as i64 - 1, rows);
        for (i, &wu_i) in wu.iter().enumerate() {
            let iu = clamp_tap(u0 as i64 + i as i64 - 1, cols);
            let base = (iv * cols + iu) * C;
            let weight = wu_i * wv_j;
            for (k, acc_k) in acc.iter_mut().enumerate() {
                let sample: f32 = data[base + k].into();
                *acc_k += sample * weight;
            }
        }
    }

    let mut pixel = [T::default(); C];
    for (dst, &value) in pixel.iter_mut().zip(acc.iter()) {
        *dst = T::from_f32(value);
    }

    pixel
}
