use std::f32::consts::PI;

use rewarp_image::{PixelBuffer, SampleType};

use super::interpolate::clamp_tap;

/// Number of lobes of the windowed sinc.
const LOBES: i64 = 3;

/// Support width of the kernel, taps per axis.
const SUPPORT: usize = 2 * LOBES as usize;

fn sinc(t: f32) -> f32 {
    if t == 0.0 {
        return 1.0;
    }
    let x = PI * t;
    x.sin() / x
}

/// Lanczos weight for a tap at distance `t` from the sample point.
fn lanczos_weight(t: f32) -> f32 {
    if t.abs() < LOBES as f32 {
        sinc(t) * sinc(t / LOBES as f32)
    } else {
        0.0
    }
}

/// Kernel for Lanczos interpolation with 3 lobes
///
/// Separable windowed-sinc convolution over the 6x6 neighborhood around the
/// coordinate. The per-axis weights are renormalized to sum to 1 so truncating
/// the sinc does not drift the image brightness. Negative lobes can overshoot
/// the input range; the conversion through [`SampleType::from_f32`] clamps
/// the result.
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
pub(crate) fn lanczos_interpolation<T: SampleType, const C: usize>(
    image: &PixelBuffer<T, C>,
    u: f32,
    v: f32,
) -> [T; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let u0 = u.floor();
    let v0 = v.floor();

    // per-axis weights for taps at offsets -2..=3 from (u0, v0)
    let mut wu = [0.0f32; SUPPORT];
    let mut wv = [0.0f32; SUPPORT];
    let mut wu_sum = 0.0f32;
    let mut wv_sum = 0.0f32;
    for (i, (wu_i, wv_i)) in wu.iter_mut().zip(wv.iter_mut()).enumerate() {
        let offset = i as f32 - (LOBES - 1) as f32;
        *wu_i = lanczos_weight(u - (u0 + offset));
        *wv_i = lanczos_weight(v - (v0 + offset));
        wu_sum += *wu_i;
        wv_sum += *wv_i;
    }
    for (wu_i, wv_i) in wu.iter_mut().zip(wv.iter_mut()) {
        *wu_i /= wu_sum;
        *wv_i /= wv_sum;
    }

    let data = image.as_slice();

    let mut acc = [0.0f32; C];
    for (j, &wv_j) in wv.iter().enumerate() {
        let iv = clamp_tap(v0 as i64 + j as i64 - (LOBES - 1), rows);
        for (i, &wu_i) in wu.iter().enumerate() {
            let iu = clamp_tap(u0 as i64 + i as i64 - (LOBES - 1), cols);
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
