use super::bicubic::bicubic_interpolation;
use super::bilinear::bilinear_interpolation;
use super::lanczos::lanczos_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use rewarp_image::{PixelBuffer, SampleType};

/// Interpolation mode for resampling operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    /// Nearest neighbor interpolation
    Nearest,
    /// Bilinear interpolation
    Bilinear,
    /// Bicubic (Catmull-Rom) interpolation
    Bicubic,
    /// Lanczos interpolation with 3 lobes
    Lanczos,
}

/// Clamp a possibly out-of-range tap index to the valid `[0, len - 1]` range.
pub(crate) fn clamp_tap(i: i64, len: usize) -> usize {
    i.clamp(0, len as i64 - 1) as usize
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated channel samples.
pub fn interpolate_pixel<T: SampleType, const C: usize>(
    image: &PixelBuffer<T, C>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
) -> [T; C] {
    match interpolation {
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v),
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v),
        InterpolationMode::Bicubic => bicubic_interpolation(image, u, v),
        InterpolationMode::Lanczos => lanczos_interpolation(image, u, v),
    }
}
