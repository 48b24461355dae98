//! Geometric image transformations using affine and perspective warps.
//!
//! This module provides the warp executors for applying 2D transformations
//! to images:
//!
//! - Affine warps (translation, scaling, rotation, shearing and
//!   compositions thereof)
//! - Perspective warps (homographies)
//! - Homography estimation from 4-point correspondences
//!
//! Both executors invert the transform once up front and inverse-map every
//! destination pixel back into source space, which avoids the gaps and
//! overlaps a forward (scatter) mapping would produce. A degenerate matrix
//! fails before any destination pixel is written.
//!
//! # Examples
//!
//! Rotating an image by 45 degrees about its center:
//!
//! ```no_run
//! use rewarp_imgproc::transform::rotation;
//!
//! let m = rotation(45.0, (128.0, 128.0), 1.0).unwrap();
//! // Use with warp_affine to rotate the image
//! ```

mod affine;
mod perspective;

pub use affine::warp_affine;
pub use perspective::{get_perspective_transform, warp_perspective};

use rewarp_image::{PixelBuffer, SampleType};

use crate::interpolation::{interpolate_pixel, InterpolationMode};

/// Policy for destination pixels whose mapped source coordinate falls
/// outside the source image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BorderMode {
    /// Snap the coordinate to the nearest valid edge index (edge-replicate).
    #[default]
    Clamp,
    /// Fill every channel with a constant value, converted through
    /// [`SampleType::from_f32`].
    Constant(f32),
}

/// Resolve one destination pixel from its mapped source coordinate.
///
/// `coord` is `None` when the inverse mapping is undefined at this pixel
/// (projective points with vanishing homogeneous `w`).
pub(crate) fn resolve_pixel<T: SampleType, const C: usize>(
    src: &PixelBuffer<T, C>,
    coord: Option<(f32, f32)>,
    interpolation: InterpolationMode,
    border: BorderMode,
    dst_pixel: &mut [T],
) {
    match (coord, border) {
        (Some((u, v)), BorderMode::Clamp) => {
            dst_pixel.copy_from_slice(&interpolate_pixel(src, u, v, interpolation));
        }
        (Some((u, v)), BorderMode::Constant(fill)) => {
            let in_bounds = u >= 0.0
                && u <= (src.cols() - 1) as f32
                && v >= 0.0
                && v <= (src.rows() - 1) as f32;
            if in_bounds {
                dst_pixel.copy_from_slice(&interpolate_pixel(src, u, v, interpolation));
            } else {
                dst_pixel.fill(T::from_f32(fill));
            }
        }
        (None, BorderMode::Constant(fill)) => {
            dst_pixel.fill(T::from_f32(fill));
        }
        (None, BorderMode::Clamp) => {
            dst_pixel.fill(T::default());
        }
    }
}
