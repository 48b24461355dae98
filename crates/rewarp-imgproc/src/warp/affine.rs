use rewarp_image::{PixelBuffer, SampleType};

use crate::error::WarpError;
use crate::interpolation::InterpolationMode;
use crate::parallel;
use crate::transform::{invert, transform_point, AffineMatrix};

use super::BorderMode;

/// Applies an affine transformation to an image.
///
/// The matrix maps source coordinates to destination coordinates; the
/// executor inverts it once and inverse-maps every destination pixel. The
/// destination size is taken from `dst` and may differ from the source
/// (see [`crate::transform::scaled_size`] for the scaling case).
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image with shape (height, width, channels).
/// * `m` - The 2x3 affine transformation matrix src -> dst.
/// * `interpolation` - The interpolation mode to use.
/// * `border` - The policy for pixels mapping outside the source.
///
/// # Errors
///
/// Fails with [`WarpError::DegenerateTransform`] before any pixel is written
/// when `m` is not invertible.
///
/// # Example
///
/// ```
/// use rewarp_image::{ImageSize, PixelBuffer};
/// use rewarp_imgproc::interpolation::InterpolationMode;
/// use rewarp_imgproc::warp::{warp_affine, BorderMode};
///
/// let src = PixelBuffer::<f32, 3>::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     1.0,
/// ).unwrap();
///
/// let m = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
///
/// let mut dst = PixelBuffer::<f32, 3>::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     0.0,
/// ).unwrap();
///
/// warp_affine(&src, &mut dst, &m, InterpolationMode::Nearest, BorderMode::Clamp).unwrap();
///
/// assert_eq!(dst.size().width, 4);
/// assert_eq!(dst.size().height, 5);
/// ```
pub fn warp_affine<T: SampleType, const C: usize>(
    src: &PixelBuffer<T, C>,
    dst: &mut PixelBuffer<T, C>,
    m: &AffineMatrix,
    interpolation: InterpolationMode,
    border: BorderMode,
) -> Result<(), WarpError> {
    if src.cols() == 0 || src.rows() == 0 {
        return Err(WarpError::InvalidParameter("source image is empty"));
    }

    // invert the transform to find corresponding positions in src from dst;
    // fails before any destination write
    let m_inv = invert(m)?;

    parallel::par_iter_rows_indexed(dst, |x, y, dst_pixel| {
        let coord = transform_point(&m_inv, x as f32, y as f32);
        super::resolve_pixel(src, Some(coord), interpolation, border, dst_pixel);
    });

    Ok(())
}
