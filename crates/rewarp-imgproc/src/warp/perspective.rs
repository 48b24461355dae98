use rewarp_image::{PixelBuffer, SampleType};

use crate::error::WarpError;
use crate::interpolation::InterpolationMode;
use crate::parallel;
use crate::transform::{invert_projective, project_point, ProjectiveMatrix};

use super::BorderMode;

/// Pivot magnitudes below this threshold make the correspondence system
/// singular.
const PIVOT_EPSILON: f64 = 1e-10;

/// Computes the 3x3 perspective transform mapping 4 source points to 4
/// destination points.
///
/// Fixes the bottom-right matrix entry to 1 and solves the 8x8 linear system
///
/// ```text
/// xi' * (g * xi + h * yi + 1) = a * xi + b * yi + c
/// yi' * (g * xi + h * yi + 1) = d * xi + e * yi + f
/// ```
///
/// by Gaussian elimination with partial pivoting, accumulating in `f64`.
///
/// # Arguments
///
/// * `src` - The 4 source points `[x, y]`.
/// * `dst` - The 4 corresponding destination points `[x, y]`.
///
/// # Errors
///
/// Fails with [`WarpError::SingularCorrespondence`] when the system has no
/// unique solution, e.g. three collinear or coincident points.
///
/// # Example
///
/// ```
/// use rewarp_imgproc::warp::get_perspective_transform;
///
/// let src = [[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [0.0, 100.0]];
/// let dst = [[10.0, 20.0], [90.0, 15.0], [95.0, 85.0], [5.0, 90.0]];
/// let m = get_perspective_transform(&src, &dst).unwrap();
/// assert_eq!(m[8], 1.0);
/// ```
pub fn get_perspective_transform(
    src: &[[f32; 2]; 4],
    dst: &[[f32; 2]; 4],
) -> Result<ProjectiveMatrix, WarpError> {
    // assemble the 8x8 system with the right-hand side as a 9th column
    let mut a = [[0.0f64; 9]; 8];
    for i in 0..4 {
        let (x, y) = (src[i][0] as f64, src[i][1] as f64);
        let (xp, yp) = (dst[i][0] as f64, dst[i][1] as f64);

        let row0 = i * 2;
        a[row0][0] = x;
        a[row0][1] = y;
        a[row0][2] = 1.0;
        a[row0][6] = -x * xp;
        a[row0][7] = -y * xp;
        a[row0][8] = xp;

        let row1 = i * 2 + 1;
        a[row1][3] = x;
        a[row1][4] = y;
        a[row1][5] = 1.0;
        a[row1][6] = -x * yp;
        a[row1][7] = -y * yp;
        a[row1][8] = yp;
    }

    // forward elimination with partial pivoting
    for col in 0..8 {
        let mut max_val = a[col][col].abs();
        let mut max_row = col;
        for (row, a_row) in a.iter().enumerate().skip(col + 1) {
            let v = a_row[col].abs();
            if v > max_val {
                max_val = v;
                max_row = row;
            }
        }
        if max_val < PIVOT_EPSILON {
            return Err(WarpError::SingularCorrespondence);
        }

        if max_row != col {
            a.swap(col, max_row);
        }

        let pivot = a[col][col];
        for row in (col + 1)..8 {
            let factor = a[row][col] / pivot;
            for c in col..9 {
                a[row][c] -= factor * a[col][c];
            }
        }
    }

    // back-substitution, with the bottom-right entry fixed to 1
    let mut h = [0.0f64; 9];
    h[8] = 1.0;
    for row in (0..8).rev() {
        let mut sum = a[row][8];
        for c in (row + 1)..8 {
            sum -= a[row][c] * h[c];
        }
        h[row] = sum / a[row][row];
    }

    let mut m = [0.0f32; 9];
    for (dst_entry, &src_entry) in m.iter_mut().zip(h.iter()) {
        *dst_entry = src_entry as f32;
    }

    Ok(m)
}

/// Applies a perspective transformation to an image.
///
/// The matrix maps source coordinates to destination coordinates; the
/// executor inverts it once and inverse-maps every destination pixel with a
/// homogeneous divide. Pixels whose homogeneous `w` vanishes are unmappable
/// and receive the border fill value.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image with shape (height, width, channels).
/// * `m` - The 3x3 perspective transformation matrix src -> dst.
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
/// use rewarp_imgproc::warp::{warp_perspective, BorderMode};
///
/// let src = PixelBuffer::<f32, 1>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0.0f32; 4 * 5],
/// ).unwrap();
///
/// let m = [1.0, 0.0, -1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0];
///
/// let mut dst = PixelBuffer::<f32, 1>::from_size_val(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     0.0,
/// ).unwrap();
///
/// warp_perspective(&src, &mut dst, &m, InterpolationMode::Bilinear, BorderMode::Clamp).unwrap();
///
/// assert_eq!(dst.size().width, 2);
/// assert_eq!(dst.size().height, 3);
/// ```
pub fn warp_perspective<T: SampleType, const C: usize>(
    src: &PixelBuffer<T, C>,
    dst: &mut PixelBuffer<T, C>,
    m: &ProjectiveMatrix,
    interpolation: InterpolationMode,
    border: BorderMode,
) -> Result<(), WarpError> {
    if src.cols() == 0 || src.rows() == 0 {
        return Err(WarpError::InvalidParameter("source image is empty"));
    }

    // fails before any destination write
    let inv_m = invert_projective(m)?;

    parallel::par_iter_rows_indexed(dst, |x, y, dst_pixel| {
        let coord = project_point(&inv_m, x as f32, y as f32);
        super::resolve_pixel(src, coord, interpolation, border, dst_pixel);
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::project_point;
    use rewarp_image::ImageSize;

    #[test]
    fn perspective_transform_reproduces_correspondences() -> Result<(), WarpError> {
        let src = [[0.0, 0.0], [399.0, 0.0], [399.0, 399.0], [0.0, 399.0]];
        // corner offsets in the style of a keystone correction
        let dst = [[50.0, 50.0], [349.0, 25.0], [374.0, 374.0], [25.0, 349.0]];

        let m = get_perspective_transform(&src, &dst)?;
        assert_eq!(m[8], 1.0);

        for i in 0..4 {
            let (x, y) = project_point(&m, src[i][0], src[i][1])
                .ok_or(WarpError::InvalidParameter("vanishing w"))?;
            assert!(
                (x - dst[i][0]).abs() < 1e-2 && (y - dst[i][1]).abs() < 1e-2,
                "corner {i}: expected ({}, {}), got ({x}, {y})",
                dst[i][0],
                dst[i][1]
            );
        }
        Ok(())
    }

    #[test]
    fn perspective_transform_identity_points() -> Result<(), WarpError> {
        let pts = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let m = get_perspective_transform(&pts, &pts)?;

        let expected = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        for (i, &v) in m.iter().enumerate() {
            assert!((v - expected[i]).abs() < 1e-5, "entry {i}: {v}");
        }
        Ok(())
    }

    #[test]
    fn perspective_transform_collinear_fails() {
        // three collinear source points
        let src = [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [0.0, 1.0]];
        let dst = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        assert_eq!(
            get_perspective_transform(&src, &dst),
            Err(WarpError::SingularCorrespondence)
        );
    }

    #[test]
    fn perspective_transform_coincident_fails() {
        let src = [[5.0, 5.0]; 4];
        let dst = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        assert_eq!(
            get_perspective_transform(&src, &dst),
            Err(WarpError::SingularCorrespondence)
        );
    }

    #[test]
    fn warp_perspective_identity() -> Result<(), WarpError> {
        let image = PixelBuffer::<f32, 1>::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            (0..16).map(|x| x as f32).collect(),
        )?;

        let m = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

        let mut image_transformed = PixelBuffer::<f32, 1>::from_size_val(image.size(), 0.0)?;

        warp_perspective(
            &image,
            &mut image_transformed,
            &m,
            InterpolationMode::Nearest,
            BorderMode::Clamp,
        )?;

        assert_eq!(image_transformed.as_slice(), image.as_slice());
        Ok(())
    }

    #[test]
    fn warp_perspective_hflip() -> Result<(), WarpError> {
        let image = PixelBuffer::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![0.0f32, 1.0, 2.0, 3.0, 4.0, 5.0],
        )?;

        let image_expected = [1.0, 0.0, 3.0, 2.0, 5.0, 4.0];

        // flip matrix
        let m = [-1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

        let mut image_transformed = PixelBuffer::<f32, 1>::from_size_val(image.size(), 0.0)?;

        warp_perspective(
            &image,
            &mut image_transformed,
            &m,
            InterpolationMode::Bilinear,
            BorderMode::Clamp,
        )?;

        assert_eq!(image_transformed.as_slice(), image_expected);
        Ok(())
    }

    #[test]
    fn warp_perspective_shift_constant_border() -> Result<(), WarpError> {
        let image = PixelBuffer::<f32, 1>::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            (0..16).map(|x| x as f32).collect(),
        )?;

        // shift left by 1 pixel
        let m = [1.0, 0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

        let image_expected = [
            1.0f32, 2.0, 3.0, 0.0, 5.0, 6.0, 7.0, 0.0, 9.0, 10.0, 11.0, 0.0, 13.0, 14.0, 15.0, 0.0,
        ];

        let mut image_transformed = PixelBuffer::<f32, 1>::from_size_val(image.size(), -1.0)?;

        warp_perspective(
            &image,
            &mut image_transformed,
            &m,
            InterpolationMode::Bilinear,
            BorderMode::Constant(0.0),
        )?;

        assert_eq!(image_transformed.as_slice(), image_expected);
        Ok(())
    }

    #[test]
    fn warp_perspective_degenerate_leaves_dst_untouched() -> Result<(), WarpError> {
        let image = PixelBuffer::<f32, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 3,
            },
            1.0,
        )?;

        let sentinel = -42.0f32;
        let mut image_transformed = PixelBuffer::<f32, 1>::from_size_val(image.size(), sentinel)?;

        let result = warp_perspective(
            &image,
            &mut image_transformed,
            &[0.0; 9],
            InterpolationMode::Bilinear,
            BorderMode::Clamp,
        );

        assert_eq!(result, Err(WarpError::DegenerateTransform));
        assert!(image_transformed.as_slice().iter().all(|&x| x == sentinel));

        Ok(())
    }
}
