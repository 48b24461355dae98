use std::f32::consts::PI;

use rewarp_image::ImageSize;

use crate::error::WarpError;

/// Row-major 2x3 affine transform matrix `[a, b, tx, c, d, ty]`.
///
/// Maps `(x, y)` to `(a * x + b * y + tx, c * x + d * y + ty)`.
pub type AffineMatrix = [f32; 6];

/// Row-major 3x3 projective transform matrix.
///
/// Maps `(x, y, 1)` to homogeneous `(x', y', w')`, with final coordinates
/// `(x' / w', y' / w')`.
pub type ProjectiveMatrix = [f32; 9];

/// Determinants below this threshold are treated as degenerate.
pub const DET_EPSILON: f32 = 1e-8;

/// Homogeneous `w` values below this threshold are treated as unmappable.
const W_EPSILON: f32 = 1e-8;

/// Returns the 2x3 identity transform.
pub fn identity() -> AffineMatrix {
    [1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
}

/// Returns a 2x3 translation matrix shifting points by `(tx, ty)`.
pub fn translation(tx: f32, ty: f32) -> AffineMatrix {
    [1.0, 0.0, tx, 0.0, 1.0, ty]
}

/// Returns a 2x3 scaling matrix with factors `(sx, sy)` about the origin.
///
/// Negative factors mirror the corresponding axis. Use [`scaled_size`] to
/// compute the destination canvas that fits the scaled image.
///
/// # Errors
///
/// Returns [`WarpError::DegenerateTransform`] when either factor is zero,
/// since the inverse mapping would be undefined.
pub fn scaling(sx: f32, sy: f32) -> Result<AffineMatrix, WarpError> {
    if sx == 0.0 || sy == 0.0 {
        return Err(WarpError::DegenerateTransform);
    }
    Ok([sx, 0.0, 0.0, 0.0, sy, 0.0])
}

/// Computes the destination canvas size for a scaling transform.
pub fn scaled_size(size: ImageSize, sx: f32, sy: f32) -> ImageSize {
    ImageSize {
        width: (size.width as f32 * sx.abs()).round() as usize,
        height: (size.height as f32 * sy.abs()).round() as usize,
    }
}

/// Returns a 2x3 rotation matrix for a 2D rotation around a center point.
///
/// The rotation matrix is defined as:
///
/// | alpha  beta  tx |
/// | -beta  alpha ty |
///
/// where:
///
/// alpha = scale * cos(angle)
/// beta = scale * sin(angle)
/// tx = (1 - alpha) * center.x - beta * center.y
/// ty = beta * center.x + (1 - alpha) * center.y
///
/// so that `center` is a fixed point of the transform. Pass the image
/// midpoint `(width / 2, height / 2)` to rotate about the canvas center.
///
/// # Arguments
///
/// * `angle` - The angle of rotation in degrees.
/// * `center` - The center point of the rotation.
/// * `scale` - The uniform scale factor, must be positive.
///
/// # Errors
///
/// Returns [`WarpError::DegenerateTransform`] when `scale <= 0`.
///
/// # Example
///
/// ```
/// use rewarp_imgproc::transform::rotation;
///
/// let m = rotation(90.0, (0.0, 0.0), 1.0).unwrap();
/// ```
pub fn rotation(angle: f32, center: (f32, f32), scale: f32) -> Result<AffineMatrix, WarpError> {
    if scale <= 0.0 {
        return Err(WarpError::DegenerateTransform);
    }

    let angle = angle * PI / 180.0f32;
    let alpha = scale * angle.cos();
    let beta = scale * angle.sin();

    let tx = (1.0 - alpha) * center.0 - beta * center.1;
    let ty = beta * center.0 + (1.0 - alpha) * center.1;

    Ok([alpha, beta, tx, -beta, alpha, ty])
}

/// Returns a 2x3 shear matrix with factors `(shx, shy)`.
///
/// The linear part is `[[1, shx], [shy, 1]]` with zero translation.
pub fn shear(shx: f32, shy: f32) -> AffineMatrix {
    [1.0, shx, 0.0, shy, 1.0, 0.0]
}

/// Composes two affine transforms, applying `inner` first.
///
/// Follows function-composition semantics: `compose(a, b)` maps a point `p`
/// to `a(b(p))`. Transform order changes the result; rotate-then-translate is
/// not translate-then-rotate.
///
/// # Example
///
/// ```
/// use rewarp_imgproc::transform::{compose, rotation, translation, transform_point};
///
/// let rotate = rotation(90.0, (0.0, 0.0), 1.0).unwrap();
/// let m = compose(&translation(10.0, 0.0), &rotate);
/// let (x, y) = transform_point(&m, 0.0, 0.0);
/// assert_eq!((x, y), (10.0, 0.0));
/// ```
pub fn compose(outer: &AffineMatrix, inner: &AffineMatrix) -> AffineMatrix {
    let (o0, o1, o2, o3, o4, o5) = (outer[0], outer[1], outer[2], outer[3], outer[4], outer[5]);
    let (i0, i1, i2, i3, i4, i5) = (inner[0], inner[1], inner[2], inner[3], inner[4], inner[5]);

    [
        o0 * i0 + o1 * i3,
        o0 * i1 + o1 * i4,
        o0 * i2 + o1 * i5 + o2,
        o3 * i0 + o4 * i3,
        o3 * i1 + o4 * i4,
        o3 * i2 + o4 * i5 + o5,
    ]
}

/// Embeds a 2x3 affine matrix into a 3x3 projective matrix.
pub fn lift(m: &AffineMatrix) -> ProjectiveMatrix {
    [m[0], m[1], m[2], m[3], m[4], m[5], 0.0, 0.0, 1.0]
}

/// Composes two projective transforms, applying `inner` first.
///
/// Mixed affine/projective chains lift the affine side with [`lift`] before
/// composing.
pub fn compose_projective(outer: &ProjectiveMatrix, inner: &ProjectiveMatrix) -> ProjectiveMatrix {
    let mut out = [0.0f32; 9];
    for row in 0..3 {
        for col in 0..3 {
            let mut acc = 0.0;
            for k in 0..3 {
                acc += outer[row * 3 + k] * inner[k * 3 + col];
            }
            out[row * 3 + col] = acc;
        }
    }
    out
}

/// Inverts a 2x3 affine transformation matrix.
///
/// # Errors
///
/// Returns [`WarpError::DegenerateTransform`] when the determinant of the
/// 2x2 linear part is below [`DET_EPSILON`].
pub fn invert(m: &AffineMatrix) -> Result<AffineMatrix, WarpError> {
    let (a, b, c, d, e, f) = (m[0], m[1], m[2], m[3], m[4], m[5]);

    let determinant = a * e - b * d;
    if determinant.abs() <= DET_EPSILON {
        return Err(WarpError::DegenerateTransform);
    }
    let inv_determinant = 1.0 / determinant;

    let new_a = e * inv_determinant;
    let new_b = -b * inv_determinant;
    let new_d = -d * inv_determinant;
    let new_e = a * inv_determinant;
    let new_c = -(new_a * c + new_b * f);
    let new_f = -(new_d * c + new_e * f);

    Ok([new_a, new_b, new_c, new_d, new_e, new_f])
}

#[rustfmt::skip]
fn determinant3x3(m: &ProjectiveMatrix) -> f32 {
    m[0] * (m[4] * m[8] - m[5] * m[7]) -
    m[1] * (m[3] * m[8] - m[5] * m[6]) +
    m[2] * (m[3] * m[7] - m[4] * m[6])
}

#[rustfmt::skip]
fn adjugate3x3(m: &ProjectiveMatrix) -> ProjectiveMatrix {
    [
        m[4] * m[8] - m[5] * m[7],  // [0, 0]
        m[2] * m[7] - m[1] * m[8],  // [0, 1]
        m[1] * m[5] - m[2] * m[4],  // [0, 2]
        m[5] * m[6] - m[3] * m[8],  // [1, 0]
        m[0] * m[8] - m[2] * m[6],  // [1, 1]
        m[2] * m[3] - m[0] * m[5],  // [1, 2]
        m[3] * m[7] - m[4] * m[6],  // [2, 0]
        m[1] * m[6] - m[0] * m[7],  // [2, 1]
        m[0] * m[4] - m[1] * m[3],  // [2, 2]
    ]
}

/// Inverts a 3x3 projective transformation matrix.
///
/// # Errors
///
/// Returns [`WarpError::DegenerateTransform`] when the determinant is below
/// [`DET_EPSILON`].
pub fn invert_projective(m: &ProjectiveMatrix) -> Result<ProjectiveMatrix, WarpError> {
    let det = determinant3x3(m);
    if det.abs() <= DET_EPSILON {
        return Err(WarpError::DegenerateTransform);
    }

    let adj = adjugate3x3(m);
    let inv_det = 1.0 / det;

    let mut inv_m = [0.0; 9];
    for (dst, src) in inv_m.iter_mut().zip(adj.iter()) {
        *dst = src * inv_det;
    }

    Ok(inv_m)
}

/// Applies an affine transformation to a point.
pub fn transform_point(m: &AffineMatrix, x: f32, y: f32) -> (f32, f32) {
    let u = m[0] * x + m[1] * y + m[2];
    let v = m[3] * x + m[4] * y + m[5];
    (u, v)
}

/// Applies a projective transformation to a point.
///
/// Returns `None` when the point maps to a homogeneous `w` near zero, where
/// the final coordinates are undefined.
pub fn project_point(m: &ProjectiveMatrix, x: f32, y: f32) -> Option<(f32, f32)> {
    let w = m[6] * x + m[7] * y + m[8];
    if w.abs() <= W_EPSILON {
        return None;
    }
    let u = (m[0] * x + m[1] * y + m[2]) / w;
    let v = (m[3] * x + m[4] * y + m[5]) / w;
    Some((u, v))
}
