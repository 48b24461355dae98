use rewarp_image::ImageError;

/// An error type for geometric transform operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WarpError {
    /// The transform matrix determinant is below the numerical epsilon and
    /// the inverse mapping is undefined.
    #[error("Transform matrix is degenerate and cannot be inverted")]
    DegenerateTransform,

    /// The 4-point correspondence system has no unique solution.
    #[error("Point correspondences are singular (collinear or coincident points)")]
    SingularCorrespondence,

    /// A parameter is outside the accepted domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// Error coming from the image buffer.
    #[error(transparent)]
    Image(#[from] ImageError),
}
