/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the buffer shape.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when a pixel coordinate is outside the buffer.
    #[error("Pixel coordinate ({0}, {1}) is out of bounds for image {2}x{3}")]
    PixelOutOfBounds(usize, usize, usize, usize),

    /// Error when a sample value cannot be represented in the target type.
    #[error("Failed to cast sample value to the target type")]
    CastError,
}
