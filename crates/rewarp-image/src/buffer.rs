use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use rewarp_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Trait for channel sample types.
///
/// Interpolation kernels accumulate in `f32` and convert back through
/// [`SampleType::from_f32`], which rounds and clamps to the valid range of
/// the concrete type. `Send` and `Sync` are required for the row-parallel
/// warp executor.
pub trait SampleType: Copy + Default + Into<f32> + Send + Sync {
    /// Convert an `f32` value to the sample type, clamping to its valid range.
    fn from_f32(x: f32) -> Self;
}

impl SampleType for f32 {
    fn from_f32(x: f32) -> Self {
        x
    }
}

impl SampleType for u8 {
    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 255.0) as u8
    }
}

impl SampleType for u16 {
    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 65535.0) as u16
    }
}

/// Owns a contiguous 2D grid of pixels with `C` channel samples per pixel.
///
/// The data is stored row-major with shape (H, W, C), where H is the height
/// of the image, W the width and C the channel count.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer<T, const C: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const C: usize> PixelBuffer<T, C> {
    /// Create a new pixel buffer from raw sample data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The sample data of the image with length `width * height * C`.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the image size, an error is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rewarp_image::{ImageSize, PixelBuffer};
    ///
    /// let buffer = PixelBuffer::<u8, 3>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(buffer.size().width, 10);
    /// assert_eq!(buffer.size().height, 20);
    /// assert_eq!(buffer.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height * C {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * C,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new pixel buffer filled with a single value.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The value every channel sample is initialized to.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * C];
        Self::new(size, data)
    }

    /// The size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// The width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// The height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// The number of rows of the image, same as the height.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// The number of columns of the image, same as the width.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// The number of channels per pixel.
    pub fn num_channels(&self) -> usize {
        C
    }

    /// The sample data as a flat slice in (H, W, C) order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The sample data as a flat mutable slice in (H, W, C) order.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get the channel samples of the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// If the coordinate is outside the buffer, an error is returned.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<[T; C], ImageError>
    where
        T: Copy,
    {
        if x >= self.size.width || y >= self.size.height {
            return Err(ImageError::PixelOutOfBounds(
                x,
                y,
                self.size.width,
                self.size.height,
            ));
        }

        let base = (y * self.size.width + x) * C;
        let mut pixel = [self.data[base]; C];
        pixel.copy_from_slice(&self.data[base..base + C]);

        Ok(pixel)
    }

    /// Cast the sample data to a different type.
    ///
    /// # Errors
    ///
    /// If a sample value cannot be represented in the target type, an error
    /// is returned.
    pub fn cast<U>(&self) -> Result<PixelBuffer<U, C>, ImageError>
    where
        T: num_traits::NumCast + Copy,
        U: num_traits::NumCast,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| U::from(x).ok_or(ImageError::CastError))
            .collect::<Result<Vec<U>, ImageError>>()?;

        PixelBuffer::new(self.size, casted_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_smoke() -> Result<(), ImageError> {
        let buffer = PixelBuffer::<u8, 3>::new(
            ImageSize {
                width: 4,
                height: 5,
            },
            vec![0u8; 4 * 5 * 3],
        )?;

        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.height(), 5);
        assert_eq!(buffer.num_channels(), 3);
        assert_eq!(buffer.as_slice().len(), 60);

        Ok(())
    }

    #[test]
    fn buffer_shape_mismatch() {
        let result = PixelBuffer::<u8, 3>::new(
            ImageSize {
                width: 4,
                height: 5,
            },
            vec![0u8; 4 * 5],
        );
        assert_eq!(result, Err(ImageError::InvalidChannelShape(20, 60)));
    }

    #[test]
    fn buffer_get_pixel() -> Result<(), ImageError> {
        let buffer = PixelBuffer::<u8, 2>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 1, 2, 3, 4, 5, 6, 7],
        )?;

        assert_eq!(buffer.get_pixel(1, 0)?, [2, 3]);
        assert_eq!(buffer.get_pixel(0, 1)?, [4, 5]);
        assert_eq!(
            buffer.get_pixel(2, 0),
            Err(ImageError::PixelOutOfBounds(2, 0, 2, 2))
        );

        Ok(())
    }

    #[test]
    fn buffer_cast() -> Result<(), ImageError> {
        let buffer = PixelBuffer::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0, 255],
        )?;

        let buffer_f32 = buffer.cast::<f32>()?;
        assert_eq!(buffer_f32.as_slice(), &[0.0, 255.0]);

        Ok(())
    }

    #[test]
    fn sample_from_f32_clamps() {
        assert_eq!(u8::from_f32(-3.2), 0);
        assert_eq!(u8::from_f32(127.5), 128);
        assert_eq!(u8::from_f32(300.0), 255);
        assert_eq!(u16::from_f32(70000.0), 65535);
        assert_eq!(f32::from_f32(-3.2), -3.2);
    }
}
