#![deny(missing_docs)]
//! Pixel buffer types and sample traits for raster reprojection.

/// Pixel buffer representation and sample type trait.
pub mod buffer;

/// Error types for the image module.
pub mod error;

pub use crate::buffer::{ImageSize, PixelBuffer, SampleType};
pub use crate::error::ImageError;
