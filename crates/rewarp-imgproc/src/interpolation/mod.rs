//! Pixel interpolation kernels for raster reprojection.
//!
//! Each kernel reconstructs a pixel value at a fractional source coordinate
//! from nearby samples. Every tap index is clamped to the valid image range
//! (edge-replicate), and the blended value converts back through
//! [`rewarp_image::SampleType::from_f32`] which clamps to the sample type's
//! valid range, since bicubic and Lanczos weights can be negative and
//! overshoot.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: fastest, copies the nearest pixel value
//! - **Bilinear**: linear blend of the 2x2 neighborhood
//! - **Bicubic**: Catmull-Rom convolution over the 4x4 neighborhood
//! - **Lanczos**: 3-lobe windowed sinc over the 6x6 neighborhood

mod bicubic;
mod bilinear;
pub(crate) mod interpolate;
mod lanczos;
mod nearest;

pub use interpolate::{interpolate_pixel, InterpolationMode};
