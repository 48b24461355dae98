#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the imgproc module.
pub mod error;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallelization utilities.
pub mod parallel;

/// transform matrix construction, composition and inversion.
pub mod transform;

/// image geometric transformations module.
pub mod warp;

pub use crate::error::WarpError;
