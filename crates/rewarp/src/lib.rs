#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use rewarp_image as image;

#[doc(inline)]
pub use rewarp_imgproc as imgproc;
