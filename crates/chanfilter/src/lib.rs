#![doc = include_str!("../../../README.md")]

#[doc(inline)]
pub use chanfilter_image as image;

#[doc(inline)]
pub use chanfilter_imgproc as imgproc;

#[doc(inline)]
pub use chanfilter_io as io;

/// Channel filters applied to images on disk.
pub mod filter;
