#![deny(missing_docs)]
//! Image types and traits for generating and manipulating images

/// image representation for channel filtering purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// Typed wrappers fixing the channel order of an image.
pub mod color_spaces;

pub use crate::color_spaces::{Bgr8, Rgb8};
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
