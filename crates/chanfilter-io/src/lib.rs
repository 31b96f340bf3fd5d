#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access and encoding/decoding failures.
pub mod error;

/// High-level image reading and writing functions.
///
/// Provides convenient functions for reading and writing images in the formats
/// supported by the `image` crate. See [`functional::read_image_any_bgr8`] for
/// automatic format detection.
pub mod functional;

pub use crate::error::IoError;
pub use crate::functional::{read_image_any_bgr8, write_image_any_bgr8};
