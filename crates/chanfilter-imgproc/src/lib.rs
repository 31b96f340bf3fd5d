#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color channel reordering module.
pub mod color;

/// image basic operations module.
pub mod core;

/// constant-color masks module.
pub mod mask;

/// module containing pixel iteration utilities.
pub mod pixel_iter;
