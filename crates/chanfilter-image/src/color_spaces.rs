use crate::{
    error::ImageError,
    image::{Image, ImageSize},
};
use std::ops::{Deref, DerefMut};

/// Macro to define a color space wrapper type with explicit bit depth
macro_rules! define_color_space {
    ($name:ident, $type:ty, $channels:expr, $doc:expr) => {
        #[doc = $doc]
        ///
        /// This is a zero-cost wrapper that provides compile-time type safety.
        #[derive(Clone, Debug, PartialEq)]
        #[repr(transparent)]
        pub struct $name(pub Image<$type, $channels>);

        impl $name {
            #[doc = concat!("Create ", stringify!($name), " image from size and data")]
            pub fn from_size_vec(size: ImageSize, data: Vec<$type>) -> Result<Self, ImageError> {
                Ok(Self(Image::new(size, data)?))
            }

            #[doc = concat!("Create ", stringify!($name), " image from size with default value")]
            pub fn from_size_val(size: ImageSize, val: $type) -> Result<Self, ImageError> {
                Ok(Self(Image::from_size_val(size, val)?))
            }

            /// Unwrap into the underlying Image
            pub fn into_inner(self) -> Image<$type, $channels> {
                self.0
            }

            /// Get a reference to the underlying Image
            pub fn as_image(&self) -> &Image<$type, $channels> {
                &self.0
            }

            /// Get a mutable reference to the underlying Image
            pub fn as_image_mut(&mut self) -> &mut Image<$type, $channels> {
                &mut self.0
            }
        }

        impl Deref for $name {
            type Target = Image<$type, $channels>;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl AsRef<Image<$type, $channels>> for $name {
            fn as_ref(&self) -> &Image<$type, $channels> {
                &self.0
            }
        }
    };
}

define_color_space!(
    Rgb8,
    u8,
    3,
    "RGB color space with 8-bit unsigned integer channels"
);

define_color_space!(
    Bgr8,
    u8,
    3,
    "BGR color space with 8-bit unsigned integer channels"
);
