use chanfilter_image::{Image, ImageError, ImageSize};

/// Pure green in BGR channel order.
pub const GREEN_BGR: [u8; 3] = [0, 255, 0];

/// Create a constant-color mask of the given size.
///
/// Every pixel of the returned image equals `pixel`. Combined with
/// [`crate::core::bitwise_and`] it keeps the bits set in `pixel` and clears
/// the rest.
///
/// # Example
///
/// ```
/// use chanfilter_image::ImageSize;
/// use chanfilter_imgproc::mask::{channel_mask, GREEN_BGR};
///
/// let mask = channel_mask(ImageSize { width: 2, height: 1 }, GREEN_BGR).unwrap();
///
/// assert_eq!(mask.as_slice(), &[0, 255, 0, 0, 255, 0]);
/// ```
pub fn channel_mask(size: ImageSize, pixel: [u8; 3]) -> Result<Image<u8, 3>, ImageError> {
    Image::from_size_pixel(size, pixel)
}
