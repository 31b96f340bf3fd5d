use chanfilter_image::{Image, ImageError, ImageSize};

use crate::pixel_iter;

/// Perform a bitwise AND operation between two images.
///
/// Every sample of the output is `src1 & src2` at the same row, column and
/// channel.
///
/// # Arguments
///
/// * `src1` - The first input image.
/// * `src2` - The second input image.
/// * `dst` - The output image.
///
/// # Errors
///
/// All three images must have the same size, otherwise
/// [`ImageError::InvalidImageSize`] is returned.
///
/// # Example
///
/// ```
/// use chanfilter_image::{Image, ImageSize};
/// use chanfilter_imgproc::core::bitwise_and;
///
/// let image = Image::<u8, 3>::new(
///    ImageSize {
///        width: 2,
///        height: 1,
///    },
///    vec![200, 100, 50, 255, 255, 255],
/// ).unwrap();
///
/// let mask = Image::<u8, 3>::from_size_pixel(image.size(), [0, 255, 0]).unwrap();
///
/// let mut output = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// bitwise_and(&image, &mask, &mut output).unwrap();
///
/// assert_eq!(output.as_slice(), &[0, 100, 0, 0, 255, 0]);
/// ```
pub fn bitwise_and<const CHANNELS: usize>(
    src1: &Image<u8, CHANNELS>,
    src2: &Image<u8, CHANNELS>,
    dst: &mut Image<u8, CHANNELS>,
) -> Result<(), ImageError> {
    check_same_size(src1.size(), src2.size())?;
    check_same_size(src1.size(), dst.size())?;

    pixel_iter::iter_samples_two(src1, src2, dst, |a, b, out| {
        *out = a & b;
    });

    Ok(())
}

fn check_same_size(a: ImageSize, b: ImageSize) -> Result<(), ImageError> {
    if a != b {
        return Err(ImageError::InvalidImageSize(
            a.width, a.height, b.width, b.height,
        ));
    }
    Ok(())
}
