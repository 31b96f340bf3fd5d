use chanfilter_image::{Image, ImageError};

use crate::pixel_iter;

/// Convert an RGB image to BGR by swapping the red and blue channels.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `dst` - The output BGR image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use chanfilter_image::{Image, ImageSize};
/// use chanfilter_imgproc::color::bgr_from_rgb;
///
/// let rgb = Image::<u8, 3>::new(ImageSize { width: 1, height: 1 }, vec![50, 100, 200]).unwrap();
/// let mut bgr = Image::<u8, 3>::from_size_val(rgb.size(), 0).unwrap();
///
/// bgr_from_rgb(&rgb, &mut bgr).unwrap();
///
/// assert_eq!(bgr.as_slice(), &[200, 100, 50]);
/// ```
pub fn bgr_from_rgb<T>(src: &Image<T, 3>, dst: &mut Image<T, 3>) -> Result<(), ImageError>
where
    T: Copy,
{
    swap_first_last(src, dst)
}

/// Convert a BGR image to RGB by swapping the blue and red channels.
///
/// # Arguments
///
/// * `src` - The input BGR image.
/// * `dst` - The output RGB image.
///
/// Precondition: the input and output images must have the same size.
pub fn rgb_from_bgr<T>(src: &Image<T, 3>, dst: &mut Image<T, 3>) -> Result<(), ImageError>
where
    T: Copy,
{
    swap_first_last(src, dst)
}

fn swap_first_last<T: Copy>(src: &Image<T, 3>, dst: &mut Image<T, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    pixel_iter::iter_pixels(src, dst, |src_pixel, dst_pixel| {
        dst_pixel
            .iter_mut()
            .zip(src_pixel.iter().rev())
            .for_each(|(d, s)| {
                *d = *s;
            });
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use chanfilter_image::{Image, ImageError, ImageSize};

    #[test]
    fn bgr_rgb_regression() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let rgb = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![
                255, 0, 0,   0, 255, 0,
                0, 0, 255,   10, 20, 30,
            ],
        )?;

        let mut bgr = Image::<u8, 3>::from_size_val(rgb.size(), 0)?;
        super::bgr_from_rgb(&rgb, &mut bgr)?;

        assert_eq!(bgr.as_slice(), &[0, 0, 255, 0, 255, 0, 255, 0, 0, 30, 20, 10]);

        let mut back = Image::<u8, 3>::from_size_val(rgb.size(), 0)?;
        super::rgb_from_bgr(&bgr, &mut back)?;
        assert_eq!(back, rgb);

        Ok(())
    }

    #[test]
    fn bgr_from_rgb_size_mismatch() -> Result<(), ImageError> {
        let rgb = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 4,
                height: 1,
            },
            0,
        )?;
        let mut bgr = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 1,
                height: 4,
            },
            0,
        )?;
        assert_eq!(
            super::bgr_from_rgb(&rgb, &mut bgr),
            Err(ImageError::InvalidImageSize(4, 1, 1, 4))
        );
        Ok(())
    }
}
