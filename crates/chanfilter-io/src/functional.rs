use std::path::Path;

use chanfilter_image::{Bgr8, Image, ImageError, ImageSize, Rgb8};
use chanfilter_imgproc::color::{bgr_from_rgb, rgb_from_bgr};
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader, RgbImage};

use crate::error::IoError;

/// Reads an image from the given file path into BGR channel order.
///
/// The method tries to read from any image format supported by the image crate.
/// The format is guessed from the file content, not from its extension. Any
/// color type is converted to 8-bit RGB first and then reordered to BGR.
/// An EXIF orientation tag, when the file carries one, is applied so the
/// pixels come back upright.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A BGR image containing the image data.
///
/// # Errors
///
/// [`IoError::FileDoesNotExist`] if the path does not resolve to a file, and
/// [`IoError::ImageDecodeError`] if the content is not a decodable image.
pub fn read_image_any_bgr8(file_path: impl AsRef<Path>) -> Result<Bgr8, IoError> {
    // resolve the file path correctly
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.is_file() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // open the file and map it to memory
    let file = std::fs::File::open(file_path)?;
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    // decode the data directly from memory
    let reader = ImageReader::new(std::io::Cursor::new(&mmap[..])).with_guessed_format()?;
    log::debug!(
        "decoding {} as {:?}",
        file_path.display(),
        reader.format()
    );
    let mut decoder = reader.into_decoder()?;
    let orientation = decoder.orientation()?;

    let mut img = DynamicImage::from_decoder(decoder)?;
    img.apply_orientation(orientation);

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let rgb = Image::<u8, 3>::new(size, img.into_rgb8().into_raw())?;

    let mut bgr = Image::<u8, 3>::from_size_val(size, 0)?;
    bgr_from_rgb(&rgb, &mut bgr)?;

    log::debug!("decoded {} with {}", file_path.display(), size);

    Ok(Bgr8(bgr))
}

/// Writes the given BGR image to the given file path.
///
/// The encoding is chosen from the file extension. The file is created if it
/// does not exist and overwritten otherwise.
///
/// # Arguments
///
/// * `file_path` - The path to the output image.
/// * `image` - The image in BGR channel order.
///
/// # Errors
///
/// [`IoError::InvalidFileExtension`] if the extension is missing or names a
/// format that cannot be written, and [`IoError::ImageEncodeError`] if the
/// encoder fails.
pub fn write_image_any_bgr8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let format = ImageFormat::from_path(file_path)
        .map_err(|_| IoError::InvalidFileExtension(file_path.to_path_buf()))?;
    if !format.writing_enabled() {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let mut rgb = Rgb8::from_size_val(image.size(), 0)?;
    rgb_from_bgr(image, rgb.as_image_mut())?;

    let num_samples = rgb.as_slice().len();
    let buffer = RgbImage::from_raw(
        image.width() as u32,
        image.height() as u32,
        rgb.into_inner().into_vec(),
    )
    .ok_or(ImageError::InvalidChannelShape(
        num_samples,
        image.width() * image.height() * 3,
    ))?;

    buffer
        .save_with_format(file_path, format)
        .map_err(IoError::ImageEncodeError)?;

    log::debug!(
        "encoded {} as {:?} with {}",
        file_path.display(),
        format,
        image.size()
    );

    Ok(())
}
