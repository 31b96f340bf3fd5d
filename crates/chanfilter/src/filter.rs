use std::path::{Path, PathBuf};

use chanfilter_image::{Image, ImageError, ImageSize};
use chanfilter_imgproc::{
    core::bitwise_and,
    mask::{channel_mask, GREEN_BGR},
};
use chanfilter_io::{read_image_any_bgr8, write_image_any_bgr8, IoError};

/// Image read by the default configuration.
pub const DEFAULT_INPUT_PATH: &str = "deepSpace_5_new.png";

/// Image written by the default configuration.
pub const DEFAULT_OUTPUT_PATH: &str = "resultado3.png";

/// An error type for the filter module.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// The input is missing, unreadable or not a decodable image.
    #[error("could not load the image at '{}'", .path.display())]
    Load {
        /// The input path that failed to load.
        path: PathBuf,
        /// The underlying io error.
        #[source]
        source: IoError,
    },

    /// Any other failure while masking or saving the image.
    #[error(transparent)]
    Unexpected(Box<dyn std::error::Error + Send + Sync>),
}

impl From<ImageError> for FilterError {
    fn from(err: ImageError) -> Self {
        FilterError::Unexpected(Box::new(err))
    }
}

/// Summary of a successful filter run.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterReport {
    /// Size of the decoded input, equal to the size of the written output.
    pub input_size: ImageSize,
    /// Path the result was written to.
    pub output_path: PathBuf,
}

/// Keep only the green channel of a BGR image.
///
/// Builds a mask of the same size filled with `(B=0, G=255, R=0)` and returns
/// the per-sample bitwise AND of the image and the mask. Blue and red become
/// zero, green is unchanged. A pixel whose green is zero therefore ends up
/// black, the same as a black input pixel.
///
/// # Example
///
/// ```
/// use chanfilter::filter::green_channel_filter;
/// use chanfilter::image::{Image, ImageSize};
///
/// let image = Image::<u8, 3>::new(ImageSize { width: 1, height: 1 }, vec![200, 100, 50]).unwrap();
///
/// let filtered = green_channel_filter(&image).unwrap();
///
/// assert_eq!(filtered.as_slice(), &[0, 100, 0]);
/// ```
pub fn green_channel_filter(image: &Image<u8, 3>) -> Result<Image<u8, 3>, ImageError> {
    let mask = channel_mask(image.size(), GREEN_BGR)?;

    let mut result = Image::<u8, 3>::from_size_val(image.size(), 0)?;
    bitwise_and(image, &mask, &mut result)?;

    Ok(result)
}

/// Load an image, keep its green channel and save the result.
///
/// The output encoding follows the extension of `output_path`; the file is
/// created or overwritten. Nothing is written when the input cannot be loaded.
///
/// # Errors
///
/// [`FilterError::Load`] when the input cannot be read or decoded, and
/// [`FilterError::Unexpected`] for any failure after that.
pub fn apply_green_channel_filter(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<FilterReport, FilterError> {
    apply_green_channel_filter_with(input_path, output_path, |_, _| {})
}

/// Same as [`apply_green_channel_filter`], calling `on_loaded` with the input
/// path and its size as soon as the input is decoded.
///
/// `on_loaded` runs before the mask is built, so it is still called when the
/// save step fails afterwards.
pub fn apply_green_channel_filter_with(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    on_loaded: impl FnOnce(&Path, ImageSize),
) -> Result<FilterReport, FilterError> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let image = read_image_any_bgr8(input_path).map_err(|source| {
        log::debug!("failed to load {}: {source}", input_path.display());
        FilterError::Load {
            path: input_path.to_path_buf(),
            source,
        }
    })?;
    log::info!("loaded {} with {}", input_path.display(), image.size());
    on_loaded(input_path, image.size());

    let result = green_channel_filter(&image)?;

    write_image_any_bgr8(output_path, &result)
        .map_err(|e| FilterError::Unexpected(Box::new(e)))?;
    log::info!("saved green channel to {}", output_path.display());

    Ok(FilterReport {
        input_size: image.size(),
        output_path: output_path.to_path_buf(),
    })
}

/// Paths used by a filter run.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterConfig {
    /// Image to read.
    pub input_path: PathBuf,
    /// Image to write.
    pub output_path: PathBuf,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl FilterConfig {
    /// Run [`apply_green_channel_filter`] with these paths.
    pub fn run(&self) -> Result<FilterReport, FilterError> {
        apply_green_channel_filter(&self.input_path, &self.output_path)
    }

    /// Run [`apply_green_channel_filter_with`] with these paths.
    pub fn run_with(
        &self,
        on_loaded: impl FnOnce(&Path, ImageSize),
    ) -> Result<FilterReport, FilterError> {
        apply_green_channel_filter_with(&self.input_path, &self.output_path, on_loaded)
    }
}
