//! Upload resize pipeline.
//!
//! Fits an image into a bounding box, re-encodes it in its source format and,
//! for JPEGs, transplants the original EXIF segment into the result. The
//! re-encode drops all metadata, so without the transplant a resized photo
//! would lose its orientation, timestamps and camera data.
//!
//! # Examples
//!
//! ```ignore
//! use imagetools_core::pipeline::{resize_and_restore, ResizeOptions};
//!
//! let resized = resize_and_restore(&upload, "image/jpeg", &ResizeOptions::default())?;
//! if resized.was_resized {
//!     send(&resized.bytes);
//! }
//! ```

mod format;
mod options;

use thiserror::Error;

use crate::decode::{decode_image, fit_dimensions, resize, DecodeError};
use crate::encode::{encode_jpeg, encode_png, EncodeError};
use crate::jpeg;
use crate::restore::{restore, DataUri, RestoreError, RestoreWarning};

pub use format::{is_supported, ImageFormat, OutputFormat};
pub use options::{ResizeOptions, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, DEFAULT_QUALITY};

/// Errors that can occur while resizing.
#[derive(Debug, Error)]
pub enum ResizeError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    DataUri(#[from] RestoreError),
}

/// Output of [`resize_image`] and [`resize_and_restore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resized {
    /// Encoded output, or a copy of the input when nothing was done.
    pub bytes: Vec<u8>,
    /// Output dimensions, when the input was decoded.
    pub dimensions: Option<(u32, u32)>,
    /// False when the input was handed back unchanged.
    pub was_resized: bool,
}

impl Resized {
    fn unchanged(bytes: &[u8], dimensions: Option<(u32, u32)>) -> Self {
        Self {
            bytes: bytes.to_vec(),
            dimensions,
            was_resized: false,
        }
    }
}

/// Output of [`resize_data_uri`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizedDataUri {
    pub data_uri: String,
    pub dimensions: Option<(u32, u32)>,
    pub was_resized: bool,
    pub warnings: Vec<RestoreWarning>,
}

/// Fit `bytes` into the options' bounding box and re-encode.
///
/// GIFs, other image types and non-images are returned unchanged, as are
/// images that already fit. The output is never upscaled and carries no
/// metadata.
///
/// # Errors
///
/// Returns `ResizeError::Decode` if a JPEG or PNG cannot be decoded, and
/// `ResizeError::Encode` if re-encoding fails.
pub fn resize_image(
    bytes: &[u8],
    mime: &str,
    options: &ResizeOptions,
) -> Result<Resized, ResizeError> {
    let format = ImageFormat::from_mime(mime);
    let Some(output) = format.output() else {
        tracing::debug!(mime, ?format, "format not resizable; returning input");
        return Ok(Resized::unchanged(bytes, None));
    };

    let image = decode_image(bytes)?;
    let Some((width, height)) = fit_dimensions(
        image.width,
        image.height,
        options.max_width,
        options.max_height,
    ) else {
        tracing::debug!(
            width = image.width,
            height = image.height,
            "image already fits; returning input"
        );
        return Ok(Resized::unchanged(bytes, Some((image.width, image.height))));
    };

    let resized = resize(&image, width, height, options.filter)?;
    let encoded = match output {
        OutputFormat::Jpeg => encode_jpeg(&resized, options.quality)?,
        OutputFormat::Png => encode_png(&resized)?,
    };

    tracing::debug!(
        from_width = image.width,
        from_height = image.height,
        width,
        height,
        bytes = encoded.len(),
        "resized image"
    );

    Ok(Resized {
        bytes: encoded,
        dimensions: Some((width, height)),
        was_resized: true,
    })
}

/// [`resize_image`], then transplant the original EXIF segment into a
/// resized JPEG.
///
/// # Errors
///
/// Same as [`resize_image`].
pub fn resize_and_restore(
    bytes: &[u8],
    mime: &str,
    options: &ResizeOptions,
) -> Result<Resized, ResizeError> {
    let mut resized = resize_image(bytes, mime, options)?;

    if resized.was_resized && ImageFormat::from_mime(mime) == ImageFormat::Jpeg {
        resized.bytes = jpeg::transplant_exif(bytes, &resized.bytes);
    }

    Ok(resized)
}

/// Resize an image held in a base64 data URI.
///
/// The resized image is encoded back into a data URI and passed through
/// [`restore`] together with the input, so JPEG EXIF survives exactly as it
/// does for callers restoring their own re-encoded uploads. Inputs that are
/// not resized come back as the same string.
///
/// # Errors
///
/// Returns `ResizeError::DataUri` for a malformed data URI header, otherwise
/// the same errors as [`resize_image`].
pub fn resize_data_uri(
    data_uri: &str,
    options: &ResizeOptions,
) -> Result<ResizedDataUri, ResizeError> {
    let parsed = DataUri::parse(data_uri)?;
    let mime = parsed.mime.unwrap_or_default();

    let decoded = parsed.decode();
    if let Some(warning) = &decoded.warning {
        tracing::warn!(%warning, "data URI payload had invalid characters");
    }

    let resized = resize_image(&decoded.bytes, mime, options)?;
    if !resized.was_resized {
        return Ok(ResizedDataUri {
            data_uri: data_uri.to_string(),
            dimensions: resized.dimensions,
            was_resized: false,
            warnings: Vec::new(),
        });
    }

    let output_mime = ImageFormat::from_mime(mime)
        .output()
        .map(OutputFormat::mime)
        .unwrap_or(mime);
    let resized_uri = DataUri::encode(output_mime, &resized.bytes);
    let restored = restore(data_uri, &resized_uri)?;

    Ok(ResizedDataUri {
        data_uri: restored.data_uri,
        dimensions: resized.dimensions,
        was_resized: true,
        warnings: restored.warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::test_support::orientation_app1;
    use crate::decode::{get_orientation, DecodedImage, Orientation, PixelLayout};
    use crate::jpeg::{find_exif, splice_exif, walk, APP1};

    fn gradient(width: u32, height: u32, layout: PixelLayout) -> DecodedImage {
        let channels = layout.channels();
        let mut pixels = Vec::with_capacity(width as usize * height as usize * channels);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 255 / width) as u8);
                pixels.push((y * 255 / height) as u8);
                pixels.push(128);
                if channels == 4 {
                    pixels.push(200);
                }
            }
        }
        DecodedImage::new(width, height, layout, pixels)
    }

    fn jpeg(width: u32, height: u32) -> Vec<u8> {
        encode_jpeg(&gradient(width, height, PixelLayout::Rgb8), 90).unwrap()
    }

    fn jpeg_with_orientation(width: u32, height: u32, orientation: u16) -> Vec<u8> {
        splice_exif(&jpeg(width, height), &orientation_app1(orientation))
    }

    fn small_box() -> ResizeOptions {
        ResizeOptions::with_max(32, 32)
    }

    #[test]
    fn test_resize_jpeg_into_box() {
        let resized = resize_image(&jpeg(64, 48), "image/jpeg", &small_box()).unwrap();

        assert!(resized.was_resized);
        assert_eq!(resized.dimensions, Some((32, 24)));
        let decoded = decode_image(&resized.bytes).unwrap();
        assert_eq!((decoded.width, decoded.height), (32, 24));
    }

    #[test]
    fn test_resize_png_keeps_format_and_alpha() {
        let png = encode_png(&gradient(40, 80, PixelLayout::Rgba8)).unwrap();
        let resized = resize_image(&png, "image/png", &small_box()).unwrap();

        assert!(resized.was_resized);
        assert_eq!(resized.dimensions, Some((16, 32)));
        assert_eq!(&resized.bytes[1..4], b"PNG");
        let decoded = decode_image(&resized.bytes).unwrap();
        assert_eq!(decoded.layout, PixelLayout::Rgba8);
    }

    #[test]
    fn test_image_that_fits_is_unchanged() {
        let input = jpeg(20, 10);
        let resized = resize_image(&input, "image/jpeg", &small_box()).unwrap();

        assert!(!resized.was_resized);
        assert_eq!(resized.dimensions, Some((20, 10)));
        assert_eq!(resized.bytes, input);
    }

    #[test]
    fn test_gif_and_unknown_types_pass_through() {
        let bytes = b"GIF89a not really".to_vec();
        for mime in ["image/gif", "image/webp", "application/octet-stream"] {
            let resized = resize_image(&bytes, mime, &small_box()).unwrap();
            assert!(!resized.was_resized);
            assert_eq!(resized.dimensions, None);
            assert_eq!(resized.bytes, bytes);
        }
    }

    #[test]
    fn test_undecodable_jpeg_is_error() {
        let result = resize_image(&[0x00, 0x01, 0x02], "image/jpeg", &small_box());
        assert!(matches!(
            result,
            Err(ResizeError::Decode(DecodeError::InvalidFormat))
        ));
    }

    #[test]
    fn test_resize_drops_exif() {
        let input = jpeg_with_orientation(64, 48, 6);
        let resized = resize_image(&input, "image/jpeg", &small_box()).unwrap();

        assert!(walk(&resized.bytes).iter().all(|s| !s.is(APP1)));
    }

    #[test]
    fn test_resize_and_restore_keeps_exif() {
        let input = jpeg_with_orientation(64, 48, 6);
        let resized = resize_and_restore(&input, "image/jpeg", &small_box()).unwrap();

        assert!(resized.was_resized);
        assert_eq!(get_orientation(&resized.bytes), Orientation::Rotate90CW);

        let original_exif = find_exif(&walk(&input)).map(|s| s.bytes().to_vec());
        let restored_exif = find_exif(&walk(&resized.bytes)).map(|s| s.bytes().to_vec());
        assert_eq!(restored_exif, original_exif);
    }

    #[test]
    fn test_resize_and_restore_untouched_when_fits() {
        let input = jpeg_with_orientation(16, 16, 3);
        let resized = resize_and_restore(&input, "image/jpeg", &small_box()).unwrap();

        assert!(!resized.was_resized);
        assert_eq!(resized.bytes, input);
    }

    #[test]
    fn test_resize_data_uri_restores_exif() {
        let input = DataUri::encode("image/jpeg", &jpeg_with_orientation(64, 48, 8));
        let resized = resize_data_uri(&input, &small_box()).unwrap();

        assert!(resized.was_resized);
        assert!(resized.warnings.is_empty());
        assert_eq!(resized.dimensions, Some((32, 24)));

        let bytes = DataUri::parse(&resized.data_uri).unwrap().decode().bytes;
        assert_eq!(get_orientation(&bytes), Orientation::Rotate270CW);
    }

    #[test]
    fn test_resize_data_uri_png() {
        let png = encode_png(&gradient(64, 64, PixelLayout::Rgb8)).unwrap();
        let input = DataUri::encode("image/png", &png);
        let resized = resize_data_uri(&input, &small_box()).unwrap();

        assert!(resized.was_resized);
        assert!(resized.data_uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_resize_data_uri_unchanged() {
        let input = DataUri::encode("image/gif", b"GIF89a");
        let resized = resize_data_uri(&input, &small_box()).unwrap();

        assert!(!resized.was_resized);
        assert_eq!(resized.data_uri, input);
    }

    #[test]
    fn test_resize_data_uri_malformed_header() {
        let result = resize_data_uri("data:image/jpeg;base64", &small_box());
        assert!(matches!(
            result,
            Err(ResizeError::DataUri(RestoreError::MissingPayload))
        ));
    }
}
