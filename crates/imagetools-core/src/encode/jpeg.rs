//! JPEG encoding for resized images.
//!
//! Uses the `image` crate's baseline JPEG encoder. The output carries a JFIF
//! APP0 segment directly after SOI and no EXIF.

use image::codecs::jpeg::JpegEncoder;
use image::ImageEncoder;
use std::io::Cursor;

use super::{validate, EncodeError};
use crate::decode::{DecodedImage, PixelLayout};

/// Encode an RGB image to JPEG bytes.
///
/// # Arguments
///
/// * `image` - RGB image to encode (`PixelLayout::Rgb8`)
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Errors
///
/// Returns `EncodeError::UnsupportedLayout` for images with alpha, and
/// `EncodeError::InvalidDimensions` / `EncodeError::InvalidPixelData` for
/// malformed buffers.
///
/// # Quality Guidelines
///
/// * 90-100: High quality (browser canvas default: 92)
/// * 60-80: Medium quality, acceptable for web uploads
/// * Below 60: Low quality, visible artifacts
pub fn encode_jpeg(image: &DecodedImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    if image.layout != PixelLayout::Rgb8 {
        return Err(EncodeError::UnsupportedLayout {
            format: "JPEG",
            layout: "RGBA",
        });
    }
    validate(image)?;

    // Clamp quality to valid range (1-100)
    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            image.layout.color_type(),
        )
        .map_err(|e| EncodeError::EncodingFailed {
            format: "JPEG",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
