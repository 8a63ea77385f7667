//! Image encoding for resized uploads.
//!
//! This module provides functionality for:
//! - Encoding images to JPEG format with configurable quality
//! - Encoding images to PNG (lossless, alpha preserved)
//!
//! Resized images are re-encoded in their source format. Neither encoder
//! writes EXIF; JPEG metadata is restored afterwards by splicing (see
//! `crate::jpeg`).
//!
//! # Examples
//!
//! ```ignore
//! use imagetools_core::decode::{DecodedImage, PixelLayout};
//! use imagetools_core::encode::encode_jpeg;
//!
//! let image = DecodedImage::new(100, 100, PixelLayout::Rgb8, vec![128u8; 100 * 100 * 3]);
//! let jpeg_bytes = encode_jpeg(&image, 92).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;
mod png;

use thiserror::Error;

use crate::decode::DecodedImage;

pub use jpeg::encode_jpeg;
pub use png::encode_png;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder cannot store this pixel layout
    #[error("Unsupported pixel layout for {format}: {layout}")]
    UnsupportedLayout {
        format: &'static str,
        layout: &'static str,
    },

    /// Encoding failed inside the codec
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: &'static str,
        message: String,
    },
}

/// Check dimensions and buffer length before handing pixels to an encoder.
fn validate(image: &DecodedImage) -> Result<(), EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let expected = image.expected_len();
    if image.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    Ok(())
}
