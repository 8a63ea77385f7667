//! EXIF restoration WASM bindings.
//!
//! Browsers drop all metadata when re-encoding through a canvas. These
//! bindings put the original JPEG's EXIF segment back into the re-encoded
//! image, either as data URIs or as raw bytes.
//!
//! # Example
//!
//! ```typescript
//! import { restore_exif } from '@imagetools/wasm';
//!
//! const original = await readAsDataURL(file);
//! const resized = canvas.toDataURL('image/jpeg', 0.92);
//! const withExif = restore_exif(original, resized);
//! ```

use crate::types::{console_warn, JsRestoredImage};
use imagetools_core::{jpeg, restore};
use wasm_bindgen::prelude::*;

/// Restore the original's EXIF segment into a resized JPEG data URI.
///
/// # Arguments
///
/// * `original` - The original upload as a data URI
/// * `resized` - The re-encoded image as a data URI or bare base64 payload
///
/// # Returns
///
/// A `data:image/jpeg;base64,` URI, or `resized` unchanged when `original`
/// is not a JPEG data URI. Invalid base64 characters and truncated EXIF are
/// logged to the console as warnings.
///
/// # Errors
///
/// Returns an error if `resized` is a `data:` URI with a malformed header.
#[wasm_bindgen]
pub fn restore_exif(original: &str, resized: &str) -> Result<String, JsValue> {
    let restored = restore_exif_detailed(original, resized)?;
    for warning in restored.warning_messages() {
        console_warn(&format!("restore_exif: {}", warning));
    }
    Ok(restored.data_uri())
}

/// Like [`restore_exif`], but returns the outcome and warnings instead of
/// logging them.
///
/// # Example
///
/// ```typescript
/// const result = restore_exif_detailed(original, resized);
/// if (result.outcome === 'restored') {
///   console.log(`restored ${result.exif_length} bytes of EXIF`);
/// }
/// ```
#[wasm_bindgen]
pub fn restore_exif_detailed(original: &str, resized: &str) -> Result<JsRestoredImage, JsValue> {
    restore::restore(original, resized)
        .map(JsRestoredImage::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Transplant the first EXIF segment of `original` into `resized`.
///
/// Byte-level counterpart of [`restore_exif`] for callers that already hold
/// both images as `Uint8Array`s. Returns a copy of `resized` when `original`
/// has no EXIF.
#[wasm_bindgen]
pub fn transplant_exif(original: &[u8], resized: &[u8]) -> Vec<u8> {
    jpeg::transplant_exif(original, resized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use imagetools_core::restore::DataUri;

    const ORIGINAL: &[u8] = &[
        0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x04, 0xDE, 0xAD, 0xFF, 0xDA, 0x01, 0x02, 0xFF, 0xD9,
    ];
    const RESIZED: &[u8] = &[
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x04, 0xCA, 0xFE, 0xFF, 0xDA, 0x03, 0x04, 0xFF, 0xD9,
    ];
    const RESTORED: &[u8] = &[
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x04, 0xCA, 0xFE, 0xFF, 0xE1, 0x00, 0x04, 0xDE, 0xAD,
        0xFF, 0xDA, 0x03, 0x04, 0xFF, 0xD9,
    ];

    #[test]
    fn test_restore_exif() {
        let original = DataUri::encode("image/jpeg", ORIGINAL);
        let resized = DataUri::encode("image/jpeg", RESIZED);

        let output = restore_exif(&original, &resized).unwrap();
        assert_eq!(output, DataUri::encode("image/jpeg", RESTORED));
    }

    #[test]
    fn test_restore_exif_pass_through() {
        let output = restore_exif("data:image/png;base64,AAAA", "whatever").unwrap();
        assert_eq!(output, "whatever");
    }

    #[test]
    fn test_restore_exif_detailed() {
        let original = DataUri::encode("image/jpeg", ORIGINAL);
        let resized = DataUri::encode("image/jpeg", RESIZED);

        let result = restore_exif_detailed(&original, &resized).unwrap();
        assert_eq!(result.outcome(), "restored");
        assert_eq!(result.exif_length(), 6);
        assert!(result.warning_messages().is_empty());
    }

    #[test]
    fn test_transplant_exif() {
        assert_eq!(transplant_exif(ORIGINAL, RESIZED), RESTORED);
        assert_eq!(transplant_exif(RESIZED, RESIZED), RESIZED);
    }
}
