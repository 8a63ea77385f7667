//! Resize pipeline WASM bindings.
//!
//! # Functions
//!
//! - [`resize_image`] - Fit image bytes into a bounding box, keeping JPEG EXIF
//! - [`resize_data_uri`] - Same, for an image held in a data URI
//! - [`is_supported`] - Capability probe for a MIME type
//! - [`get_orientation`] - EXIF orientation a JPEG declares
//!
//! # Example
//!
//! ```typescript
//! import { is_supported, resize_image } from '@imagetools/wasm';
//!
//! if (is_supported(file.type)) {
//!   const bytes = new Uint8Array(await file.arrayBuffer());
//!   const result = resize_image(bytes, file.type, { max_width: 1024, max_height: 768 });
//!   const upload = result.was_resized ? new Blob([result.bytes()], { type: file.type }) : file;
//! }
//! ```

use crate::types::{console_warn, options_from_js, JsResizedImage};
use imagetools_core::decode;
use imagetools_core::pipeline::{self, ResizeError, ResizeOptions};
use wasm_bindgen::prelude::*;

/// Resize an image to fit the bounding box in `options`.
///
/// JPEGs keep their original EXIF segment. GIFs and unsupported types, and
/// images that already fit, come back unchanged with `was_resized == false`.
///
/// # Arguments
///
/// * `bytes` - The image file bytes as a `Uint8Array`
/// * `mime` - The file's MIME type (e.g. `file.type`)
/// * `options` - Optional `{ max_width, max_height, quality, filter }`
///
/// # Errors
///
/// Returns an error if the options are invalid or a JPEG/PNG fails to decode.
#[wasm_bindgen]
pub fn resize_image(bytes: &[u8], mime: &str, options: JsValue) -> Result<JsResizedImage, JsValue> {
    let options = options_from_js(options)?;
    resize_with(bytes, mime, &options).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize an image held in a base64 data URI.
///
/// Returns the resized image as a data URI, or the input string unchanged
/// when no resize was needed.
#[wasm_bindgen]
pub fn resize_data_uri(data_uri: &str, options: JsValue) -> Result<String, JsValue> {
    let options = options_from_js(options)?;
    let resized = pipeline::resize_data_uri(data_uri, &options)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    for warning in &resized.warnings {
        console_warn(&format!("resize_data_uri: {}", warning));
    }

    Ok(resized.data_uri)
}

/// Check whether images of this MIME type can be resized.
///
/// Hosts should upload the original file untouched when this returns false.
#[wasm_bindgen]
pub fn is_supported(mime: &str) -> bool {
    pipeline::is_supported(mime)
}

/// Read the EXIF orientation (1-8) from JPEG bytes.
///
/// Returns 1 (normal) when the image has no readable orientation.
#[wasm_bindgen]
pub fn get_orientation(bytes: &[u8]) -> u8 {
    decode::get_orientation(bytes) as u8
}

fn resize_with(
    bytes: &[u8],
    mime: &str,
    options: &ResizeOptions,
) -> Result<JsResizedImage, ResizeError> {
    pipeline::resize_and_restore(bytes, mime, options).map(JsResizedImage::from)
}


/// WASM-specific tests that need `JsValue` options.
///
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use imagetools_core::decode::{DecodedImage, PixelLayout};
    use imagetools_core::encode::encode_jpeg;
    use imagetools_core::restore::DataUri;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn gray_jpeg(width: u32, height: u32) -> Vec<u8> {
        let image = DecodedImage::new(
            width,
            height,
            PixelLayout::Rgb8,
            vec![128u8; (width * height * 3) as usize],
        );
        encode_jpeg(&image, 90).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_resize_image_undefined_options() {
        let jpeg = gray_jpeg(1280, 960);
        let result = resize_image(&jpeg, "image/jpeg", JsValue::UNDEFINED).unwrap();

        assert!(result.was_resized());
        assert_eq!(result.width(), Some(640));
        assert_eq!(result.height(), Some(480));
    }

    #[wasm_bindgen_test]
    fn test_resize_image_partial_options() {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"width".into(), &JsValue::from(100)).unwrap();
        js_sys::Reflect::set(&options, &"height".into(), &JsValue::from(100)).unwrap();

        let jpeg = gray_jpeg(200, 100);
        let result = resize_image(&jpeg, "image/jpeg", options.into()).unwrap();
        assert_eq!(result.width(), Some(100));
        assert_eq!(result.height(), Some(50));
    }

    #[wasm_bindgen_test]
    fn test_resize_image_invalid_options() {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"filter".into(), &"cubic".into()).unwrap();

        let result = resize_image(&gray_jpeg(8, 8), "image/jpeg", options.into());
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_resize_image_corrupt_jpeg() {
        let result = resize_image(&[0xFF, 0xD8, 0x00], "image/jpeg", JsValue::NULL);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_resize_data_uri() {
        let input = DataUri::encode("image/jpeg", &gray_jpeg(1280, 720));
        let output = resize_data_uri(&input, JsValue::UNDEFINED).unwrap();

        assert!(output.starts_with("data:image/jpeg;base64,"));
        assert_ne!(output, input);
    }
}
