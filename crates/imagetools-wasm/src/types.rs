//! WASM-compatible wrapper types for pipeline results.
//!
//! This module provides JavaScript-friendly types that wrap the core imagetools
//! results, handling the conversion between Rust and JavaScript data representations.

use imagetools_core::pipeline::{ResizeOptions, Resized};
use imagetools_core::restore::{RestoreOutcome, Restored};
use wasm_bindgen::prelude::*;

/// A resized image wrapper for JavaScript.
///
/// Holds the encoded output of the resize pipeline. When `was_resized` is
/// false the bytes are a copy of the input and the caller should upload the
/// original file instead.
///
/// # Memory Management
///
/// The encoded bytes live in WASM memory. `bytes()` copies them into a
/// `Uint8Array`. The `free()` method can be called to release WASM memory
/// early; wasm-bindgen's finalizer handles it otherwise.
#[wasm_bindgen]
pub struct JsResizedImage {
    bytes: Vec<u8>,
    dimensions: Option<(u32, u32)>,
    was_resized: bool,
}

#[wasm_bindgen]
impl JsResizedImage {
    /// Output width in pixels, or `undefined` if the input was never decoded
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> Option<u32> {
        self.dimensions.map(|(width, _)| width)
    }

    /// Output height in pixels, or `undefined` if the input was never decoded
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> Option<u32> {
        self.dimensions.map(|(_, height)| height)
    }

    /// Whether the image was actually resized
    #[wasm_bindgen(getter)]
    pub fn was_resized(&self) -> bool {
        self.was_resized
    }

    /// Number of encoded bytes
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the encoded image as Uint8Array.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {}
}

impl From<Resized> for JsResizedImage {
    fn from(resized: Resized) -> Self {
        Self {
            bytes: resized.bytes,
            dimensions: resized.dimensions,
            was_resized: resized.was_resized,
        }
    }
}

/// Detailed EXIF restoration result for JavaScript.
#[wasm_bindgen]
pub struct JsRestoredImage {
    data_uri: String,
    outcome: RestoreOutcome,
    warnings: Vec<String>,
}

#[wasm_bindgen]
impl JsRestoredImage {
    /// The output data URI
    #[wasm_bindgen(getter)]
    pub fn data_uri(&self) -> String {
        self.data_uri.clone()
    }

    /// One of `"pass_through"`, `"no_exif"` or `"restored"`
    #[wasm_bindgen(getter)]
    pub fn outcome(&self) -> String {
        outcome_name(self.outcome).to_string()
    }

    /// Size of the transplanted EXIF segment in bytes (0 unless restored)
    #[wasm_bindgen(getter)]
    pub fn exif_length(&self) -> usize {
        match self.outcome {
            RestoreOutcome::Restored { exif_len } => exif_len,
            RestoreOutcome::PassThrough | RestoreOutcome::NoExif => 0,
        }
    }

    /// Data-quality warnings as an array of strings
    #[wasm_bindgen(getter)]
    pub fn warnings(&self) -> js_sys::Array {
        self.warnings.iter().map(|w| JsValue::from_str(w)).collect()
    }
}

impl JsRestoredImage {
    pub(crate) fn warning_messages(&self) -> &[String] {
        &self.warnings
    }
}

impl From<Restored> for JsRestoredImage {
    fn from(restored: Restored) -> Self {
        Self {
            data_uri: restored.data_uri,
            outcome: restored.outcome,
            warnings: restored.warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Stable name for a restore outcome.
pub(crate) fn outcome_name(outcome: RestoreOutcome) -> &'static str {
    match outcome {
        RestoreOutcome::PassThrough => "pass_through",
        RestoreOutcome::NoExif => "no_exif",
        RestoreOutcome::Restored { .. } => "restored",
    }
}

/// Parse resize options passed from JavaScript.
///
/// `undefined` and `null` yield the defaults; partial objects fill in the
/// missing fields from the defaults.
///
/// # Example (TypeScript)
/// ```typescript
/// resize_image(bytes, file.type, { max_width: 1024, max_height: 768, filter: "lanczos3" });
/// resize_image(bytes, file.type, { width: 800, height: 600 });
/// resize_image(bytes, file.type); // 640x480, quality 92
/// ```
pub(crate) fn options_from_js(value: JsValue) -> Result<ResizeOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(ResizeOptions::default());
    }

    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid resize options: {}", e)))
}

/// Log a warning to the browser console.
pub(crate) fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
