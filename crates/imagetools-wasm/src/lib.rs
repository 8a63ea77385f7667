//! Imagetools WASM - WebAssembly bindings for imagetools
//!
//! This crate provides WASM bindings to expose the imagetools-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `restore` - EXIF restoration over data URIs and raw bytes
//! - `resize` - Resize pipeline, capability probe and orientation lookup
//! - `base64` - Base64 encoding and lenient decoding
//! - `types` - WASM-compatible wrapper types for results and options
//!
//! # Usage
//!
//! ```typescript
//! import init, { is_supported, resize_image } from '@imagetools/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! if (is_supported(file.type)) {
//!   const resized = resize_image(bytes, file.type);
//!   console.log(`Resized to ${resized.width}x${resized.height}`);
//! }
//! ```

use wasm_bindgen::prelude::*;

mod base64;
mod resize;
mod restore;
mod types;

// Re-export public types
pub use base64::{decode_base64, encode_base64};
pub use resize::{get_orientation, is_supported, resize_data_uri, resize_image};
pub use restore::{restore_exif, restore_exif_detailed, transplant_exif};
pub use types::{JsResizedImage, JsRestoredImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
