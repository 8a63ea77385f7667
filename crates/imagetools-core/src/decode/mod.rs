//! Image decoding and resizing.
//!
//! This module provides functionality for:
//! - Decoding JPEG and PNG images into pixel buffers
//! - Fitting dimensions into a bounding box and resizing
//! - Reading the EXIF orientation a JPEG declares
//!
//! # Architecture
//!
//! All operations are synchronous and single-threaded, and are designed to
//! be called from Web Workers via the WASM bindings. Decoding deliberately
//! leaves pixels in stored orientation (see `orientation`).
//!
//! # Examples
//!
//! ```ignore
//! use imagetools_core::decode::{decode_image, fit_dimensions, resize, FilterType};
//!
//! let image = decode_image(&jpeg_bytes).unwrap();
//! if let Some((w, h)) = fit_dimensions(image.width, image.height, 640, 480) {
//!     let preview = resize(&image, w, h, FilterType::Lanczos3).unwrap();
//! }
//! ```

mod orientation;
mod raster;
mod resize;
mod types;

pub use orientation::get_orientation;
pub use raster::decode_image;
pub use resize::{fit_dimensions, resize};
pub use types::{DecodeError, DecodedImage, FilterType, Orientation, PixelLayout};

#[cfg(test)]
pub(crate) use orientation::test_support;
