//! Imagetools Core - Client-side upload resizing
//!
//! This crate provides the core functionality behind resizing images before
//! upload, including base64 data URI handling, JPEG segment walking, EXIF
//! transplanting between JPEG streams, and the resize pipeline itself.

pub mod base64;
pub mod decode;
pub mod encode;
pub mod jpeg;
pub mod pipeline;
pub mod restore;

pub use decode::{get_orientation, FilterType, Orientation};
pub use jpeg::transplant_exif;
pub use pipeline::{
    is_supported, resize_and_restore, resize_data_uri, resize_image, ImageFormat, ResizeError,
    ResizeOptions, Resized, ResizedDataUri,
};
pub use restore::{restore, RestoreError, RestoreOutcome, RestoreWarning, Restored};
