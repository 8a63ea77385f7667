//! Minimal JPEG container handling for EXIF transplanting.
//!
//! This module provides functionality for:
//! - Walking the header marker segments of a JPEG up to start-of-scan
//! - Locating the first APP1 (EXIF) segment
//! - Splicing an EXIF segment into another JPEG's byte stream
//!
//! # Architecture
//!
//! Segments borrow from the input buffer and splicing always allocates a new
//! buffer, so the original and resized images are never aliased. Nothing here
//! decodes pixel data or interprets EXIF contents.
//!
//! # Examples
//!
//! ```ignore
//! use imagetools_core::jpeg::{extract_exif, splice_exif, walk};
//!
//! let segments = walk(&original_bytes);
//! let exif = extract_exif(&segments);
//! let restored = splice_exif(&resized_bytes, exif);
//! ```

mod exif;
mod segment;
mod splice;

pub use self::exif::{extract_exif, find_exif, EXIF_IDENTIFIER};
pub use segment::{walk, Segment, Segments};
pub use splice::{insertion_point, splice_exif};

/// Start-of-image marker.
pub const SOI: [u8; 2] = [0xFF, 0xD8];
/// End-of-image marker.
pub const EOI: [u8; 2] = [0xFF, 0xD9];
/// Start-of-scan marker; entropy-coded data follows.
pub const SOS: [u8; 2] = [0xFF, 0xDA];
/// APP1 marker, conventionally carrying EXIF.
pub const APP1: [u8; 2] = [0xFF, 0xE1];

/// Leading byte of every marker.
pub const MARKER_PREFIX: u8 = 0xFF;

/// Returns true if `data` holds `marker` at `offset`.
#[inline]
pub fn has_marker_at(data: &[u8], offset: usize, marker: [u8; 2]) -> bool {
    data.get(offset) == Some(&marker[0]) && data.get(offset + 1) == Some(&marker[1])
}

/// Returns true if `data` starts with the SOI marker.
#[inline]
pub fn is_jpeg(data: &[u8]) -> bool {
    has_marker_at(data, 0, SOI)
}

/// Transplant the first EXIF segment of `original` into `resized`.
///
/// Returns `resized` unchanged (as a new buffer) when `original` carries no
/// APP1 segment.
pub fn transplant_exif(original: &[u8], resized: &[u8]) -> Vec<u8> {
    let segments = walk(original);
    let exif = extract_exif(&segments);
    splice_exif(resized, exif)
}
