//! EXIF orientation lookup.
//!
//! Resizing never applies orientation to pixels: the restored EXIF segment
//! keeps describing the re-encoded image correctly only if the pixels stay
//! in sensor order. This lookup lets callers see what the segment declares.

use std::io::Cursor;

use exif::{In, Reader, Tag};

use super::Orientation;

/// Extract EXIF orientation from JPEG bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(e) => {
            tracing::debug!(error = %e, "no readable EXIF orientation");
            Orientation::Normal
        }
    }
}
