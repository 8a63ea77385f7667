//! EXIF (APP1) segment lookup.

use super::{Segment, APP1};

/// Identifier that opens an EXIF APP1 payload.
pub const EXIF_IDENTIFIER: &[u8] = b"Exif\0\0";

/// Find the first APP1 segment in file order.
///
/// The segment is taken as-is: an APP1 carrying XMP rather than EXIF is still
/// returned, since the contents are never interpreted.
pub fn find_exif<'a>(segments: &[Segment<'a>]) -> Option<Segment<'a>> {
    let segment = segments.iter().find(|segment| segment.is(APP1)).copied()?;

    if !segment.payload().starts_with(EXIF_IDENTIFIER) {
        tracing::debug!(
            offset = segment.offset(),
            "APP1 segment does not carry an Exif identifier"
        );
    }

    Some(segment)
}

/// Raw bytes of the first APP1 segment, or an empty slice if there is none.
pub fn extract_exif<'a>(segments: &[Segment<'a>]) -> &'a [u8] {
    find_exif(segments)
        .map(|segment| segment.bytes())
        .unwrap_or_default()
}
