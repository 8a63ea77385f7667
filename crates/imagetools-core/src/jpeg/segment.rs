//! Header segment walking.

use std::iter::FusedIterator;

use super::{has_marker_at, SOI, SOS};

/// One marker segment, borrowed from the buffer it was walked from.
///
/// `bytes` covers the marker, its length field and payload. A segment whose
/// declared length runs past the end of the buffer is clamped and reported
/// by [`Segment::is_truncated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    offset: usize,
    declared_length: u16,
    bytes: &'a [u8],
}

impl<'a> Segment<'a> {
    /// Offset of the marker within the walked buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Raw bytes of the segment, marker included.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Two-byte marker code, e.g. `[0xFF, 0xE1]`.
    pub fn marker(&self) -> [u8; 2] {
        [self.bytes[0], self.bytes[1]]
    }

    /// Returns true if this segment starts with `marker`.
    pub fn is(&self, marker: [u8; 2]) -> bool {
        has_marker_at(self.bytes, 0, marker)
    }

    /// Big-endian length field (includes its own two bytes).
    pub fn declared_length(&self) -> u16 {
        self.declared_length
    }

    /// Payload following the length field.
    pub fn payload(&self) -> &'a [u8] {
        &self.bytes[4.min(self.bytes.len())..]
    }

    /// Returns true if the buffer ended before the declared length.
    pub fn is_truncated(&self) -> bool {
        self.bytes.len() < self.declared_length as usize + 2
    }

    /// Total length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the segment holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Iterator over the header segments of a JPEG buffer.
///
/// A leading SOI is skipped. Every other boundary is read as a marker and a
/// length, whether or not it starts with `0xFF`. Iteration ends at SOS, at
/// the end of the buffer, at a length field cut off by the end of the buffer,
/// or after a segment whose declared length overruns the buffer. None of
/// these are errors.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    data: &'a [u8],
    offset: usize,
    done: bool,
}

impl<'a> Segments<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        let offset = if has_marker_at(data, 0, SOI) { 2 } else { 0 };
        Self {
            data,
            offset,
            done: false,
        }
    }

    /// Offset the walk will resume from.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn finish(&mut self) -> Option<Segment<'a>> {
        self.done = true;
        None
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let offset = self.offset;
        let data = self.data;

        if has_marker_at(data, offset, SOS) {
            tracing::debug!(offset, "reached start-of-scan");
            return self.finish();
        }

        if offset >= data.len() {
            return self.finish();
        }

        let Some(&[hi, lo]) = data.get(offset + 2..offset + 4) else {
            tracing::warn!(offset, "segment header truncated");
            return self.finish();
        };

        let declared_length = u16::from_be_bytes([hi, lo]);
        let length = declared_length as usize;
        let end = offset + length + 2;
        if end > data.len() {
            tracing::warn!(
                offset,
                declared = length,
                available = data.len() - offset,
                "segment runs past end of buffer"
            );
            self.done = true;
        }

        self.offset = end;
        Some(Segment {
            offset,
            declared_length,
            bytes: &data[offset..end.min(data.len())],
        })
    }
}

impl FusedIterator for Segments<'_> {}

/// Walk the header segments of `data` up to (not including) SOS.
pub fn walk(data: &[u8]) -> Vec<Segment<'_>> {
    Segments::new(data).collect()
}


// ============================================================================
// Property-Based Tests
// ============================================================================
