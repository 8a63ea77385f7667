//! EXIF restoration over base64 data URIs.
//!
//! Takes the original upload and its re-encoded (resized) version, both as
//! `data:<mime>;base64,<payload>` strings, and returns the resized image with
//! the original's APP1 segment spliced back in. Non-JPEG originals pass
//! through untouched.
//!
//! Malformed image data never fails a restore; it degrades to "less EXIF
//! restored" and is reported through [`RestoreWarning`]. Only malformed data
//! URI headers, which are caller bugs, are returned as [`RestoreError`].

use thiserror::Error;

use crate::base64::{self, Base64Warning};
use crate::jpeg;

/// Prefix an original must carry, exactly, for restoration to be attempted.
pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

const JPEG_MIME: &str = "image/jpeg";

/// Precondition violations in the restore inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    /// A `data:` URI without the `,` that separates header and payload.
    #[error("data URI has no payload separator")]
    MissingPayload,

    /// A `data:` URI whose payload is not base64-encoded.
    #[error("data URI for '{mime}' is not base64-encoded")]
    NotBase64 { mime: String },
}

/// Data-quality warning collected while restoring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreWarning {
    #[error("original image: {0}")]
    Original(Base64Warning),

    #[error("resized image: {0}")]
    Resized(Base64Warning),

    /// The original declared an APP1 segment longer than the data it held.
    #[error("original EXIF segment is truncated ({available} of {declared} bytes)")]
    TruncatedExif { declared: usize, available: usize },
}

/// What a restore call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// The original was not a JPEG data URI; the resized URI was returned as-is.
    PassThrough,
    /// No EXIF was spliced in (the original had no APP1 segment, or the resized
    /// image had no insertion point); the resized bytes were re-encoded unchanged.
    NoExif,
    /// An EXIF segment of `exif_len` bytes was spliced in.
    Restored { exif_len: usize },
}

/// Result of [`restore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restored {
    /// The output data URI.
    pub data_uri: String,
    pub outcome: RestoreOutcome,
    pub warnings: Vec<RestoreWarning>,
}

/// A parsed `data:<mime>;base64,<payload>` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUri<'a> {
    /// MIME type without parameters; `None` for a bare base64 payload.
    pub mime: Option<&'a str>,
    /// Base64 payload.
    pub payload: &'a str,
}

impl<'a> DataUri<'a> {
    /// Parse a data URI. A string not starting with `data:` is taken to be a
    /// bare base64 payload.
    pub fn parse(input: &'a str) -> Result<Self, RestoreError> {
        let Some(rest) = input.strip_prefix("data:") else {
            return Ok(Self {
                mime: None,
                payload: input,
            });
        };

        let (header, payload) = rest.split_once(',').ok_or(RestoreError::MissingPayload)?;
        let mut params = header.split(';');
        let mime = params.next().unwrap_or_default();

        if !params.any(|param| param.eq_ignore_ascii_case("base64")) {
            return Err(RestoreError::NotBase64 {
                mime: mime.to_string(),
            });
        }

        Ok(Self {
            mime: Some(mime),
            payload,
        })
    }

    /// Returns true if the MIME type is `image/jpeg`.
    pub fn is_jpeg(&self) -> bool {
        self.mime
            .is_some_and(|mime| mime.eq_ignore_ascii_case(JPEG_MIME))
    }

    /// Decode the payload.
    pub fn decode(&self) -> base64::Decoded {
        base64::decode(self.payload)
    }

    /// Build a base64 data URI for `bytes`.
    pub fn encode(mime: &str, bytes: &[u8]) -> String {
        format!("data:{};base64,{}", mime, base64::encode(bytes))
    }
}

/// Restore the original's EXIF segment into the resized image.
///
/// # Arguments
///
/// * `original` - The original upload as a data URI
/// * `resized` - The re-encoded image as a data URI (or bare base64 payload)
///
/// # Returns
///
/// A `data:image/jpeg;base64,` URI carrying the resized image and the
/// original's EXIF segment, or `resized` unchanged when `original` does not
/// start with `data:image/jpeg;base64,`.
///
/// # Errors
///
/// Returns `RestoreError` if `resized` is a `data:` URI with a malformed
/// header. Invalid base64 characters and malformed JPEG structure are
/// reported as warnings instead.
pub fn restore(original: &str, resized: &str) -> Result<Restored, RestoreError> {
    let Some(original_payload) = original.strip_prefix(JPEG_DATA_URI_PREFIX) else {
        tracing::debug!("original is not a JPEG data URI; passing resized image through");
        return Ok(Restored {
            data_uri: resized.to_string(),
            outcome: RestoreOutcome::PassThrough,
            warnings: Vec::new(),
        });
    };

    let resized_uri = DataUri::parse(resized)?;
    let mut warnings = Vec::new();

    let original_decoded = base64::decode(original_payload);
    if let Some(warning) = original_decoded.warning {
        warnings.push(RestoreWarning::Original(warning));
    }

    let segments = jpeg::walk(&original_decoded.bytes);
    let exif = jpeg::find_exif(&segments);
    if let Some(segment) = exif.filter(|segment| segment.is_truncated()) {
        warnings.push(RestoreWarning::TruncatedExif {
            declared: segment.declared_length() as usize + 2,
            available: segment.len(),
        });
    }
    let exif_bytes = exif.map(|segment| segment.bytes()).unwrap_or_default();

    let resized_decoded = resized_uri.decode();
    if let Some(warning) = resized_decoded.warning {
        warnings.push(RestoreWarning::Resized(warning));
    }

    let spliced = jpeg::splice_exif(&resized_decoded.bytes, exif_bytes);
    let outcome = if spliced.len() > resized_decoded.bytes.len() {
        RestoreOutcome::Restored {
            exif_len: exif_bytes.len(),
        }
    } else {
        RestoreOutcome::NoExif
    };

    Ok(Restored {
        data_uri: DataUri::encode(JPEG_MIME, &spliced),
        outcome,
        warnings,
    })
}
