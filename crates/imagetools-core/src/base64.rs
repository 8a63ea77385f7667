//! Standard (RFC 4648) base64 codec used for image data URIs.
//!
//! Encoding always pads with `=`. Decoding is best-effort: characters outside
//! the base64 alphabet are dropped and reported through [`Base64Warning`]
//! instead of failing the call, because losing an image over a stray line
//! break is worse than decoding the remainder.

use thiserror::Error;

/// Standard base64 alphabet.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
const PAD: u8 = b'=';

/// Lookup value for the padding sentinel.
const PAD_VALUE: u8 = 64;

/// Lookup value for bytes outside the alphabet.
const INVALID: u8 = 0xFF;

/// Reverse lookup from input byte to its 6-bit value (or `PAD_VALUE` / `INVALID`).
const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table[PAD as usize] = PAD_VALUE;
    table
}

/// Non-fatal diagnostic produced while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base64Warning {
    /// The input contained characters outside `[A-Za-z0-9+/=]`; they were ignored.
    #[error("ignored {count} invalid base64 character(s), first at byte offset {first_offset}")]
    InvalidCharacters { count: usize, first_offset: usize },
}

/// Result of a best-effort decode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoded {
    /// Decoded bytes.
    pub bytes: Vec<u8>,
    /// Set when the input had to be sanitized before decoding.
    pub warning: Option<Base64Warning>,
}

impl Decoded {
    /// Returns true if decoding needed no sanitization.
    pub fn is_clean(&self) -> bool {
        self.warning.is_none()
    }
}

/// Encode bytes as padded standard base64.
///
/// # Example
///
/// ```ignore
/// use imagetools_core::base64::encode;
///
/// assert_eq!(encode(b"fo"), "Zm8=");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);

    for chunk in bytes.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        out.push(ALPHABET[(b0 >> 2) as usize] as char);
        out.push(ALPHABET[(((b0 & 0b11) << 4) | (b1 >> 4)) as usize] as char);

        if chunk.len() > 1 {
            out.push(ALPHABET[(((b1 & 0b1111) << 2) | (b2 >> 6)) as usize] as char);
        } else {
            out.push(PAD as char);
        }

        if chunk.len() > 2 {
            out.push(ALPHABET[(b2 & 0b11_1111) as usize] as char);
        } else {
            out.push(PAD as char);
        }
    }

    out
}

/// Decode base64, dropping any characters outside the alphabet.
///
/// Input is processed in groups of four characters. A group emits one, two
/// or three bytes depending on where its first `=` (or the end of input)
/// falls; a group holding fewer than two data characters emits nothing.
pub fn decode(input: &str) -> Decoded {
    let mut values = Vec::with_capacity(input.len());
    let mut invalid_count = 0usize;
    let mut first_invalid = None;

    for (offset, &byte) in input.as_bytes().iter().enumerate() {
        match DECODE_TABLE[byte as usize] {
            INVALID => {
                invalid_count += 1;
                first_invalid.get_or_insert(offset);
            }
            value => values.push(value),
        }
    }

    let warning = first_invalid.map(|first_offset| Base64Warning::InvalidCharacters {
        count: invalid_count,
        first_offset,
    });
    if let Some(warning) = &warning {
        tracing::warn!(%warning, "sanitized base64 input before decoding");
    }

    let mut bytes = Vec::with_capacity(values.len() / 4 * 3);
    for group in values.chunks(4) {
        // Data characters run up to the first padding sentinel.
        let data_len = group.iter().take_while(|&&v| v != PAD_VALUE).count();
        if data_len < 2 {
            continue;
        }

        let v0 = group[0];
        let v1 = group[1];
        bytes.push((v0 << 2) | (v1 >> 4));

        if data_len > 2 {
            let v2 = group[2];
            bytes.push(((v1 & 0b1111) << 4) | (v2 >> 2));

            if data_len > 3 {
                let v3 = group[3];
                bytes.push(((v2 & 0b11) << 6) | v3);
            }
        }
    }

    Decoded { bytes, warning }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
