//! Base64 WASM bindings.
//!
//! Exposes the lenient decoder used for data URI payloads so hosts can turn
//! restored data URIs back into bytes without `atob`.

use crate::types::console_warn;
use imagetools_core::base64;
use wasm_bindgen::prelude::*;

/// Encode bytes as standard padded base64.
#[wasm_bindgen]
pub fn encode_base64(bytes: &[u8]) -> String {
    base64::encode(bytes)
}

/// Decode standard base64.
///
/// Characters outside the alphabet are skipped with a console warning, and
/// missing padding is tolerated. Never fails.
#[wasm_bindgen]
pub fn decode_base64(input: &str) -> Vec<u8> {
    let decoded = base64::decode(input);
    if let Some(warning) = &decoded.warning {
        console_warn(&format!("decode_base64: {}", warning));
    }
    decoded.bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_base64() {
        assert_eq!(encode_base64(b"foobar"), "Zm9vYmFy");
        assert_eq!(encode_base64(&[]), "");
    }

    #[test]
    fn test_decode_base64_clean_input() {
        assert_eq!(decode_base64("Zm9vYg=="), b"foob");
        assert_eq!(decode_base64("Zm9vYg"), b"foob");
    }
}
