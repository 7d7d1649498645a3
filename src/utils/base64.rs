use base64::{engine::general_purpose, Engine as _};

use crate::parser::ParseError;

/// Encodes a string to Base64 format.
pub fn base64_encode(input: &str) -> String {
    general_purpose::STANDARD.encode(input)
}

/// Reverses a URL-safe Base64 string to standard Base64 format.
pub fn url_safe_base64_reverse(input: &str) -> String {
    input.replace('-', "+").replace('_', "/")
}

/// Decodes a Base64 string to raw bytes.
///
/// Accepts both the standard and the URL-safe alphabet, with or without
/// trailing padding, and ignores embedded line breaks.
pub fn base64_decode_bytes(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let compact: String = input.split_whitespace().collect();
    let standard = url_safe_base64_reverse(&compact);
    general_purpose::STANDARD_NO_PAD.decode(standard.trim_end_matches('='))
}

/// Decodes a Base64 string holding UTF-8 text.
pub fn base64_decode(input: &str) -> Result<String, ParseError> {
    let bytes = base64_decode_bytes(input)?;
    Ok(String::from_utf8(bytes)?)
}
