use crate::error::{Error, Result};

/// Prefix rule applied by [`is_valid_hex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexMode {
    /// `0x` is mandatory. A bare `0x` is the empty byte string.
    Strict,
    /// `0x` is optional, but at least one digit is required.
    Lenient,
}

/// Check whether `s` is a hex string under the given prefix rule.
/// Digit count may be odd or even.
pub fn is_valid_hex(s: &str, mode: HexMode) -> bool {
    let digits = match (strip_prefix(s), mode) {
        (Some(digits), HexMode::Strict) => return all_hex_digits(digits),
        (Some(digits), HexMode::Lenient) => digits,
        (None, HexMode::Strict) => return false,
        (None, HexMode::Lenient) => s,
    };
    !digits.is_empty() && all_hex_digits(digits)
}

fn all_hex_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Strip a leading `0x`/`0X`, returning `None` if there is none.
pub fn strip_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}

/// Decode hex with an optional prefix into bytes.
pub fn decode(s: &str) -> Option<Vec<u8>> {
    let digits = strip_prefix(s).unwrap_or(s);
    hex::decode(digits).ok()
}

/// Decode a hex value that must be exactly `len` bytes.
pub fn decode_fixed(s: &str, len: usize) -> Option<Vec<u8>> {
    decode(s).filter(|bytes| bytes.len() == len)
}

/// Message data for `personal_sign` and `personal_ecRecover`.
///
/// Strict hex passes through lowercased; anything else is treated as text
/// and its UTF-8 bytes are hex-encoded.
pub fn message_to_hex(data: &str) -> String {
    if is_valid_hex(data, HexMode::Strict) {
        data.to_ascii_lowercase()
    } else {
        format!("0x{}", hex::encode(data.as_bytes()))
    }
}

/// Validate caller supplied hex bytes and return them lowercased with prefix.
pub fn normalize_bytes(field: &'static str, s: &str) -> Result<String> {
    if !is_valid_hex(s, HexMode::Strict) || decode(s).is_none() {
        return Err(Error::InvalidHex {
            field,
            value: s.to_string(),
        });
    }
    Ok(s.to_ascii_lowercase())
}
