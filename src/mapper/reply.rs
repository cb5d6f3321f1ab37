use serde_json::Value;
use tracing::warn;

use crate::codec::hex::{decode, is_valid_hex, HexMode};
use crate::codec::Address;
use crate::dispatch::Method;
use crate::error::{Error, Result};

/// Signature length (r, s, v).
pub const SIGNATURE_BYTES: usize = 65;

/// Transaction hash length.
pub const HASH_BYTES: usize = 32;

fn malformed(method: Method, reason: String) -> Error {
    warn!("malformed {} reply: {}", method, reason);
    Error::malformed(method, reason)
}

fn as_str(method: Method, reply: &Value) -> Result<&str> {
    reply
        .as_str()
        .ok_or_else(|| malformed(method, format!("expected a string, got {reply}")))
}

/// A boolean confirmation.
pub fn expect_bool(method: Method, reply: &Value) -> Result<bool> {
    reply
        .as_bool()
        .ok_or_else(|| malformed(method, format!("expected a boolean, got {reply}")))
}

/// A single address, parsed from any case.
pub fn expect_address(method: Method, reply: &Value) -> Result<Address> {
    let s = as_str(method, reply)?;
    s.parse()
        .map_err(|_| malformed(method, format!("expected an address, got {s:?}")))
}

/// An address validated but returned exactly as the node sent it.
pub fn expect_raw_address(method: Method, reply: &Value) -> Result<String> {
    let s = as_str(method, reply)?;
    if !is_valid_hex(s, HexMode::Strict) {
        return Err(malformed(method, format!("expected an address, got {s:?}")));
    }
    expect_address(method, reply)?;
    Ok(s.to_string())
}

/// An ordered list of addresses.
pub fn expect_address_list(method: Method, reply: &Value) -> Result<Vec<Address>> {
    let items = reply
        .as_array()
        .ok_or_else(|| malformed(method, format!("expected an array, got {reply}")))?;
    items.iter().map(|item| expect_address(method, item)).collect()
}

/// A `0x`-prefixed hex byte string, optionally of a fixed length.
pub fn expect_hex(method: Method, reply: &Value, len: Option<usize>) -> Result<String> {
    let s = as_str(method, reply)?;
    let bytes = is_valid_hex(s, HexMode::Strict)
        .then(|| decode(s))
        .flatten()
        .ok_or_else(|| malformed(method, format!("expected hex bytes, got {s:?}")))?;

    match len {
        Some(len) if bytes.len() != len => Err(malformed(
            method,
            format!("expected {} bytes, got {}", len, bytes.len()),
        )),
        _ => Ok(s.to_string()),
    }
}
