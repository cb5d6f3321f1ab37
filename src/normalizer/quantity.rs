use alloy_primitives::U256;

use crate::codec::hex::strip_prefix;
use crate::error::{Error, Result};

/// A caller supplied numeric value, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantity {
    /// Native unsigned integer.
    Unsigned(U256),
    /// Native signed integer. Only non-negative values normalize.
    Signed(i128),
    /// Decimal numeral or `0x` hex string.
    Text(String),
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Quantity {
            fn from(v: $t) -> Self {
                Quantity::Unsigned(U256::from(v))
            }
        })*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Quantity {
            fn from(v: $t) -> Self {
                Quantity::Signed(i128::from(v))
            }
        })*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128);

impl From<U256> for Quantity {
    fn from(v: U256) -> Self {
        Quantity::Unsigned(v)
    }
}

impl From<&str> for Quantity {
    fn from(v: &str) -> Self {
        Quantity::Text(v.to_string())
    }
}

impl From<String> for Quantity {
    fn from(v: String) -> Self {
        Quantity::Text(v)
    }
}

impl Quantity {
    /// Resolve to an unsigned 256-bit value.
    pub fn to_u256(&self) -> Result<U256> {
        match self {
            Quantity::Unsigned(v) => Ok(*v),
            Quantity::Signed(v) => u128::try_from(*v)
                .map(U256::from)
                .map_err(|_| Error::InvalidQuantity(v.to_string())),
            Quantity::Text(s) => parse_text(s),
        }
    }
}

fn parse_text(s: &str) -> Result<U256> {
    let invalid = || Error::InvalidQuantity(s.to_string());

    let (digits, radix) = match strip_prefix(s) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    let well_formed = !digits.is_empty()
        && digits.bytes().all(|b| match radix {
            16 => b.is_ascii_hexdigit(),
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    U256::from_str_radix(digits, radix).map_err(|_| invalid())
}

/// Minimal `0x`-prefixed hex for any non-negative quantity; zero is `0x0`.
pub fn to_hex_quantity(value: impl Into<Quantity>) -> Result<String> {
    let v = value.into().to_u256()?;
    Ok(encode_u256(v))
}

fn encode_u256(v: U256) -> String {
    if v.is_zero() {
        "0x0".to_string()
    } else {
        format!("0x{:x}", v)
    }
}

/// Decode a `0x`-prefixed hex quantity from a node reply.
pub fn from_hex_quantity(s: &str) -> Result<U256> {
    match strip_prefix(s) {
        Some(_) => parse_text(s),
        None => Err(Error::InvalidQuantity(s.to_string())),
    }
}
