//! Node dialects.
//!
//! Geth and Ganache both serve the nine `personal_*` methods with the same
//! parameter lists, but differ in a couple of encodings and reply shapes.
//! Each family is a [`Backend`]; the facade picks one at construction time.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::dispatch::Method;

/// Backend-specific adjustments applied around the common method table.
pub trait Backend: Send + Sync + fmt::Debug {
    fn kind(&self) -> BackendKind;

    /// Wire form of a 32-byte raw key for `personal_importRawKey`.
    fn encode_private_key(&self, key: &[u8; 32]) -> String;

    /// Reshape a raw reply into the shape the common decoder expects.
    fn adjust_reply(&self, _method: Method, reply: Value) -> Value {
        reply
    }
}

/// Go-ethereum.
#[derive(Debug, Clone, Copy, Default)]
pub struct Geth;

impl Backend for Geth {
    fn kind(&self) -> BackendKind {
        BackendKind::Geth
    }

    fn encode_private_key(&self, key: &[u8; 32]) -> String {
        hex::encode(key)
    }

    /// `personal_signTransaction` answers `{ raw, tx }`; the envelope is `raw`.
    fn adjust_reply(&self, method: Method, reply: Value) -> Value {
        match (method, reply) {
            (Method::SignTransaction, Value::Object(mut obj)) if obj.contains_key("raw") => {
                obj.remove("raw").unwrap_or(Value::Null)
            }
            (_, reply) => reply,
        }
    }
}

/// Ganache.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ganache;

impl Backend for Ganache {
    fn kind(&self) -> BackendKind {
        BackendKind::Ganache
    }

    fn encode_private_key(&self, key: &[u8; 32]) -> String {
        format!("0x{}", hex::encode(key))
    }

    /// `personal_sendTransaction` may answer with a receipt-like object.
    fn adjust_reply(&self, method: Method, reply: Value) -> Value {
        match (method, reply) {
            (Method::SendTransaction, Value::Object(mut obj)) => obj
                .remove("transactionHash")
                .or_else(|| obj.remove("hash"))
                .unwrap_or(Value::Object(obj)),
            (_, reply) => reply,
        }
    }
}

/// Node family, as named in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    #[default]
    Geth,
    Ganache,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Geth => "geth",
            BackendKind::Ganache => "ganache",
        }
    }

    pub fn into_backend(self) -> Box<dyn Backend> {
        match self {
            BackendKind::Geth => Box::new(Geth),
            BackendKind::Ganache => Box::new(Ganache),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "geth" => Ok(BackendKind::Geth),
            "ganache" => Ok(BackendKind::Ganache),
            other => Err(format!("unknown backend: {other} (expected geth or ganache)")),
        }
    }
}
