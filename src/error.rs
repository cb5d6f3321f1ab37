//! Error types for the personal namespace client.

use thiserror::Error;

use crate::dispatch::Method;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the transport collaborator. Passed through unchanged.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The node answered with a non-success HTTP status.
    #[error("http status {status}: {body}")]
    Status { status: u16, body: String },

    /// The reply was not a JSON-RPC 2.0 response object.
    #[error("undecodable response: {0}")]
    Decode(String),

    /// Any other transport-specific failure.
    #[error("{0}")]
    Other(String),
}

/// Errors returned by every personal namespace operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller supplied something that is not a 20-byte hex address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The caller supplied a negative or non-numeric quantity.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// The caller supplied a malformed hex value.
    #[error("invalid hex for {field}: {value}")]
    InvalidHex { field: &'static str, value: String },

    /// The raw key is not 32 bytes of hex. The key itself is not echoed.
    #[error("invalid private key: expected 32 bytes of hex")]
    InvalidPrivateKey,

    /// The transport collaborator failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The node returned a JSON-RPC error object.
    #[error("rpc error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    /// The node's success payload did not have the shape expected for the method.
    #[error("malformed response to {method}: {reason}")]
    MalformedResponse { method: Method, reason: String },
}

impl Error {
    pub(crate) fn malformed(method: Method, reason: impl Into<String>) -> Self {
        Error::MalformedResponse {
            method,
            reason: reason.into(),
        }
    }

    /// Whether this error was raised before anything was sent to the node.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidAddress(_)
                | Error::InvalidQuantity(_)
                | Error::InvalidHex { .. }
                | Error::InvalidPrivateKey
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_error_display() {
        let err = Error::Rpc {
            code: -32000,
            message: "could not decrypt key with given password".to_string(),
            data: None,
        };
        assert_eq!(
            err.to_string(),
            "rpc error -32000: could not decrypt key with given password"
        );
        assert!(!err.is_validation());
    }

    #[test]
    fn test_private_key_error_hides_key() {
        let err = Error::InvalidPrivateKey;
        assert!(err.is_validation());
        assert!(!err.to_string().contains("0x"));
    }

    #[test]
    fn test_transport_error_is_transparent() {
        let err: Error = TransportError::Other("connection reset".to_string()).into();
        assert_eq!(err.to_string(), "connection reset");
    }
}
