//! Typed client for the `personal_*` JSON-RPC namespace
//!
//! Ethereum nodes with a keystore (geth, ganache) expose account
//! administration over JSON-RPC: creating, importing, unlocking and
//! locking accounts, signing messages and transactions with a keystore
//! key, and sending transactions authorized by a passphrase. This crate
//! maps those nine calls onto strongly typed Rust methods.
//!
//! # Architecture
//!
//! ```text
//! caller
//!     |
//!     | Personal::sign_transaction(tx, passphrase)
//!     v
//! normalizer (quantities -> 0x hex)  +  codec (address validation)
//!     |
//!     | dispatch: Call -> personal_* method + positional params
//!     v
//! Transport (HttpTransport or any other JSON-RPC round trip)
//!     |
//!     | raw result / error object
//!     v
//! mapper (backend dialect + shape checks)  ->  codec (checksum)  ->  caller
//! ```
//!
//! # Modules
//!
//! - `codec` - Hex validation and checksum addresses
//! - `normalizer` - Quantity and transaction normalization
//! - `dispatch` - Method table, JSON-RPC wire types and the transport seam
//! - `mapper` - Reply validation and backend dialects
//! - `personal` - The caller-facing client
//! - `config` - Environment configuration

pub mod codec;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod mapper;
pub mod normalizer;
pub mod personal;

pub use codec::{is_valid_hex, to_checksum_address, Address, HexMode};
pub use dispatch::{HttpTransport, Method, Transport};
pub use error::{Error, Result, TransportError};
pub use mapper::BackendKind;
pub use normalizer::{to_hex_quantity, Quantity, UnsignedTransaction};
pub use personal::Personal;
