pub mod address;
pub mod hex;

pub use address::{to_checksum_address, Address, ADDRESS_BYTES};
pub use hex::{is_valid_hex, HexMode};
