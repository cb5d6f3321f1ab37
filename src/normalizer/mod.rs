pub mod quantity;
pub mod transaction;

pub use quantity::{from_hex_quantity, to_hex_quantity, Quantity};
pub use transaction::{normalize_transaction, NormalizedTransaction, UnsignedTransaction};
