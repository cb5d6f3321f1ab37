pub mod backend;
pub mod reply;

pub use backend::{Backend, BackendKind, Ganache, Geth};
pub use reply::{HASH_BYTES, SIGNATURE_BYTES};
