//! Operation -> JSON-RPC method mapping and the transport seam.

pub mod method;
pub mod transport;
pub mod types;

pub use method::{Call, Method};
pub use transport::{HttpTransport, Transport};
pub use types::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, TransactionRequest};

use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Submit `call` as exactly one request and return the raw `result`.
pub async fn dispatch<T: Transport + ?Sized>(transport: &T, call: &Call<'_>) -> Result<Value> {
    let method = call.method();
    let params = call.params();
    debug!("dispatch {} ({} params)", method, params.len());
    transport.request(method.as_str(), params).await
}
