use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use super::types::{JsonRpcRequest, JsonRpcResponse};
use crate::config::Config;
use crate::error::{Result, TransportError};

/// One JSON-RPC 2.0 round trip.
///
/// Implementations return the `result` member, fail with [`crate::Error::Rpc`]
/// when the node sent an `error` member, and with [`crate::Error::Transport`]
/// for anything else. Retries and timeouts are the implementation's business.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value>;
}

/// JSON-RPC over HTTP POST.
pub struct HttpTransport {
    http_client: Client,
    rpc_url: String,
    next_id: AtomicU64,
}

impl HttpTransport {
    /// Create a transport for `rpc_url` with reqwest defaults.
    pub fn new(rpc_url: &str) -> Self {
        Self::with_client(Client::new(), rpc_url)
    }

    /// Create a transport around an already configured reqwest client.
    pub fn with_client(http_client: Client, rpc_url: &str) -> Self {
        Self {
            http_client,
            rpc_url: rpc_url.to_string(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a transport from configuration, applying the request timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(TransportError::Http)?;
        Ok(Self::with_client(http_client, &config.rpc_url))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(id, method, &params);
        debug!("Sending JSON-RPC request: id={}, method={}", id, method);

        let response = self
            .http_client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(TransportError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("JSON-RPC endpoint returned HTTP {}: {}", status, body);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let body = response.bytes().await.map_err(TransportError::Http)?;
        let rpc_response: JsonRpcResponse = serde_json::from_slice(&body)
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        if let Some(err) = &rpc_response.error {
            debug!(
                "JSON-RPC error: method={}, code={}, message={}",
                method, err.code, err.message
            );
        }

        rpc_response.into_result()
    }
}
