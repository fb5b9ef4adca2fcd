use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::error::RelayError;
use super::types::ParsedPayload;
use crate::utils::http::post_json;
use crate::ENDPOINT_URL;

/// Sends a parsed payload downstream and returns the decoded JSON reply.
#[async_trait]
pub trait Forwarder: Send + Sync {
    async fn forward(&self, payload: &ParsedPayload) -> Result<Value, RelayError>;
}

/// POSTs the payload as JSON to a single endpoint.
#[derive(Debug, Clone)]
pub struct HttpForwarder {
    endpoint: String,
}

impl HttpForwarder {
    pub fn new() -> Self {
        Self::with_endpoint(ENDPOINT_URL.as_str())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpForwarder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Forwarder for HttpForwarder {
    async fn forward(&self, payload: &ParsedPayload) -> Result<Value, RelayError> {
        let body = serde_json::to_vec(payload)
            .map_err(|e| RelayError::Serialize(e.to_string()))?;

        debug!("Forwarding {} fields to {}", payload.len(), self.endpoint);
        // the downstream status is not part of the contract, only the body is
        let text = post_json(&self.endpoint, body).await?;

        Ok(serde_json::from_str(&text)?)
    }
}
