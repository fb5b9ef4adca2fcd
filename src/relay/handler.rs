use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::decode::decode_body;
use super::error::RelayError;
use super::form::parse_form;
use super::forward::{Forwarder, HttpForwarder};
use super::types::{InboundEvent, RelayResponse};

/// Reply the downstream service sends for a rejected payment.
pub const HTTP_ERROR_SENTINEL: &str = "HTTP_ERROR";

#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutcome {
    Success(Value),
    DomainError(String),
    TransportError(String),
    ParseError(String),
}

impl RelayOutcome {
    pub fn from_result(result: Result<Value, RelayError>) -> Self {
        match result {
            Ok(Value::String(s)) if s == HTTP_ERROR_SENTINEL => RelayOutcome::DomainError(s),
            Ok(value) => RelayOutcome::Success(value),
            Err(e @ RelayError::Parse(_)) => RelayOutcome::ParseError(e.to_string()),
            Err(e) => RelayOutcome::TransportError(e.to_string()),
        }
    }

    pub fn into_response(self) -> RelayResponse {
        match self {
            RelayOutcome::Success(body) => RelayResponse::new(200, "200 OK", body),
            RelayOutcome::DomainError(body) => {
                RelayResponse::new(400, "400 ERROR", Value::String(body))
            }
            RelayOutcome::TransportError(message) | RelayOutcome::ParseError(message) => {
                RelayResponse::new(500, "500 ERROR", Value::String(message))
            }
        }
    }
}

pub struct RelayHandler<F = HttpForwarder> {
    forwarder: F,
}

impl RelayHandler<HttpForwarder> {
    pub fn new() -> Self {
        Self::with_forwarder(HttpForwarder::new())
    }
}

impl Default for RelayHandler<HttpForwarder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Forwarder> RelayHandler<F> {
    pub fn with_forwarder(forwarder: F) -> Self {
        Self { forwarder }
    }

    /// Decodes, parses and forwards the event body. Every failure is folded
    /// into the returned response.
    pub async fn handle(&self, event: &InboundEvent) -> RelayResponse {
        let decoded = decode_body(&event.body);
        if decoded.is_fallback() {
            debug!("Parsing raw body ({} bytes)", event.body.len());
        } else {
            debug!("Parsing base64 body ({} bytes)", event.body.len());
        }
        let payload = parse_form(&decoded.into_string());
        let result = self.forwarder.forward(&payload).await;

        let outcome = RelayOutcome::from_result(result);
        match &outcome {
            RelayOutcome::Success(_) => info!("Relay succeeded"),
            RelayOutcome::DomainError(_) => warn!("Downstream reported {}", HTTP_ERROR_SENTINEL),
            RelayOutcome::TransportError(message) | RelayOutcome::ParseError(message) => {
                error!("Relay failed: {}", message)
            }
        }
        outcome.into_response()
    }
}
