use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{info_span, Instrument};

use super::forward::Forwarder;
use super::handler::RelayHandler;
use super::types::{InboundEvent, RelayResponse};

/// Lambda service function. Always answers `Ok`, the host never sees an error.
pub async fn invoke<F: Forwarder>(
    handler: &RelayHandler<F>,
    event: LambdaEvent<Value>,
) -> Result<RelayResponse, Error> {
    let span = info_span!("relay", request_id = %event.context.request_id);
    let inbound = InboundEvent::from_value(&event.payload);
    Ok(handler.handle(&inbound).instrument(span).await)
}
