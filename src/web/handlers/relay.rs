use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::relay::{Forwarder, InboundEvent, RelayHandler, RelayResponse};

pub fn relay_router<F: Forwarder + 'static>(handler: Arc<RelayHandler<F>>) -> Router {
    Router::new()
        .route("/invoke", post(invoke::<F>))
        .route("/form", post(form::<F>))
        .with_state(handler)
}

// Takes a full host envelope, e.g. a captured Lambda event.
async fn invoke<F: Forwarder + 'static>(
    State(handler): State<Arc<RelayHandler<F>>>,
    Json(envelope): Json<Value>,
) -> impl IntoResponse {
    dispatch(&handler, InboundEvent::from_value(&envelope)).await
}

// Takes the raw webhook body, as the payment provider would post it.
async fn form<F: Forwarder + 'static>(
    State(handler): State<Arc<RelayHandler<F>>>,
    body: Bytes,
) -> impl IntoResponse {
    let event = InboundEvent::new(String::from_utf8_lossy(&body));
    dispatch(&handler, event).await
}

async fn dispatch<F: Forwarder>(
    handler: &RelayHandler<F>,
    event: InboundEvent,
) -> (StatusCode, Json<RelayResponse>) {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("relay", %request_id);

    let response = handler.handle(&event).instrument(span).await;
    info!("{} answered {}", request_id, response.status_description);

    let status = StatusCode::from_u16(response.status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response))
}
