use axum::Router;
use std::sync::Arc;

use crate::relay::{Forwarder, RelayHandler};

pub mod relay;

pub fn router<F: Forwarder + 'static>(handler: Arc<RelayHandler<F>>) -> Router {
    Router::new().merge(relay::relay_router(handler))
}
