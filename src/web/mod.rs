use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub mod handlers;

use crate::relay::{Forwarder, RelayHandler};

/// Serves the relay handler over plain HTTP for local runs.
pub async fn start_server<F: Forwarder + 'static>(
    handler: Arc<RelayHandler<F>>,
    addr: SocketAddr,
) -> anyhow::Result<()> {
    let app = handlers::router(handler);

    info!("Starting server on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
