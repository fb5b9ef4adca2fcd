use anyhow::Result;
use form_relay::relay::RelayHandler;
use form_relay::utils::logger::{self, LogWriter};
use form_relay::{ENDPOINT_URL, FUNCTION_NAME, GIT_HASH};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = logger::init(LogWriter::NonBlocking)?;

    info!("Loading function: {} ({}, local)", FUNCTION_NAME, GIT_HASH);
    info!("Relaying to {}", ENDPOINT_URL.as_str());

    let handler = Arc::new(RelayHandler::new());

    // 配置服务器地址
    let addr = SocketAddr::from(([127, 0, 0, 1], 7200));
    info!("Starting HTTP server at http://{}", addr);

    match form_relay::web::start_server(handler, addr).await {
        Ok(_) => info!("Server stopped gracefully"),
        Err(e) => {
            tracing::error!("Server error: {}", e);
            return Err(e);
        }
    }

    Ok(())
}
