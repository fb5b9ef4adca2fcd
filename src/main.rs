use anyhow::Result;
use form_relay::relay::lambda::invoke;
use form_relay::relay::RelayHandler;
use form_relay::utils::logger::{self, LogWriter};
use form_relay::{ENDPOINT_URL, FUNCTION_NAME, GIT_HASH};
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志系统
    logger::init(LogWriter::Direct)?;

    info!("Loading function: {} ({})", FUNCTION_NAME, GIT_HASH);
    info!("Relaying to {}", ENDPOINT_URL.as_str());

    let handler = RelayHandler::new();
    let handler = &handler;

    // 每次调用都会返回一个响应, 不会向宿主返回错误
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        invoke(handler, event).await
    }))
    .await
    .map_err(|e| anyhow::anyhow!("Lambda runtime error: {}", e))?;

    Ok(())
}
