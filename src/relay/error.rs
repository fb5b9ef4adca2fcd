use thiserror::Error;

/// Failures of the outbound call. The `Display` text becomes the 500 body.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid JSON response: {0}")]
    Parse(String),
    #[error("failed to serialize payload: {0}")]
    Serialize(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::Transport(describe(&error))
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        RelayError::Parse(error.to_string())
    }
}

// reqwest's top level message hides the cause (e.g. "error sending request"),
// so walk the source chain.
fn describe(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    if message.trim().is_empty() {
        message = "outbound request failed".to_string();
    }
    message
}
