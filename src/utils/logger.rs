use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogWriter {
    /// Straight to stdout on the calling thread. Lambda freezes the
    /// environment between invocations, so nothing may sit in a buffer.
    Direct,
    /// Through a `tracing-appender` worker thread, for the local server.
    NonBlocking,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber; `RUST_LOG` overrides the default `info`.
///
/// With [`LogWriter::NonBlocking`] keep the returned guard alive until exit
/// or buffered lines are lost.
pub fn init(writer: LogWriter) -> Result<Option<WorkerGuard>> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_ansi(false);

    let (result, guard) = match writer {
        LogWriter::Direct => (builder.with_writer(std::io::stdout).try_init(), None),
        LogWriter::NonBlocking => {
            let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stdout());
            (builder.with_writer(non_blocking).try_init(), Some(guard))
        }
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;
    Ok(guard)
}
