use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to a file in the data directory.
///
/// Logs are written to `{data_dir}/revboard.log` through a non-blocking
/// appender; the returned guard must be held for the process lifetime or
/// buffered lines are dropped. The log level can be controlled via the
/// `level` parameter or the `RUST_LOG` environment variable.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<WorkerGuard> {
    std::fs::create_dir_all(data_dir)?;

    let appender = tracing_appender::rolling::never(data_dir, "revboard.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    // Build filter from RUST_LOG env var or use provided level
    let default_filter = format!("revboard={level},revboard_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(
        "revboard logging initialized (log_path={})",
        data_dir.join("revboard.log").display()
    );
    Ok(guard)
}
