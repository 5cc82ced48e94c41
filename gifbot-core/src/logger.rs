//! Tracing initialization: fmt layer with full format (level, target, span
//! fields) written to stdout and, when a path is given, tee'd into an
//! append-mode log file.

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Initializes the global tracing subscriber.
///
/// Reads the level filter from `RUST_LOG` (default `info`). Load `.env`
/// (e.g. `dotenvy::dotenv()`) before calling this or `RUST_LOG` from the file
/// will not be picked up. When `log_file_path` is `Some`, the same output is
/// also appended to that file.
pub fn init_tracing(log_file_path: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = {
        use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
        let writer = match log_file_path {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                BoxMakeWriter::new(io::stdout.and(Arc::new(file)))
            }
            None => BoxMakeWriter::new(io::stdout),
        };
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_level(true)
    };

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
