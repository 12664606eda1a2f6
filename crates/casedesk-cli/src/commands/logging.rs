//! Tracing setup for the binary.
//!
//! Everything at or above the configured level goes to a daily rolling file
//! under the log directory; warnings and errors are echoed to stderr. Without
//! a log directory only the stderr layer is installed.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_FILE_PREFIX: &str = "casedesk.log";

fn stderr_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(LevelFilter::WARN)
}

/// `RUST_LOG` wins over the configured level.
fn file_filter(default_level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .with_context(|| format!("Invalid log level '{}'", default_level))
}

/// Installs the global subscriber. Keep the returned guard alive until exit
/// or buffered file output is lost.
pub fn init(log_dir: Option<&Path>, default_level: &str) -> Result<Option<WorkerGuard>> {
    let Some(log_dir) = log_dir else {
        tracing_subscriber::registry()
            .with(stderr_layer())
            .try_init()
            .context("Failed to install tracing subscriber")?;
        return Ok(None);
    };

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_filter(file_filter(default_level)?);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer())
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(Some(guard))
}
