pub mod filter;
pub mod format;

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;

use crate::config::LoggingConfig;
use crate::error::Context;
use crate::error::Result;
use filter::DebugOnlyFilter;
use filter::ErrorWarnFilter;
use format::RecipebookFormat;

/// Keeps the file writers alive. Drop it only when the process is about to exit.
#[must_use = "dropping the guard stops file logging"]
pub struct TracingGuard {
    _guards: Vec<WorkerGuard>,
}

/// Installs the global subscriber: terminal output filtered by `RUST_LOG` (falling
/// back to `logging.level`), plus daily rolling files for debug and warn/error events
/// when a log directory is configured.
pub fn setup_tracing(app_name: &str, logging_config: &LoggingConfig) -> Result<TracingGuard> {
    let format = RecipebookFormat {
        app_name: app_name.to_string(),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(logging_config.level.as_str()));

    let terminal = tracing_subscriber::fmt::Layer::default()
        .with_ansi(cfg!(feature = "dev"))
        .with_writer(std::io::stderr)
        .event_format(format.clone())
        .with_filter(env_filter);

    let mut guards = Vec::new();
    let file_layers = match logging_config.directory.as_deref() {
        Some(directory) => {
            let base_logs_dir = Path::new(directory);
            for dir in [base_logs_dir.join("debug"), base_logs_dir.join("error")] {
                std::fs::create_dir_all(&dir)
                    .with_context(|| format!("Failed to create logs directory: {}", dir.display()))?;
            }

            let debug_appender =
                RollingFileAppender::new(Rotation::DAILY, base_logs_dir.join("debug"), format!("{app_name}.log"));
            let error_appender =
                RollingFileAppender::new(Rotation::DAILY, base_logs_dir.join("error"), format!("{app_name}.log"));

            let (non_blocking_debug, debug_guard) = tracing_appender::non_blocking(debug_appender);
            let (non_blocking_error, error_guard) = tracing_appender::non_blocking(error_appender);
            guards.push(debug_guard);
            guards.push(error_guard);

            let debug_layer = tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_debug)
                .with_filter(DebugOnlyFilter);
            let error_layer = tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_error)
                .with_filter(ErrorWarnFilter);

            Some(debug_layer.and_then(error_layer))
        },
        None => None,
    };

    tracing_subscriber::registry()
        .with(terminal)
        .with(file_layers)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!("{}_logging_started::directory::{:?}", app_name, logging_config.directory);

    Ok(TracingGuard { _guards: guards })
}
