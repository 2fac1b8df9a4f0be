//! CLI logging setup
//!
//! Per-phase filtering on top of `tracing-subscriber`. Logs go to stderr so
//! stdout carries only the program result.

use crate::config::LogConfig;
use slate_config::Phase;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Colored multi-line output
    Pretty,
    /// One line per event
    Compact,
    /// JSON lines for tooling
    Json,
}

/// Install the global subscriber, optionally mirroring every event to a file
pub fn init_with_file(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<&Path>,
) -> Result<(), String> {
    let targets = Phase::ALL.iter().fold(
        Targets::new().with_default(log_config.global()),
        |targets, phase| targets.with_target(phase.target(), log_config.level_for(*phase)),
    );

    let file_layer = match file {
        Some(path) => {
            let handle = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("Cannot open log file '{}': {}", path.display(), e))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(handle))
                    .with_filter(targets.clone()),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(create_format_layer(format, io::stderr).with_filter(targets))
        .with(file_layer)
        .try_init()
        .map_err(|e| format!("Cannot initialize logging: {e}"))
}

/// Console layer for the chosen format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> impl Layer<tracing_subscriber::Registry>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}
