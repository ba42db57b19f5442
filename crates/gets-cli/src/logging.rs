//! Subscriber setup for the readiness CLI.
//!
//! Library crates only emit `tracing` events. This module installs the one
//! global subscriber at startup.
//!
//! Levels used across the workspace:
//!
//! - `warn`: truncated batches and other recoverable input problems
//! - `info`: per-run summaries (rows, scores, coverage)
//! - `debug`: failing rows and mapping decisions
//! - `trace`: individual issues, with cell values only under `--log-data`

use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Stand-in logged for invoice cell values unless `--log-data` is set.
pub const REDACTED_VALUE: &str = "[REDACTED]";

const WORKSPACE_CRATES: [&str; 7] = [
    "gets_cli",
    "gets_ingest",
    "gets_map",
    "gets_model",
    "gets_score",
    "gets_standards",
    "gets_validate",
];

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` replace the level-derived filter.
    pub use_env_filter: bool,
    pub with_timestamps: bool,
    pub with_target: bool,
    /// Emit span close events (JSON format only).
    pub with_spans: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Logs go to stderr when `None`.
    pub log_file: Option<PathBuf>,
    /// Whether invoice cell values may be logged.
    pub log_data: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_spans: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            log_data: false,
        }
    }
}

/// Returns `value` when value logging is enabled, [`REDACTED_VALUE`] otherwise.
pub fn redact_value(value: &str) -> &str {
    redact(value, LOG_DATA_ENABLED.load(Ordering::Relaxed))
}

fn redact(value: &str, enabled: bool) -> &str {
    if enabled { value } else { REDACTED_VALUE }
}

/// Installs the global subscriber, writing to `log_file` or stderr.
///
/// # Errors
///
/// Fails if the log file cannot be opened or a subscriber is already set.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let writer = match &config.log_file {
        Some(path) => {
            let file: File = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::stderr),
    };
    LOG_DATA_ENABLED.store(config.log_data, Ordering::Relaxed);
    tracing_subscriber::registry()
        .with(format_layer(config, writer))
        .with(build_env_filter(config.level_filter, config.use_env_filter))
        .try_init()
        .map_err(io::Error::other)
}

fn format_layer(config: &LogConfig, writer: BoxMakeWriter) -> BoxedLayer {
    let base = fmt::layer()
        .with_writer(writer)
        .with_target(config.with_target);
    match config.format {
        LogFormat::Json => {
            let spans = if config.with_spans {
                FmtSpan::CLOSE
            } else {
                FmtSpan::NONE
            };
            base.json().with_span_events(spans).boxed()
        }
        LogFormat::Compact => {
            let layer = base.compact().with_ansi(config.with_ansi);
            if config.with_timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
        LogFormat::Pretty => {
            let layer = base.with_ansi(config.with_ansi);
            if config.with_timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
    }
}

/// `<level>` for everything plus an explicit `<crate>=<level>` per workspace
/// crate, e.g. `info,gets_cli=info,gets_ingest=info,...`.
pub fn default_directives(level_filter: LevelFilter) -> String {
    let level = level_filter.to_string().to_lowercase();
    WORKSPACE_CRATES
        .iter()
        .fold(level.clone(), |directives, krate| {
            format!("{directives},{krate}={level}")
        })
}

fn build_env_filter(level_filter: LevelFilter, use_env_filter: bool) -> EnvFilter {
    if use_env_filter && let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(default_directives(level_filter))
}
