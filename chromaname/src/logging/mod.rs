//! Logging setup for hosts embedding the classifier.
//!
//! The library itself only emits `tracing` events. Binaries call
//! [`init_logging`] once at start-up to route them to a log file (and
//! optionally stderr):
//!
//! ```text
//! tracing events ──► EnvFilter ──┬──► non-blocking file writer ──► ~/.chromaname/logs/chromaname.log
//!                                └──► stderr (console = true)
//! ```
//!
//! `RUST_LOG` overrides the configured level.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::{self, time::LocalTime};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{config_dir, LoggingSettings};

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "chromaname.log";

/// Default filter level when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// `~/.chromaname/logs`.
pub fn default_log_dir() -> PathBuf {
    config_dir().join("logs")
}

/// `~/.chromaname/logs/chromaname.log`.
pub fn default_log_file() -> PathBuf {
    default_log_dir().join(DEFAULT_LOG_FILE)
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub directory: PathBuf,
    pub file: String,
    pub level: String,
    /// Also write human-readable output to stderr.
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_log_dir(),
            file: DEFAULT_LOG_FILE.to_string(),
            level: DEFAULT_LOG_LEVEL.to_string(),
            console: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    /// Full path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.directory.join(&self.file)
    }
}

impl From<&LoggingSettings> for LoggingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            directory: settings.directory.clone(),
            file: settings.file.clone(),
            level: settings.level.clone(),
            console: false,
        }
    }
}

/// Keeps the background log writer alive. Dropping it flushes pending
/// records.
#[must_use = "logs are lost when the guard is dropped"]
pub struct LoggingGuard {
    _worker: WorkerGuard,
    path: PathBuf,
}

impl LoggingGuard {
    pub fn log_path(&self) -> &Path {
        &self.path
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if the log directory cannot be created or a global subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, LoggingError> {
    fs::create_dir_all(&config.directory).map_err(|source| LoggingError::CreateDirectory {
        path: config.directory.clone(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(&config.directory, &config.file);
    let (writer, worker) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_timer(LocalTime::new(Rfc3339));

    let console_layer = config.console.then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_timer(LocalTime::new(Rfc3339))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(LoggingGuard {
        _worker: worker,
        path: config.log_path(),
    })
}
