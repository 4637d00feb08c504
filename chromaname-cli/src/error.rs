//! CLI error type.

use std::fmt;
use std::io;
use std::path::PathBuf;

use chromaname::config::ConfigError;
use chromaname::frame::FrameError;
use chromaname::logging::LoggingError;
use chromaname::palette::PaletteError;

/// Errors reported by CLI commands. `main` prints them and exits with
/// status 1.
#[derive(Debug)]
pub enum CliError {
    /// Configuration problem (unknown key, invalid value, unreadable file).
    Config(String),

    /// A file could not be read or written.
    Io { path: PathBuf, source: io::Error },

    /// The frame could not be decoded.
    Frame(FrameError),

    /// The palette could not be loaded.
    Palette(PaletteError),

    /// The decoded image could not be written.
    Image(image::ImageError),

    /// Logging could not be set up.
    Logging(LoggingError),

    /// A command-line argument has an invalid value.
    InvalidArgument(String),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            CliError::Frame(e) => write!(f, "Failed to decode frame: {}", e),
            CliError::Palette(e) => write!(f, "{}", e),
            CliError::Image(e) => write!(f, "Failed to write image: {}", e),
            CliError::Logging(e) => write!(f, "{}", e),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io { source, .. } => Some(source),
            CliError::Frame(e) => Some(e),
            CliError::Palette(e) => Some(e),
            CliError::Image(e) => Some(e),
            CliError::Logging(e) => Some(e),
            CliError::Config(_) | CliError::InvalidArgument(_) => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<FrameError> for CliError {
    fn from(e: FrameError) -> Self {
        CliError::Frame(e)
    }
}

impl From<PaletteError> for CliError {
    fn from(e: PaletteError) -> Self {
        CliError::Palette(e)
    }
}

impl From<image::ImageError> for CliError {
    fn from(e: image::ImageError) -> Self {
        CliError::Image(e)
    }
}

impl From<LoggingError> for CliError {
    fn from(e: LoggingError) -> Self {
        CliError::Logging(e)
    }
}
