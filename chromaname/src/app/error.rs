//! Application error types.

use std::fmt;

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::palette::PaletteError;

/// Errors that can occur while starting the application.
#[derive(Debug)]
pub enum AppError {
    /// The configured palette could not be loaded.
    PaletteLoad(PaletteError),

    /// The configuration file could not be read.
    Config(ConfigError),

    /// Logging could not be initialized.
    Logging(LoggingError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::PaletteLoad(e) => write!(f, "Failed to load palette: {}", e),
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Logging(e) => write!(f, "Logging error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::PaletteLoad(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Logging(e) => Some(e),
        }
    }
}

impl From<PaletteError> for AppError {
    fn from(e: PaletteError) -> Self {
        AppError::PaletteLoad(e)
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<LoggingError> for AppError {
    fn from(e: LoggingError) -> Self {
        AppError::Logging(e)
    }
}
