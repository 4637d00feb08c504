//! Error types for palette loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a palette asset.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// The asset file could not be read.
    #[error("Failed to read palette {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The asset is not valid JSON.
    #[error("Invalid palette JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value is not an object.
    #[error("Palette must be a JSON object of name → \"RRGGBB\"")]
    NotAnObject,

    /// An entry's value is not a 6-digit hex string.
    #[error("Invalid color for '{name}': {value} ({reason})")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },
}

impl PaletteError {
    pub(crate) fn invalid_value(
        name: &str,
        value: &serde_json::Value,
        reason: impl ToString,
    ) -> Self {
        PaletteError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
