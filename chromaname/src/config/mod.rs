//! User configuration stored in `~/.chromaname/config.ini`.
//!
//! ```ini
//! [palette]
//! path =
//!
//! [sampler]
//! radius = 20
//! tolerance = 50
//! brightness = 60
//!
//! [logging]
//! directory = ~/.chromaname/logs
//! file = chromaname.log
//! level = info
//! ```
//!
//! An empty `palette.path` selects the bundled palette. Missing keys keep
//! their defaults.

mod error;
mod file;
mod keys;

pub use error::ConfigError;
pub use file::{ConfigFile, LoggingSettings, PaletteSettings};
pub use keys::ConfigKey;

use std::path::{Path, PathBuf};

/// Name of the per-user configuration directory under `$HOME`.
pub const CONFIG_DIR_NAME: &str = ".chromaname";

/// Configuration file name inside [`config_dir`].
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// `~/.chromaname`, or `./.chromaname` when no home directory is known.
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Path of the user configuration file.
pub fn config_file_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix('~'), dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) if rest.starts_with('/') => {
            home.join(rest.trim_start_matches('/'))
        }
        _ => Path::new(path).to_path_buf(),
    }
}
