//! Application bootstrap for hosts.
//!
//! Turns the user configuration into a ready [`ColorClassifier`]:
//!
//! ```text
//! ConfigFile ──► AppConfig ──► ColorNameApp::start ──► Arc<ColorClassifier>
//!   (ini)         palette source      loads palette
//!                 sampler settings    wires sampler config
//!                 logging settings
//! ```
//!
//! [`ColorClassifier`]: crate::classifier::ColorClassifier
//!
//! # Example
//!
//! ```
//! use chromaname::app::{AppConfig, ColorNameApp};
//!
//! let app = ColorNameApp::start(AppConfig::default())?;
//! assert!(!app.classifier().palette().is_empty());
//! # Ok::<(), chromaname::app::AppError>(())
//! ```

mod bootstrap;
mod config;
mod error;

pub use bootstrap::ColorNameApp;
pub use config::{AppConfig, PaletteSource};
pub use error::AppError;
