//! Application start-up.

use std::sync::Arc;

use tracing::{info, warn};

use super::config::AppConfig;
use super::error::AppError;
use crate::classifier::ColorClassifier;
use crate::palette::Palette;

/// A configured classifier plus the settings it was built from.
pub struct ColorNameApp {
    classifier: Arc<ColorClassifier>,
    config: AppConfig,
    palette_error: Option<String>,
}

impl ColorNameApp {
    /// Load the palette and build the classifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::PaletteLoad`] if the palette cannot be loaded.
    pub fn start(config: AppConfig) -> Result<Self, AppError> {
        let palette = config.palette.load()?;
        Ok(Self::assemble(config, palette, None))
    }

    /// Like [`ColorNameApp::start`], but a palette failure leaves the app
    /// running with an empty palette, so every classification yields no name.
    pub fn start_degraded(config: AppConfig) -> Self {
        match config.palette.load() {
            Ok(palette) => Self::assemble(config, palette, None),
            Err(e) => {
                warn!(error = %e, "Palette unavailable, color naming disabled");
                Self::assemble(config, Palette::empty(), Some(e.to_string()))
            }
        }
    }

    fn assemble(config: AppConfig, palette: Palette, palette_error: Option<String>) -> Self {
        info!(
            colors = palette.len(),
            radius = config.sampler.radius,
            tolerance = config.sampler.tolerance,
            brightness = config.sampler.brightness,
            "Classifier ready"
        );
        let classifier = Arc::new(ColorClassifier::with_config(palette, config.sampler));
        Self {
            classifier,
            config,
            palette_error,
        }
    }

    /// Shared classifier handle for producer and reader threads.
    pub fn classifier(&self) -> Arc<ColorClassifier> {
        Arc::clone(&self.classifier)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Why the palette failed to load, when started degraded.
    pub fn palette_error(&self) -> Option<&str> {
        self.palette_error.as_deref()
    }

    pub fn is_degraded(&self) -> bool {
        self.palette_error.is_some()
    }
}
