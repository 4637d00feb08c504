//! Application configuration for [`super::ColorNameApp`].

use std::path::PathBuf;

use crate::config::ConfigFile;
use crate::logging::{init_logging, LoggingConfig, LoggingGuard};
use crate::palette::{Palette, PaletteError};
use crate::sampler::SamplerConfig;

use super::AppError;

/// Where the palette comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PaletteSource {
    /// The palette bundled with the library.
    #[default]
    Builtin,
    /// A JSON palette file.
    File(PathBuf),
}

impl PaletteSource {
    pub fn load(&self) -> Result<Palette, PaletteError> {
        match self {
            PaletteSource::Builtin => Palette::builtin(),
            PaletteSource::File(path) => Palette::load(path),
        }
    }
}

/// Everything needed to start a [`super::ColorNameApp`].
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub palette: PaletteSource,
    pub sampler: SamplerConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Build from the user configuration file.
    pub fn from_config_file(config: &ConfigFile) -> Self {
        Self {
            palette: config
                .palette
                .path
                .clone()
                .map_or(PaletteSource::Builtin, PaletteSource::File),
            sampler: config.sampler,
            logging: LoggingConfig::from(&config.logging),
        }
    }

    /// Load `~/.chromaname/config.ini` (defaults when absent).
    pub fn load() -> Result<Self, AppError> {
        Ok(Self::from_config_file(&ConfigFile::load()?))
    }

    /// Use a palette file instead of the configured source.
    pub fn with_palette_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.palette = PaletteSource::File(path.into());
        self
    }

    pub fn with_sampler(mut self, sampler: SamplerConfig) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Install the global log subscriber described by `self.logging`.
    pub fn init_logging(&self) -> Result<LoggingGuard, AppError> {
        Ok(init_logging(&self.logging)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigKey;

    #[test]
    fn test_from_default_config_file() {
        let config = AppConfig::from_config_file(&ConfigFile::default());
        assert_eq!(config.palette, PaletteSource::Builtin);
        assert_eq!(config.sampler, SamplerConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_config_file_values() {
        let mut file = ConfigFile::default();
        ConfigKey::PalettePath.set(&mut file, "/data/colors.json").unwrap();
        ConfigKey::SamplerRadius.set(&mut file, "8").unwrap();
        ConfigKey::LoggingLevel.set(&mut file, "trace").unwrap();

        let config = AppConfig::from_config_file(&file);
        assert_eq!(
            config.palette,
            PaletteSource::File(PathBuf::from("/data/colors.json"))
        );
        assert_eq!(config.sampler.radius, 8);
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_builders() {
        let config = AppConfig::default()
            .with_palette_file("/tmp/p.json")
            .with_sampler(SamplerConfig::default().with_tolerance(5))
            .with_logging(LoggingConfig::default().with_console(true));

        assert_eq!(config.palette, PaletteSource::File(PathBuf::from("/tmp/p.json")));
        assert_eq!(config.sampler.tolerance, 5);
        assert!(config.logging.console);
    }

    #[test]
    fn test_palette_source_load() {
        assert!(PaletteSource::Builtin.load().is_ok());
        assert!(matches!(
            PaletteSource::File(PathBuf::from("/nonexistent.json")).load(),
            Err(PaletteError::Io { .. })
        ));
    }
}
