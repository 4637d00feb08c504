//! Addressable configuration settings.
//!
//! Every setting is reachable as `section.key`, which is what the
//! `config get` / `config set` commands accept.

use std::fmt;
use std::str::FromStr;

use super::{expand_tilde, ConfigError, ConfigFile};

/// Log levels accepted by `logging.level`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// One configuration setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    PalettePath,
    SamplerRadius,
    SamplerTolerance,
    SamplerBrightness,
    LoggingDirectory,
    LoggingFile,
    LoggingLevel,
}

impl ConfigKey {
    /// All keys, grouped by section in file order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::PalettePath,
            ConfigKey::SamplerRadius,
            ConfigKey::SamplerTolerance,
            ConfigKey::SamplerBrightness,
            ConfigKey::LoggingDirectory,
            ConfigKey::LoggingFile,
            ConfigKey::LoggingLevel,
        ]
    }

    /// Full `section.key` name.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::PalettePath => "palette.path",
            ConfigKey::SamplerRadius => "sampler.radius",
            ConfigKey::SamplerTolerance => "sampler.tolerance",
            ConfigKey::SamplerBrightness => "sampler.brightness",
            ConfigKey::LoggingDirectory => "logging.directory",
            ConfigKey::LoggingFile => "logging.file",
            ConfigKey::LoggingLevel => "logging.level",
        }
    }

    /// INI section name.
    pub fn section(&self) -> &'static str {
        self.split().0
    }

    /// Key name within the section.
    pub fn key_name(&self) -> &'static str {
        self.split().1
    }

    fn split(&self) -> (&'static str, &'static str) {
        let name = self.name();
        name.split_once('.').unwrap_or((name, ""))
    }

    /// Current value as it would be written to the file. Unset values are
    /// empty strings.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::PalettePath => config
                .palette
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            ConfigKey::SamplerRadius => config.sampler.radius.to_string(),
            ConfigKey::SamplerTolerance => config.sampler.tolerance.to_string(),
            ConfigKey::SamplerBrightness => config.sampler.brightness.to_string(),
            ConfigKey::LoggingDirectory => config.logging.directory.display().to_string(),
            ConfigKey::LoggingFile => config.logging.file.clone(),
            ConfigKey::LoggingLevel => config.logging.level.clone(),
        }
    }

    /// Validate `value` and store it in `config`.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match self {
            ConfigKey::PalettePath => {
                config.palette.path = (!value.is_empty()).then(|| expand_tilde(value));
            }
            ConfigKey::SamplerRadius => {
                let radius: u32 = self.parse(value, "must be a positive integer")?;
                if radius == 0 {
                    return Err(self.invalid(value, "must be a positive integer"));
                }
                config.sampler.radius = radius;
            }
            ConfigKey::SamplerTolerance => {
                config.sampler.tolerance = self.parse(value, "must be 0-255")?;
            }
            ConfigKey::SamplerBrightness => {
                config.sampler.brightness = self.parse(value, "must be 0-255")?;
            }
            ConfigKey::LoggingDirectory => {
                if value.is_empty() {
                    return Err(self.invalid(value, "must not be empty"));
                }
                config.logging.directory = expand_tilde(value);
            }
            ConfigKey::LoggingFile => {
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(self.invalid(value, "must be a plain file name"));
                }
                config.logging.file = value.to_string();
            }
            ConfigKey::LoggingLevel => {
                let level = value.to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(self.invalid(value, "expected trace, debug, info, warn or error"));
                }
                config.logging.level = level;
            }
        }
        Ok(())
    }

    fn parse<T: FromStr>(&self, value: &str, reason: &str) -> Result<T, ConfigError> {
        value.parse().map_err(|_| self.invalid(value, reason))
    }

    fn invalid(&self, value: &str, reason: &str) -> ConfigError {
        ConfigError::InvalidValue {
            key: self.name().to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}
