//! Helpers shared across CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use chromaname::config::ConfigFile;
use chromaname::frame::{expected_len, Frame};
use chromaname::orientation::Orientation;
use chromaname::palette::Palette;

use crate::error::CliError;

/// Palette to use: `--palette` first, then `palette.path` from the config
/// file, then the bundled palette.
pub fn resolve_palette_path(cli_palette: Option<PathBuf>, config: &ConfigFile) -> Option<PathBuf> {
    cli_palette.or_else(|| config.palette.path.clone())
}

/// Load the palette selected by [`resolve_palette_path`].
pub fn load_palette(
    cli_palette: Option<PathBuf>,
    config: &ConfigFile,
) -> Result<Palette, CliError> {
    let palette = match resolve_palette_path(cli_palette, config) {
        Some(path) => Palette::load(&path)?,
        None => Palette::builtin()?,
    };
    Ok(palette)
}

/// Read a raw NV21 frame, checking its size before decoding.
pub fn read_frame(path: &Path, width: u32, height: u32) -> Result<Frame, CliError> {
    let expected = expected_len(width, height)?;
    let data = fs::read(path).map_err(|e| CliError::io(path, e))?;
    if data.len() != expected {
        return Err(CliError::InvalidArgument(format!(
            "{} holds {} bytes, a {}x{} NV21 frame needs {}",
            path.display(),
            data.len(),
            width,
            height,
            expected
        )));
    }
    Ok(Frame::new(data, width, height)?)
}

/// Parse `--rotation`, accepting only the four right angles.
pub fn parse_rotation(degrees: u32) -> Result<Orientation, CliError> {
    Orientation::try_from_degrees(degrees).map_err(|e| CliError::InvalidArgument(e.to_string()))
}
