//! Palette CLI commands.

use std::path::PathBuf;

use chromaname::color::Rgb;
use chromaname::config::ConfigFile;
use clap::Subcommand;

use super::common::load_palette;
use crate::error::CliError;

/// Palette subcommands.
#[derive(Debug, Subcommand)]
pub enum PaletteCommands {
    /// List the palette's colors in match order
    List {
        /// Palette JSON file (overrides palette.path)
        #[arg(long)]
        palette: Option<PathBuf>,
    },

    /// Find the palette color nearest to a hex color
    Match {
        /// Color as RRGGBB or #RRGGBB
        color: String,

        /// Palette JSON file (overrides palette.path)
        #[arg(long)]
        palette: Option<PathBuf>,
    },
}

/// Run a palette subcommand.
pub fn run(command: PaletteCommands) -> Result<(), CliError> {
    let config = ConfigFile::load().unwrap_or_default();
    match command {
        PaletteCommands::List { palette } => run_list(palette, &config),
        PaletteCommands::Match { color, palette } => run_match(&color, palette, &config),
    }
}

fn run_list(palette: Option<PathBuf>, config: &ConfigFile) -> Result<(), CliError> {
    let palette = load_palette(palette, config)?;
    if palette.is_empty() {
        println!("(palette is empty)");
        return Ok(());
    }

    let width = palette.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in palette.iter() {
        println!("{:<width$}  {}", entry.name, entry.color, width = width);
    }
    Ok(())
}

fn run_match(color: &str, palette: Option<PathBuf>, config: &ConfigFile) -> Result<(), CliError> {
    let query: Rgb = color
        .parse()
        .map_err(|e| CliError::InvalidArgument(format!("'{}': {}", color, e)))?;
    let palette = load_palette(palette, config)?;

    match palette.closest_match(query) {
        Some(found) => println!(
            "{} ({}), distance {}",
            found.name, found.color, found.distance
        ),
        None => println!("no match"),
    }
    Ok(())
}
