//! Classify command - name the color at a point of a raw NV21 frame.

use std::path::PathBuf;

use chromaname::app::{AppConfig, ColorNameApp};
use chromaname::config::ConfigFile;
use clap::Args;
use console::style;

use super::common::{parse_rotation, read_frame, resolve_palette_path};
use crate::error::CliError;

/// Arguments for the classify command.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Raw NV21 frame file
    #[arg(long)]
    pub frame: PathBuf,

    /// Frame width in pixels
    #[arg(long)]
    pub width: u32,

    /// Frame height in pixels
    #[arg(long)]
    pub height: u32,

    /// Touch point x in display coordinates
    #[arg(long)]
    pub x: u32,

    /// Touch point y in display coordinates
    #[arg(long)]
    pub y: u32,

    /// Display rotation in degrees (0, 90, 180 or 270); unset uses the
    /// landscape mapping
    #[arg(long)]
    pub rotation: Option<u32>,

    /// Palette JSON file (overrides palette.path)
    #[arg(long)]
    pub palette: Option<PathBuf>,

    /// Print the full point report and counters
    #[arg(long, short)]
    pub verbose: bool,
}

/// Run the classify command.
pub fn run(args: ClassifyArgs) -> Result<(), CliError> {
    let file = ConfigFile::load().unwrap_or_default();
    let mut config = AppConfig::from_config_file(&file);
    if let Some(path) = resolve_palette_path(args.palette, &file) {
        config = config.with_palette_file(path);
    }

    let orientation = args.rotation.map(parse_rotation).transpose()?;
    let frame = read_frame(&args.frame, args.width, args.height)?;

    let app = ColorNameApp::start_degraded(config);
    if let Some(reason) = app.palette_error() {
        eprintln!("{} {}", style("Warning:").yellow().bold(), reason);
        eprintln!("Continuing without a palette; no color can be named.");
    }

    let classifier = app.classifier();
    if let Some(orientation) = orientation {
        classifier.set_orientation(orientation);
    }
    classifier.decode_frame(frame.data(), frame.width(), frame.height())?;

    let Some(report) = classifier.inspect_point(args.x, args.y) else {
        println!("no match");
        return Ok(());
    };

    match &report.name {
        Some(name) => println!("{}", style(name).bold()),
        None => println!("no match"),
    }

    if args.verbose {
        println!();
        println!("{}", report);
        println!("{}", classifier.metrics().snapshot());
    }

    Ok(())
}
