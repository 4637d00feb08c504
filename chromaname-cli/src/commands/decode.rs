//! Decode command - convert a raw NV21 frame to an image file.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use super::common::read_frame;
use crate::error::CliError;

/// Arguments for the decode command.
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Raw NV21 frame file
    #[arg(long)]
    pub frame: PathBuf,

    /// Frame width in pixels
    #[arg(long)]
    pub width: u32,

    /// Frame height in pixels
    #[arg(long)]
    pub height: u32,

    /// Output image; the format follows the extension (e.g. .png)
    #[arg(long, short)]
    pub output: PathBuf,
}

/// Run the decode command.
pub fn run(args: DecodeArgs) -> Result<(), CliError> {
    let frame = read_frame(&args.frame, args.width, args.height)?;
    let buffer = frame.decode()?;
    buffer.to_rgba_image().save(&args.output)?;

    info!(output = %args.output.display(), "Wrote decoded frame");
    println!(
        "Wrote {}x{} image to {}",
        args.width,
        args.height,
        args.output.display()
    );
    Ok(())
}
