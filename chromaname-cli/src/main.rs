//! chromaname CLI - name the color under a point of a camera frame.

mod commands;
mod error;

use chromaname::app::AppConfig;
use clap::{Parser, Subcommand};

use commands::classify::ClassifyArgs;
use commands::config::ConfigCommands;
use commands::decode::DecodeArgs;
use commands::palette::PaletteCommands;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "chromaname", version, about = "Name colors in raw NV21 camera frames")]
struct Cli {
    /// Mirror log output to stderr
    #[arg(long, global = true)]
    log_console: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Name the dominant color around a point of a frame
    Classify(ClassifyArgs),

    /// Convert a raw NV21 frame to an image
    Decode(DecodeArgs),

    /// Inspect the color palette
    #[command(subcommand)]
    Palette(PaletteCommands),

    /// View or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Create the configuration file with default values
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Logging is best effort; commands still run without it
    let logging = AppConfig::load()
        .map(|config| config.logging.with_console(cli.log_console))
        .unwrap_or_default();
    let _guard = match chromaname::logging::init_logging(&logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: {}", CliError::from(e));
            None
        }
    };
    tracing::debug!(version = chromaname::VERSION, "chromaname starting");

    if let Err(e) = run(cli.command) {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Classify(args) => commands::classify::run(args),
        Commands::Decode(args) => commands::decode::run(args),
        Commands::Palette(command) => commands::palette::run(command),
        Commands::Config(command) => commands::config::run(command),
        Commands::Init => commands::init::run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_classify() {
        let cli = Cli::try_parse_from([
            "chromaname",
            "classify",
            "--frame",
            "f.nv21",
            "--width",
            "640",
            "--height",
            "480",
            "--x",
            "10",
            "--y",
            "20",
            "--rotation",
            "90",
            "-v",
        ])
        .unwrap();

        let Commands::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!((args.width, args.height), (640, 480));
        assert_eq!((args.x, args.y), (10, 20));
        assert_eq!(args.rotation, Some(90));
        assert!(args.verbose);
    }

    #[test]
    fn test_parse_palette_match() {
        let cli = Cli::try_parse_from(["chromaname", "palette", "match", "#00FF00"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Palette(PaletteCommands::Match {
                ref color,
                palette: None
            }) if color == "#00FF00"
        ));
    }
}
