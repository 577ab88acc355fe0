//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse and validate the output width (must be positive)
fn parse_width(s: &str) -> Result<u32, String> {
    let width: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid width", s))?;
    if width == 0 {
        return Err("Output width must be greater than 0".to_string());
    }
    Ok(width)
}

/// Convert 24-bit BMP images to ASCII art
#[derive(Parser, Debug)]
#[command(name = "bmp2ascii")]
#[command(version, about = "Convert 24-bit BMP images to ASCII art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Input BMP file (falls back to the configured path). A file literally
    /// named `config` must be given as `./config`, since the bare name is
    /// taken as the config subcommand
    pub input: Option<PathBuf>,

    /// Output width in characters (default: 100)
    #[arg(short, long, value_parser = parse_width)]
    pub width: Option<u32>,

    /// Output text file (default: <input stem>_ascii_art.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
