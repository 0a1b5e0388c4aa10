//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{parse_glyph, Overrides, MAX_WIDTH};

/// Parse and validate output width (1-4096 characters)
pub fn parse_width(s: &str) -> Result<u32, String> {
    let width: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid width", s))?;
    if !(1..=MAX_WIDTH).contains(&width) {
        return Err(format!(
            "Width must be between 1 and {}, got {}",
            MAX_WIDTH, width
        ));
    }
    Ok(width)
}

/// Parse and validate saturation factor (finite, >= 0.0)
pub fn parse_saturation(s: &str) -> Result<f64, String> {
    let factor: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !factor.is_finite() || factor < 0.0 {
        return Err(format!("Saturation must be >= 0.0, got {}", factor));
    }
    Ok(factor)
}

/// Parse and validate cell aspect correction (finite, > 0.0)
pub fn parse_aspect(s: &str) -> Result<f64, String> {
    let aspect: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !aspect.is_finite() || aspect <= 0.0 {
        return Err(format!("Aspect correction must be > 0.0, got {}", aspect));
    }
    Ok(aspect)
}

/// Render a 24-bit bitmap as colored character art in the terminal
#[derive(Parser, Debug)]
#[command(name = "bmp-ascii")]
#[command(version, about = "Render a 24-bit BMP as truecolor terminal art", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Render output.bmp at 150 columns
    bmp-ascii

    # Render a specific file at 80 columns with a block glyph
    bmp-ascii -i photo.bmp -w 80 -g █

    # Softer colors
    bmp-ascii -i photo.bmp --saturation 1.0

The input must be saved as an uncompressed 24-bit bitmap.")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Bitmap to render (default: output.bmp)
    #[arg(short, long, env = "BMP_ASCII_INPUT")]
    pub input: Option<PathBuf>,

    /// Output width in characters (default: 150)
    #[arg(short, long, env = "BMP_ASCII_WIDTH", value_parser = parse_width)]
    pub width: Option<u32>,

    /// Character drawn for every pixel (default: *)
    #[arg(short, long, value_parser = parse_glyph)]
    pub glyph: Option<char>,

    /// Saturation multiplier; 1.0 keeps original colors (default: 1.5)
    #[arg(short, long, value_parser = parse_saturation)]
    pub saturation: Option<f64>,

    /// Row correction for tall terminal cells (default: 0.55)
    #[arg(long, value_parser = parse_aspect)]
    pub aspect: Option<f64>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Don't print status lines to stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Args {
    /// Collect the rendering overrides given on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            input: self.input.clone(),
            width: self.width,
            glyph: self.glyph,
            saturation: self.saturation,
            aspect: self.aspect,
        }
    }
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
    /// Show resolved configuration
    Show,
    /// Create default config file
    Init,
}
