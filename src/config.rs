//! Configuration file handling for bmp-ascii.
//!
//! Loads configuration from `~/.config/bmp-ascii/config.toml` or a custom path,
//! and merges it with command-line overrides into [`RenderSettings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{CELL_ASPECT_CORRECTION, DEFAULT_GLYPH, DEFAULT_SATURATION};

/// Input file used when nothing else is configured.
pub const DEFAULT_INPUT: &str = "output.bmp";

/// Output width in characters used when nothing else is configured.
pub const DEFAULT_WIDTH: u32 = 150;

/// Largest accepted output width in characters.
pub const MAX_WIDTH: u32 = 4096;

/// Configuration file structure for bmp-ascii.
/// Loaded from ~/.config/bmp-ascii/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    pub width: Option<u32>,
    pub glyph: Option<String>,
    pub saturation: Option<f64>,
    pub aspect: Option<f64>,
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Overrides taken from the command line or environment.
///
/// `None` fields fall through to the config file, then to defaults.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub width: Option<u32>,
    pub glyph: Option<char>,
    pub saturation: Option<f64>,
    pub aspect: Option<f64>,
}

/// Fully resolved settings passed into the rendering pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub input_path: PathBuf,
    /// Output width in characters
    pub width: u32,
    pub glyph: char,
    /// Saturation multiplier applied to every pixel
    pub saturation: f64,
    /// Vertical cell correction used when computing the row count
    pub aspect: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            width: DEFAULT_WIDTH,
            glyph: DEFAULT_GLYPH,
            saturation: DEFAULT_SATURATION,
            aspect: CELL_ASPECT_CORRECTION,
        }
    }
}

impl RenderSettings {
    /// Merge overrides over a config file over defaults, validating the result.
    pub fn resolve(overrides: Overrides, config: &Config) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let glyph = match (overrides.glyph, config.render.glyph.as_deref()) {
            (Some(glyph), _) => glyph,
            (None, Some(text)) => parse_glyph(text).map_err(|_| ConfigError::InvalidGlyph {
                value: text.to_string(),
            })?,
            (None, None) => defaults.glyph,
        };

        let settings = Self {
            input_path: overrides
                .input
                .or_else(|| config.input.path.clone())
                .unwrap_or(defaults.input_path),
            width: overrides
                .width
                .or(config.render.width)
                .unwrap_or(defaults.width),
            glyph,
            saturation: overrides
                .saturation
                .or(config.render.saturation)
                .unwrap_or(defaults.saturation),
            aspect: overrides
                .aspect
                .or(config.render.aspect)
                .unwrap_or(defaults.aspect),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_WIDTH).contains(&self.width) {
            return Err(ConfigError::InvalidWidth { value: self.width });
        }
        if !self.saturation.is_finite() || self.saturation < 0.0 {
            return Err(ConfigError::InvalidSaturation {
                value: self.saturation,
            });
        }
        if !self.aspect.is_finite() || self.aspect <= 0.0 {
            return Err(ConfigError::InvalidAspect { value: self.aspect });
        }
        Ok(())
    }
}

/// Parse a glyph argument, which must be exactly one character.
pub fn parse_glyph(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_control() => Ok(c),
        _ => Err(format!("Glyph must be a single printable character, got '{}'", s)),
    }
}

/// Errors that can occur when loading or applying configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    AlreadyExists {
        path: PathBuf,
    },
    InvalidWidth {
        value: u32,
    },
    InvalidGlyph {
        value: String,
    },
    InvalidSaturation {
        value: f64,
    },
    InvalidAspect {
        value: f64,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::WriteError { path, source } => {
                write!(
                    f,
                    "Failed to write config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::AlreadyExists { path } => {
                write!(
                    f,
                    "Config file already exists: {}\nUse 'bmp-ascii config show' to view current settings.",
                    path.display()
                )
            }
            ConfigError::InvalidWidth { value } => {
                write!(f, "Width must be between 1 and {}, got {}", MAX_WIDTH, value)
            }
            ConfigError::InvalidGlyph { value } => {
                write!(f, "Glyph must be a single printable character, got '{}'", value)
            }
            ConfigError::InvalidSaturation { value } => {
                write!(f, "Saturation must be a finite number >= 0.0, got {}", value)
            }
            ConfigError::InvalidAspect { value } => {
                write!(f, "Aspect correction must be a finite number > 0.0, got {}", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::WriteError { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("bmp-ascii").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/bmp-ascii/config.toml")
        })
}
