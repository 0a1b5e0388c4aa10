//! Subcommand handlers for config actions.

use std::path::{Path, PathBuf};

use crate::config::{ConfigError, RenderSettings};

/// Commented default config written by `config init`.
pub fn default_config_template() -> &'static str {
    r#"# bmp-ascii configuration

[input]
# Bitmap to render (must be an uncompressed 24-bit BMP)
# path = "output.bmp"

[render]
# Output width in characters (1-4096)
width = 150
# Character drawn for every pixel
glyph = "*"
# Saturation multiplier: 1.0 keeps original colors, higher is more vivid
saturation = 1.5
# Row correction for terminal cells being taller than wide
aspect = 0.55
"#
}

/// Print resolved settings and the config file location.
pub fn show_config(settings: &RenderSettings, config_path: &Path) {
    println!("Current configuration:");
    println!("  Input:      {}", settings.input_path.display());
    println!("  Width:      {}", settings.width);
    println!("  Glyph:      {}", settings.glyph);
    println!("  Saturation: {}", settings.saturation);
    println!("  Aspect:     {}", settings.aspect);
    println!();

    if config_path.exists() {
        println!("Config file: {} (exists)", config_path.display());
    } else {
        println!("Config file: {} (not found)", config_path.display());
    }
}

/// Write the default config file, refusing to overwrite an existing one.
pub fn init_config(config_path: &Path) -> Result<PathBuf, ConfigError> {
    if config_path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        });
    }

    // Create parent directories if needed
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
            path: config_path.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(config_path, default_config_template()).map_err(|e| {
        ConfigError::WriteError {
            path: config_path.to_path_buf(),
            source: e,
        }
    })?;

    Ok(config_path.to_path_buf())
}
