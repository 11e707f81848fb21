//! Rune shaping configuration
//!
//! This crate provides centralized configuration for the shaping pipeline,
//! loading settings from `rune.toml` with environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default synthetic emboldening strength, as a fraction of the em.
pub const DEFAULT_EMBOLDEN_STRENGTH: f32 = 0.02;
/// Default synthetic slant (horizontal shear per unit of height).
pub const DEFAULT_SLANT: f32 = 0.25;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RuneConfig {
    /// Glyph shaping settings
    pub shaping: ShapingConfig,
    /// Font list used to build layouts
    pub fonts: FontsConfig,
}

/// Shaping configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShapingConfig {
    /// Emboldening strength applied to runs that need synthetic bold
    pub embolden_strength: f32,
    /// Shear applied to runs that need synthetic slant
    pub slant: f32,
    /// Reconstruct glyph outlines while shaping
    pub emit_path_commands: bool,
}

/// Font list configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FontsConfig {
    /// Font files in priority order. The position in this list is the
    /// font index reported by layout runs.
    pub faces: Vec<FaceConfig>,
}

/// A single font file entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaceConfig {
    /// Path to the font file (.ttf, .otf or a collection)
    pub path: PathBuf,
    /// Face index within a font collection
    #[serde(default)]
    pub index: u32,
}

impl Default for ShapingConfig {
    fn default() -> Self {
        Self {
            embolden_strength: DEFAULT_EMBOLDEN_STRENGTH,
            slant: DEFAULT_SLANT,
            emit_path_commands: true,
        }
    }
}

impl FaceConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            index: 0,
        }
    }
}

impl RuneConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the rune.toml configuration file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default location (rune.toml in the current directory)
    /// or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("rune.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("RUNE_EMBOLDEN_STRENGTH") {
            if let Ok(strength) = val.parse::<f32>() {
                self.shaping.embolden_strength = strength;
            }
        }
        if let Ok(val) = std::env::var("RUNE_SLANT") {
            if let Ok(slant) = val.parse::<f32>() {
                self.shaping.slant = slant;
            }
        }
        if let Ok(val) = std::env::var("RUNE_EMIT_PATHS") {
            self.shaping.emit_path_commands = val == "1" || val.eq_ignore_ascii_case("true");
        }

        // Platform path list; replaces the configured faces entirely.
        if let Some(paths) = std::env::var_os("RUNE_FONTS") {
            self.fonts.faces = std::env::split_paths(&paths)
                .filter(|path| !path.as_os_str().is_empty())
                .map(FaceConfig::new)
                .collect();
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from rune.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
