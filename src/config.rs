//! Configuration
//!
//! Everything the slide pipeline needs that is not slide content: geometry and colours,
//! font files, and where inputs and outputs live. Nothing here is read from globals;
//! a [SlideConfig] is loaded once and passed down explicitly.

use crate::compose::SlideStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values that parse but cannot produce a slide
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Font files for titles and body text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontPaths {
    pub title: PathBuf,
    pub body: PathBuf,
}

impl Default for FontPaths {
    fn default() -> Self {
        FontPaths {
            title: PathBuf::from("content/Aesthet-Regular.otf"),
            body: PathBuf::from("content/Aesthet-Regular.otf"),
        }
    }
}

/// Where inputs are read from and outputs written to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paths {
    /// Curriculum JSON
    pub curriculum: PathBuf,
    /// Root of the per-lesson directories holding slide text and pictures
    pub lessons: PathBuf,
    /// Where composed slides are written
    pub output: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            curriculum: PathBuf::from("content/art_curriculum.json"),
            lessons: PathBuf::from("images"),
            output: PathBuf::from("final_slides"),
        }
    }
}

/// Which curriculum level a slide's title shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleSource {
    Unit,
    #[default]
    Week,
    Lesson,
}

/// Top level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideConfig {
    pub title: TitleSource,
    /// Number of slides generated for every lesson
    pub slides_per_lesson: usize,
    pub style: SlideStyle,
    pub fonts: FontPaths,
    pub paths: Paths,
}

impl Default for SlideConfig {
    fn default() -> Self {
        SlideConfig {
            title: TitleSource::default(),
            slides_per_lesson: 5,
            style: SlideStyle::default(),
            fonts: FontPaths::default(),
            paths: Paths::default(),
        }
    }
}

impl SlideConfig {
    /// Load configuration from file. Only TOML is understood.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !has_extension(path, "toml") {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: SlideConfig =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if !has_extension(path, "toml") {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()));
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Reject geometry that cannot produce a slide
    pub fn validate(&self) -> Result<(), ConfigError> {
        let style = &self.style;
        if style.canvas_width == 0 || style.canvas_height == 0 {
            return Err(ConfigError::Invalid("canvas must not be empty".into()));
        }
        if style.picture_height == 0 {
            return Err(ConfigError::Invalid("picture height must not be zero".into()));
        }
        if style.min_font_size == 0 {
            return Err(ConfigError::Invalid("minimum font size must be at least 1".into()));
        }
        if style.min_font_size > style.max_font_size {
            return Err(ConfigError::Invalid(format!(
                "minimum font size {} exceeds maximum {}",
                style.min_font_size, style.max_font_size
            )));
        }
        if self.slides_per_lesson == 0 {
            return Err(ConfigError::Invalid("slides per lesson must be at least 1".into()));
        }
        Ok(())
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case(ext))
}
