//! Carousel configuration loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OrbitError, Result};

/// How the carousel decides which items take part in layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMode {
    /// Every item is laid out; the scroll anchor is computed but inert.
    #[default]
    Full,
    /// Only `visible_count` items starting at the scroll anchor are laid
    /// out; the rest are detached.
    Windowed,
}

/// Carousel settings (`carousel.toml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Number of item slots the row accommodates across its width.
    #[serde(default = "default_visible_count")]
    pub visible_count: u32,
    /// Gap between items when it cannot be derived from `visible_count`.
    #[serde(default = "default_spacing")]
    pub default_spacing: i32,
    #[serde(default)]
    pub scroll_mode: ScrollMode,
    /// Whether the platform has a rotary encoder / directional keys.
    #[serde(default = "yes")]
    pub hardware_keys: bool,
    /// Container width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Container height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_visible_count() -> u32 {
    3
}
fn default_spacing() -> i32 {
    10
}
fn yes() -> bool {
    true
}
fn default_width() -> u32 {
    480
}
fn default_height() -> u32 {
    96
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            visible_count: default_visible_count(),
            default_spacing: default_spacing(),
            scroll_mode: ScrollMode::default(),
            hardware_keys: yes(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl CarouselConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)
            .map_err(|e| OrbitError::Config(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded carousel config from {}", path.display());
        Ok(config)
    }

    /// Reject settings no layout can honor.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(OrbitError::Config(format!(
                "container size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.visible_count == 1 {
            log::warn!(
                "visible_count = 1 cannot derive spacing; using default_spacing ({})",
                self.default_spacing
            );
        }
        Ok(())
    }
}
