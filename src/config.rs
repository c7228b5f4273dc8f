//! Spotlight configuration
//!
//! Stored in `~/.config/spotlight/config.yaml`:
//!
//! ```yaml
//! tag: VLG
//! default_opacity: 0.1
//! colors:
//!   - "#ffb6c1"
//!   - "rgb(144, 238, 144)"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::group::{self, LogicalGroup, MarkerPattern, DEFAULT_TAG};

/// Pastel palette that reads well on both light and dark themes
pub const DEFAULT_COLORS: &[&str] = &[
    "rgba(255, 182, 193, 0.2)",
    "rgba(144, 238, 144, 0.2)",
    "rgba(173, 216, 230, 0.2)",
    "rgba(255, 218, 185, 0.2)",
    "rgba(221, 160, 221, 0.2)",
    "rgba(176, 196, 222, 0.2)",
    "rgba(255, 255, 224, 0.2)",
    "rgba(176, 224, 230, 0.2)",
];

/// Opacity applied to body fills when the config does not set one
pub const DEFAULT_OPACITY: f64 = 0.1;

/// User-facing settings for group discovery and coloring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotlightConfig {
    /// Marker tag matched in `// <tag>: <name>` comments
    #[serde(default = "default_tag")]
    pub tag: String,
    /// Palette consumed cyclically by group discovery order
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
    /// Opacity for body fills, in `[0, 1]`
    #[serde(default = "default_opacity")]
    pub default_opacity: f64,
}

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

fn default_colors() -> Vec<String> {
    DEFAULT_COLORS.iter().map(|c| c.to_string()).collect()
}

fn default_opacity() -> f64 {
    DEFAULT_OPACITY
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            tag: default_tag(),
            colors: default_colors(),
            default_opacity: default_opacity(),
        }
    }
}

impl SpotlightConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_or_default(&path)
    }

    /// Load config from `path`, logging and falling back to defaults on failure
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    /// Parse config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        Ok(config.normalized())
    }

    /// Clamp out-of-range values instead of rejecting the whole file
    pub fn normalized(mut self) -> Self {
        if !(0.0..=1.0).contains(&self.default_opacity) {
            let clamped = if self.default_opacity.is_nan() {
                DEFAULT_OPACITY
            } else {
                self.default_opacity.clamp(0.0, 1.0)
            };
            tracing::warn!(
                "default_opacity {} out of range, using {}",
                self.default_opacity,
                clamped
            );
            self.default_opacity = clamped;
        }
        if self.tag.trim().is_empty() {
            tracing::warn!("Empty marker tag, using {}", DEFAULT_TAG);
            self.tag = default_tag();
        }
        self
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Marker matcher for the configured tag
    pub fn marker_pattern(&self) -> MarkerPattern {
        MarkerPattern::new(&self.tag)
    }

    /// Parse `text` with this configuration
    pub fn parse(&self, text: &str) -> Vec<LogicalGroup> {
        group::parse(
            text,
            &self.marker_pattern(),
            &self.colors,
            self.default_opacity,
        )
    }
}
