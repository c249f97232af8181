//! Configuration System
//!
//! Handles loading site configuration from TOML files. Every field has a
//! default, so an empty file (or no file at all) is a valid configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::charts::PaletteName;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub charts: ChartsConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Rate limits for UI event streams
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// Quiet period after the last resize event before charts are resized
    #[serde(default = "default_resize_debounce")]
    pub resize_debounce_ms: u64,

    /// Minimum spacing between handled scroll events
    #[serde(default = "default_scroll_throttle")]
    pub scroll_throttle_ms: u64,
}

fn default_resize_debounce() -> u64 {
    250
}

fn default_scroll_throttle() -> u64 {
    16 // ~60fps
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: default_resize_debounce(),
            scroll_throttle_ms: default_scroll_throttle(),
        }
    }
}

/// Chart presentation settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChartsConfig {
    #[serde(default)]
    pub palette: PaletteName,

    /// Intro animation length of the hero chart
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u32,

    /// Viewports narrower than this get the compact chart layout
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint_px: f64,

    #[serde(default = "default_export_filename")]
    pub export_filename: String,
}

fn default_animation_ms() -> u32 {
    2000
}

fn default_mobile_breakpoint() -> f64 {
    768.0
}

fn default_export_filename() -> String {
    "chart.png".to_string()
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            palette: PaletteName::default(),
            animation_ms: default_animation_ms(),
            mobile_breakpoint_px: default_mobile_breakpoint(),
            export_filename: default_export_filename(),
        }
    }
}

/// Scroll-spy and section reveal settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// A section counts as current once the viewport is this close to its top
    #[serde(default = "default_section_offset")]
    pub section_offset_px: f64,

    /// Visible fraction of a section that triggers its reveal animation
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,

    /// Intersection root margin, in CSS margin syntax
    #[serde(default = "default_reveal_root_margin")]
    pub reveal_root_margin: String,

    /// Class added to a section when it is revealed
    #[serde(default = "default_reveal_class")]
    pub reveal_class: String,
}

fn default_section_offset() -> f64 {
    200.0
}

fn default_reveal_threshold() -> f64 {
    0.1
}

fn default_reveal_root_margin() -> String {
    "0px 0px -50px 0px".to_string()
}

fn default_reveal_class() -> String {
    "animate-fade-in-up".to_string()
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            section_offset_px: default_section_offset(),
            reveal_threshold: default_reveal_threshold(),
            reveal_root_margin: default_reveal_root_margin(),
            reveal_class: default_reveal_class(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl SiteConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            error: e.to_string(),
        })
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: SiteConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            charts: ChartsConfig::default(),
            navigation: NavigationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# SIERA site configuration

[timing]
# Quiet period after the last window resize before charts are resized (ms)
resize_debounce_ms = 250

# Minimum spacing between handled scroll events (ms)
scroll_throttle_ms = 16

[charts]
# Colour palette: standard or slate
palette = "standard"

# Hero chart intro animation (ms)
animation_ms = 2000

# Below this viewport width charts use the compact layout (px)
mobile_breakpoint_px = 768.0

# File name used when a chart is exported as an image
export_filename = "chart.png"

[navigation]
# Distance above a section at which it becomes the highlighted nav entry (px)
section_offset_px = 200.0

# Visible fraction of a section that starts its reveal animation
reveal_threshold = 0.1

# Margin applied to the viewport when checking visibility (CSS syntax)
reveal_root_margin = "0px 0px -50px 0px"

# Class added to a section once it has been revealed
reveal_class = "animate-fade-in-up"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.timing.resize_debounce_ms, 250);
        assert_eq!(config.timing.scroll_throttle_ms, 16);
        assert_eq!(config.charts.palette, PaletteName::Standard);
        assert_eq!(config.charts.export_filename, "chart.png");
        assert_eq!(config.navigation.section_offset_px, 200.0);
        assert_eq!(config.navigation.reveal_threshold, 0.1);
        assert_eq!(config.navigation.reveal_root_margin, "0px 0px -50px 0px");
        assert_eq!(config.navigation.reveal_class, "animate-fade-in-up");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_generated_config_matches_defaults() {
        let parsed = SiteConfig::from_toml_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let parsed = SiteConfig::from_toml_str(
            r#"
            [charts]
            palette = "slate"

            [timing]
            resize_debounce_ms = 100
            "#,
        )
        .unwrap();

        assert_eq!(parsed.charts.palette, PaletteName::Slate);
        assert_eq!(parsed.charts.animation_ms, 2000);
        assert_eq!(parsed.timing.resize_debounce_ms, 100);
        assert_eq!(parsed.timing.scroll_throttle_ms, 16);
    }

    #[test]
    fn test_invalid_palette_rejected() {
        let result = SiteConfig::from_toml_str("[charts]\npalette = \"neon\"\n");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SiteConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
