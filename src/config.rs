//! Configuration file support for dialkit.
//!
//! Configuration is loaded from `~/.config/dialkit/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/dialkit/config.toml
//! [picker]
//! repeat_items = true
//! auto_center = true
//! touch_exploration = false
//! animation_frame_ms = 16
//! gradient_ratio = 0.33
//!
//! [progress]
//! shape = "square"
//! gap_degrees = 2.0
//! stroke_width = 4.0
//! corner_radius = 12.0
//! segments = [1.0, 2.0, 1.0]
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{DialkitError, GeometryResult, Result};
use crate::progress::{CircularTrack, EdgeFade, RoundedRectTrack};

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub picker: PickerConfig,
    pub progress: ProgressConfig,
}

/// Picker behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Repeat options endlessly instead of stopping at the ends
    pub repeat_items: bool,
    /// Center the active picker of a group
    pub auto_center: bool,
    /// Route all group scrolling to the active picker
    pub touch_exploration: bool,
    /// Duration of one animation frame, in milliseconds
    pub animation_frame_ms: u64,
    /// Rotary delta that makes up one item step
    pub rotary_threshold: f32,
    /// Share of the picker height faded at each edge
    pub gradient_ratio: f32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            repeat_items: true,
            auto_center: true,
            touch_exploration: false,
            animation_frame_ms: 16,
            rotary_threshold: 1.0,
            gradient_ratio: EdgeFade::DEFAULT_RATIO,
        }
    }
}

impl PickerConfig {
    pub fn animation_frame(&self) -> Duration {
        Duration::from_millis(self.animation_frame_ms)
    }

    pub fn edge_fade(&self) -> GeometryResult<EdgeFade> {
        EdgeFade::new(self.gradient_ratio)
    }
}

/// Track shape of the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProgressShape {
    #[default]
    Circular,
    Square,
}

impl ProgressShape {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "circular" | "circle" => Some(Self::Circular),
            "square" | "rect" => Some(Self::Square),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Circular => Self::Square,
            Self::Square => Self::Circular,
        }
    }
}

/// Progress indicator appearance.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub shape: ProgressShape,
    /// Angle between segments of a circular track
    pub gap_degrees: f32,
    pub stroke_width: f32,
    /// Corner radius of a square track
    pub corner_radius: f32,
    /// Perimeter length between segments of a square track
    pub gap: f32,
    /// Segment weights, in track order
    pub segments: Vec<f32>,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            shape: ProgressShape::Circular,
            gap_degrees: 2.0,
            stroke_width: 4.0,
            corner_radius: 12.0,
            gap: 4.0,
            segments: vec![1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl ProgressConfig {
    pub fn circular_track(&self) -> CircularTrack {
        CircularTrack {
            gap_degrees: self.gap_degrees,
            stroke_width: self.stroke_width,
            ..CircularTrack::default()
        }
    }

    pub fn rounded_rect_track(&self) -> RoundedRectTrack {
        RoundedRectTrack {
            corner_radius: self.corner_radius,
            stroke_width: self.stroke_width,
            gap: self.gap,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match Self::from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                crate::log::log(&format!("Warning: {}", e));
                Self::default()
            }
        }
    }

    /// Read and parse a configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| {
            DialkitError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dialkit")
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Where the sample app keeps picker state between runs
    pub fn state_path() -> PathBuf {
        Self::config_dir().join("state.json")
    }

    /// Apply the `DIALKIT_SHAPE` environment variable.
    pub fn with_env(mut self) -> Self {
        if let Some(shape) = std::env::var("DIALKIT_SHAPE")
            .ok()
            .and_then(|value| ProgressShape::parse(&value))
        {
            self.progress.shape = shape;
        }
        self
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(
        mut self,
        shape: Option<ProgressShape>,
        repeat_items: Option<bool>,
        touch_exploration: Option<bool>,
    ) -> Self {
        if let Some(shape) = shape {
            self.progress.shape = shape;
        }
        if let Some(repeat_items) = repeat_items {
            self.picker.repeat_items = repeat_items;
        }
        if let Some(touch_exploration) = touch_exploration {
            self.picker.touch_exploration = touch_exploration;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.picker.repeat_items);
        assert!(config.picker.auto_center);
        assert_eq!(config.progress.shape, ProgressShape::Circular);
        assert_eq!(config.progress.segments.len(), 4);
        assert!(config.picker.edge_fade().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [picker]
            repeat_items = false
            animation_frame_ms = 8

            [progress]
            shape = "square"
            segments = [1.0, 2.0]
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.picker.repeat_items);
        assert!(config.picker.auto_center);
        assert_eq!(config.picker.animation_frame(), Duration::from_millis(8));
        assert_eq!(config.progress.shape, ProgressShape::Square);
        assert_eq!(config.progress.segments, vec![1.0, 2.0]);
        assert_eq!(config.progress.gap_degrees, 2.0);
    }

    #[test]
    fn test_invalid_gradient_ratio_is_reported() {
        let config: Config = toml::from_str("[picker]\ngradient_ratio = 0.8").unwrap();
        assert!(config.picker.edge_fade().is_err());
    }

    #[test]
    fn test_from_path_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!("dialkit_config_{}.toml", std::process::id()));
        std::fs::write(&path, "[picker]\nrepeat_items = \"yes\"").unwrap();

        let result = Config::from_path(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(DialkitError::Config(_))));
    }

    #[test]
    fn test_from_path_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("dialkit_config_does_not_exist.toml");
        assert!(matches!(Config::from_path(&path), Err(DialkitError::Io(_))));
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = Config::default().with_overrides(Some(ProgressShape::Square), Some(false), None);
        assert_eq!(config.progress.shape, ProgressShape::Square);
        assert!(!config.picker.repeat_items);
        assert!(!config.picker.touch_exploration);
    }

    #[test]
    fn test_parse_shape() {
        assert_eq!(ProgressShape::parse("Square"), Some(ProgressShape::Square));
        assert_eq!(ProgressShape::parse("circle"), Some(ProgressShape::Circular));
        assert_eq!(ProgressShape::parse("hexagon"), None);
        assert_eq!(ProgressShape::Circular.toggled(), ProgressShape::Square);
    }
}
