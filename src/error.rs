//! Domain error types for dialkit
//!
//! Provides structured error types for the two component families:
//! - `PickerError` for picker state, groups and saved state
//! - `GeometryError` for progress track geometry
//! - `DialkitError` as the top-level error type

use thiserror::Error;

/// Top-level error type for dialkit
#[derive(Debug, Error)]
pub enum DialkitError {
    #[error("Picker error: {0}")]
    Picker(#[from] PickerError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Errors related to picker state
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Picker needs between 1 and {ceiling} options, got {count}")]
    InvalidOptionCount { count: usize, ceiling: usize },

    #[error("Option {option} is out of range for a picker with {count} options")]
    OptionOutOfRange { option: usize, count: usize },

    #[error("Invalid saved picker state: {0}")]
    InvalidSavedState(String),

    #[error("Failed to (de)serialize picker state: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors related to progress track geometry
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("Progress indicator needs at least one segment")]
    NoSegments,

    #[error("Segment {index} has non-positive weight {weight}")]
    NonPositiveWeight { index: usize, weight: f32 },

    #[error("Gradient ratio {0} is outside [0, 0.5]")]
    InvalidGradientRatio(f32),

    #[error("Track of size {width}x{height} has no perimeter")]
    DegenerateTrack { width: f32, height: f32 },
}

/// Result type alias for DialkitError
pub type Result<T> = std::result::Result<T, DialkitError>;

/// Result type alias for PickerError
pub type PickerResult<T> = std::result::Result<T, PickerError>;

/// Result type alias for GeometryError
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;
