//! Error types for Myrmex operations.
//!
//! The simulation core never fails; errors only arise while building or
//! loading a configuration and while placing scenery.

use thiserror::Error;

/// Result type for Myrmex operations.
pub type Result<T> = std::result::Result<T, MyrmexError>;

/// Errors that can occur outside the per-tick simulation.
#[derive(Debug, Clone, Error)]
pub enum MyrmexError {
    /// Configuration errors.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// Scenery placement errors.
    #[error("Placement error: {0}")]
    Placement(#[from] PlacementError),
    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),
    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for MyrmexError {
    fn from(e: std::io::Error) -> Self {
        MyrmexError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for MyrmexError {
    fn from(e: serde_json::Error) -> Self {
        MyrmexError::Serialization(e.to_string())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Invalid value.
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    /// Out of range.
    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

/// Rejected placement of food or obstacles.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// The requested position lies outside the field.
    #[error("position ({x}, {y}) is outside the {width}x{height} field")]
    OutOfBounds {
        x: f64,
        y: f64,
        width: usize,
        height: usize,
    },
    /// Zero-sized scenery.
    #[error("size must be positive")]
    EmptySize,
    /// A food source whose unit count would not fit in a `u32`.
    #[error("food source of size {size} holds too many units")]
    TooLarge { size: u32 },
}

// Convenience constructors
impl MyrmexError {
    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        MyrmexError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        MyrmexError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }
}
