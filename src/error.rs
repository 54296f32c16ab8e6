//! Error types for the host surface and configuration
//!
//! The simulation itself never fails; these cover acquiring the drawing
//! surface, locating DOM elements and loading tuning overrides.

use thiserror::Error;

/// Failures that prevent the game component from starting
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element #{0} is missing")]
    MissingElement(&'static str),
    #[error("element #{0} is not a {1}")]
    WrongElementType(&'static str, &'static str),
    #[error("failed to create drawing surface: {0}")]
    Surface(String),
    #[error("no compatible graphics adapter: {0}")]
    Adapter(String),
    #[error("failed to create graphics device: {0}")]
    Device(String),
    #[error("frame scheduling failed: {0}")]
    Schedule(String),
}

/// Rejected tuning overrides
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive")]
    NotPositive { field: &'static str },
    #[error("{field} must be in (0, 1], got {value}")]
    ShareOutOfRange { field: &'static str, value: f32 },
    #[error("enemy speed range [{min}, {max}) is empty")]
    EmptySpeedRange { min: f32, max: f32 },
}
