//! Error types for dataset construction, scaling and rendering

use thiserror::Error;

use crate::data::PhaseKind;

/// Everything that can go wrong while building or rendering a chart.
///
/// All data and scale problems are detected when a value is constructed, so a
/// successfully built [`crate::geometry::FlowChartGeometry`] never contains NaN
/// coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MinardError {
    #[error("{phase} phase has no waypoints")]
    EmptyPhase { phase: PhaseKind },

    #[error("{phase} phase needs at least 2 waypoints to form a band, got {count}")]
    TooFewWaypoints { phase: PhaseKind, count: usize },

    #[error("waypoint '{label}' has invalid magnitude {magnitude}")]
    InvalidMagnitude { label: String, magnitude: f64 },

    #[error("waypoint '{label}' has invalid position {position}")]
    InvalidPosition { label: String, position: f64 },

    #[error("waypoint '{label}' at position {position} comes before previous position {previous}")]
    UnorderedPosition {
        label: String,
        position: f64,
        previous: f64,
    },

    #[error("temperature reading '{label}' is not a finite value: {reaumur}")]
    InvalidTemperature { label: String, reaumur: f64 },

    #[error("temperature reading refers to unknown {phase} waypoint '{label}'")]
    UnknownWaypoint { phase: PhaseKind, label: String },

    #[error("max magnitude must be positive and finite, got {0}")]
    InvalidMaxMagnitude(f64),

    #[error("scale range is empty or invalid: {min} to {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid chart layout: {0}")]
    InvalidLayout(String),

    #[error("no hover target with id {0}")]
    UnknownTarget(usize),

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("failed to render chart: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, MinardError>;
