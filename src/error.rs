//! Error types for parameter loading, validation and report output

use thiserror::Error;

/// Errors raised outside the pure projection path
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} = {value} is not a multiple of step {step}")]
    OffStep {
        field: &'static str,
        value: f64,
        step: f64,
    },
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
