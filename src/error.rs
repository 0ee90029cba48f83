//! Error types for projection and planning calculations

use thiserror::Error;

/// Failures reported by the projection engine and its helpers
#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("Unknown market scenario: {0}")]
    InvalidScenario(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation is undefined for these inputs: {0}")]
    UndefinedOperation(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand used throughout the crate
pub type Result<T> = std::result::Result<T, ProjectionError>;
