//! Error types for the host surfaces.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, SplitError>;

/// Errors produced at the host boundary.
///
/// The settlement computation itself never fails: malformed amounts coerce
/// to zero and degenerate inputs suppress the output instead of erroring.
#[derive(Error, Debug)]
pub enum SplitError {
    /// Failed to read the input file or write the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Saved state could not be parsed or written
    #[error("saved state error: {0}")]
    State(#[from] serde_json::Error),
}
