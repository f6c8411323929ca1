//! Error types for parameter validation and output operations
//!
//! The numerical routines never fail; they signal impossibility by value
//! (`-∞` in log space, `0.0` probabilities). Errors only arise at the
//! boundary where raw input is validated or results are written out.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for all calculator operations
#[derive(Debug, Error)]
pub enum TailError {
    /// A single parameter is outside its accepted domain
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Several parameters of one triple failed validation together
    #[error("{}", join_messages(.0))]
    InvalidParameters(Vec<TailError>),

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing to the terminal failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Numerical computation produced an unusable value
    #[error("Computation error in {operation}: {reason}")]
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl TailError {
    /// Flatten an aggregate into its individual failures
    pub fn violations(&self) -> Vec<&Self> {
        match self {
            Self::InvalidParameters(errors) => errors.iter().flat_map(Self::violations).collect(),
            other => vec![other],
        }
    }
}

fn join_messages(errors: &[TailError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience type alias for calculator results
pub type Result<T> = std::result::Result<T, TailError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TailError {
    TailError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> TailError {
    TailError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a file system error for an operation on `path`
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> TailError {
    TailError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
