//! Error types for the diagonalization simulator.
//!
//! Every fallible path in the crate reports through [`DiagonalError`].
//!
//! # Error Categories
//!
//! - **Config Errors**: Grid and registry parameters rejected at startup
//! - **Request Errors**: A request used a non-positive index
//! - **Output Errors**: The output sink, audit log or run report could not be written
//!
//! None of these are recoverable. Configuration is validated once before the
//! engine is built, and a failed write is a one-shot presentation action that
//! the engine never retries.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type DiagonalResult<T> = Result<T, DiagonalError>;

/// Unified error type for the simulator.
#[derive(Debug, Error)]
pub enum DiagonalError {
    // ═══════════════════════════════════════════════════════════════════
    // Config Errors
    // ═══════════════════════════════════════════════════════════════════

    /// The grid must contain at least one computation.
    #[error("Grid size must be at least 1")]
    EmptyGrid,

    /// The assessor was placed outside the registry's index range.
    #[error("Distinguished index {index} is outside the registry range 1..={grid_size}")]
    DistinguishedIndexOutOfRange { index: usize, grid_size: usize },

    // ═══════════════════════════════════════════════════════════════════
    // Request Errors
    // ═══════════════════════════════════════════════════════════════════

    /// Computation indices and natural numbers start at 1.
    #[error("Assessment request ({computation_index}, {natural_number}) must use positive integers")]
    NonPositiveRequest {
        computation_index: usize,
        natural_number: usize,
    },

    // ═══════════════════════════════════════════════════════════════════
    // Output Errors
    // ═══════════════════════════════════════════════════════════════════

    /// The output sink rejected a write.
    #[error("Output sink failed: {0}")]
    Sink(#[from] std::io::Error),

    /// The audit log could not be opened or appended to.
    #[error("Audit log '{}' unavailable: {source}", path.display())]
    Audit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The run report could not be serialized.
    #[error("Run report failed: {message}")]
    Report { message: String },

    /// The run report could not be written to its destination.
    #[error("Run report '{}' unavailable: {source}", path.display())]
    ReportFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Broad classification of a [`DiagonalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Request,
    Output,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Request => write!(f, "request"),
            ErrorCategory::Output => write!(f, "output"),
        }
    }
}

impl DiagonalError {
    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            DiagonalError::EmptyGrid | DiagonalError::DistinguishedIndexOutOfRange { .. } => {
                ErrorCategory::Config
            }
            DiagonalError::NonPositiveRequest { .. } => ErrorCategory::Request,
            DiagonalError::Sink(_)
            | DiagonalError::Audit { .. }
            | DiagonalError::Report { .. }
            | DiagonalError::ReportFile { .. } => ErrorCategory::Output,
        }
    }

    /// Check if this error is recoverable.
    ///
    /// Always false: configuration errors fail fast and sink writes are never retried.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Check if this error should be reported as a startup configuration failure.
    pub fn is_config(&self) -> bool {
        self.category() == ErrorCategory::Config
    }
}

impl From<serde_json::Error> for DiagonalError {
    fn from(err: serde_json::Error) -> Self {
        DiagonalError::Report {
            message: err.to_string(),
        }
    }
}
