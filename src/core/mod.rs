//! Core types for the diagonalization simulator.
//!
//! - **Computation**: an indexed entry, tagged when it stands for the assessor
//! - **Registry**: the immutable `1..=N` mapping of computations
//! - **Request**: assessment requests, labels, verdicts and records
//! - **Error**: the crate-wide error type
//!
//! # Layer 0 - No Internal Dependencies
//!
//! Every other module builds on these types.

pub mod computation;
pub mod error;
pub mod registry;
pub mod request;

pub use computation::Computation;
pub use error::{DiagonalError, DiagonalResult, ErrorCategory};
pub use registry::Registry;
pub use request::{Assessment, AssessmentLabel, AssessmentRequest, Verdict};
