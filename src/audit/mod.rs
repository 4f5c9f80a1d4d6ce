//! Structured audit logging.
//!
//! An append-only record of a run: one entry when the run starts, one per
//! assessment, one when it ends. Each entry follows the WHAT/WHICH/WHEN/OUTCOME
//! pattern and can be written as text lines or JSON Lines.
//!
//! There is no global logger. The binary opens an [`AuditLogger`] and hands
//! it to the engine.
//!
//! # Example
//!
//! ```ignore
//! use diagonal::audit::{AuditConfig, AuditLogger, AuditEntry, Outcome};
//!
//! let logger = AuditLogger::new(AuditConfig::default())?;
//! logger.log(AuditEntry::new("RUN_START", "Grid", "8x8", "Run started")
//!     .with_outcome(Outcome::Success))?;
//! ```

mod entry;
mod logger;

pub use entry::{ActionCategory, AuditEntry, Outcome, Severity};
pub use logger::{AuditConfig, AuditFormat, AuditLogger};
