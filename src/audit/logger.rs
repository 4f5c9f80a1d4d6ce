//! Audit logger implementation.
//!
//! Appends entries to a log file in one of two formats (text lines or
//! JSON Lines). Entries below the configured severity are dropped. Every
//! accepted entry receives the next sequence number, so the file preserves
//! the order in which the run produced them.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use super::entry::{AuditEntry, Severity};
use crate::core::{DiagonalError, DiagonalResult};

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the audit logger.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Path to the audit log file.
    pub log_path: PathBuf,
    /// Minimum severity to log.
    pub min_severity: Severity,
    pub format: AuditFormat,
}

/// Output format for audit logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditFormat {
    /// Structured text lines (default).
    Text,
    /// JSON Lines format.
    JsonLines,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("diagonal-audit.log"),
            min_severity: Severity::Trace,
            format: AuditFormat::Text,
        }
    }
}

// =============================================================================
// Audit Logger
// =============================================================================

/// File-backed audit logger.
pub struct AuditLogger {
    config: AuditConfig,
    writer: Mutex<BufWriter<File>>,
    sequence: AtomicU64,
}

impl AuditLogger {
    /// Open (or create) the log file and append to it.
    pub fn new(config: AuditConfig) -> DiagonalResult<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_path)
            .map_err(|source| DiagonalError::Audit {
                path: config.log_path.clone(),
                source,
            })?;

        Ok(Self {
            config,
            writer: Mutex::new(BufWriter::new(file)),
            sequence: AtomicU64::new(0),
        })
    }

    /// Log an audit entry.
    pub fn log(&self, entry: AuditEntry) -> DiagonalResult<()> {
        if entry.severity < self.config.min_severity {
            return Ok(());
        }

        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
        let line = match self.config.format {
            AuditFormat::Text => format!("{:08} | {}\n", seq, entry.format_line()),
            AuditFormat::JsonLines => format!("{}\n", entry.to_json()?),
        };

        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        writer
            .write_all(line.as_bytes())
            .map_err(|source| self.io_error(source))
    }

    /// Flush the log buffer.
    pub fn flush(&self) -> DiagonalResult<()> {
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        writer.flush().map_err(|source| self.io_error(source))
    }

    /// Number of entries accepted so far.
    pub fn sequence(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    fn io_error(&self, source: std::io::Error) -> DiagonalError {
        DiagonalError::Audit {
            path: self.config.log_path.clone(),
            source,
        }
    }
}

impl Drop for AuditLogger {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
