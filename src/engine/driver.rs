//! Grid driver and run report.
//!
//! Visits every `(q, n)` cell of `1..=N × 1..=N` exactly once, in row-major
//! order (computation index outer, natural number inner).

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use super::{AssessmentEngine, EngineConfig};
use crate::audit::{ActionCategory, AuditEntry, Outcome, Severity};
use crate::core::{Assessment, AssessmentRequest, DiagonalError, DiagonalResult};
use crate::sink::{OutputSink, Style};

/// Every request of the grid, in visiting order.
pub fn grid_requests(grid_size: usize) -> impl Iterator<Item = AssessmentRequest> {
    (1..=grid_size)
        .flat_map(move |q| (1..=grid_size).map(move |n| AssessmentRequest::new(q, n)))
}

/// Assess the whole grid through `engine`, writing one line per cell to `sink`.
pub fn run_grid(engine: &AssessmentEngine, sink: &mut dyn OutputSink) -> DiagonalResult<GridReport> {
    let registry = engine.registry();
    let grid_size = registry.len();

    if let Some(audit) = engine.audit() {
        audit.log(
            AuditEntry::new(
                "RUN_START",
                "Grid",
                format!("{0}x{0}", grid_size),
                "Assessment run started",
            )
            .with_category(ActionCategory::System)
            .with_meta("specialized_test", engine.config().specialized_test.to_string()),
        )?;
        audit.log(
            AuditEntry::new(
                "REGISTRY",
                "Registry",
                grid_size.to_string(),
                format!("{} computations bound", grid_size),
            )
            .with_category(ActionCategory::Config)
            .with_meta("distinguished_index", registry.distinguished_index().to_string())
            .with_meta("assessor_present", registry.assessor_present().to_string()),
        )?;
    }

    let mut cells = Vec::with_capacity(grid_size * grid_size);
    for request in grid_requests(grid_size) {
        match engine.assess(request.computation_index, request.natural_number, sink) {
            Ok(assessment) => cells.push(assessment),
            Err(e) => {
                record_abort(engine, &request, &e);
                return Err(e);
            }
        }
    }
    sink.flush()?;

    let report = GridReport::new(engine.config().clone(), cells);

    info!(
        cells = report.cells.len(),
        affirmative = report.affirmative,
        uncertain = report.uncertain,
        contradiction = report.contradiction,
        "Grid complete"
    );

    if let Some(audit) = engine.audit() {
        let (outcome, severity) = if report.contradiction {
            (Outcome::Failure, Severity::Warning)
        } else {
            (Outcome::Success, Severity::Info)
        };
        audit.log(
            AuditEntry::new(
                "RUN_END",
                "Grid",
                format!("{0}x{0}", grid_size),
                report.headline(),
            )
            .with_category(ActionCategory::System)
            .with_severity(severity)
            .with_outcome(outcome)
            .with_meta("affirmative", report.affirmative.to_string())
            .with_meta("uncertain", report.uncertain.to_string()),
        )?;
        audit.flush()?;
    }

    Ok(report)
}

/// Best-effort audit record of a failed cell. The original error wins.
fn record_abort(engine: &AssessmentEngine, request: &AssessmentRequest, error: &DiagonalError) {
    let Some(audit) = engine.audit() else {
        return;
    };

    let entry = AuditEntry::new("RUN_ABORTED", "Request", request.to_string(), error.to_string())
        .with_category(ActionCategory::System)
        .with_severity(Severity::Error)
        .with_outcome(Outcome::Failure)
        .with_meta("category", error.category().to_string());

    if let Err(audit_err) = audit.log(entry).and_then(|()| audit.flush()) {
        warn!(error = %audit_err, "Could not record aborted run");
    }
}

/// Outcome of a full grid run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridReport {
    pub config: EngineConfig,
    /// Every assessment, in visiting order.
    pub cells: Vec<Assessment>,
    /// Cells where the assessor halted.
    pub affirmative: usize,
    /// Cells where the assessor did not halt.
    pub uncertain: usize,
    /// Cells labelled as the self-referential sentence.
    pub self_referential: Vec<AssessmentRequest>,
    /// A self-referential cell was reported as known never to halt, although
    /// reporting it required the assessor, that same computation, to halt.
    pub contradiction: bool,
}

impl GridReport {
    pub fn new(config: EngineConfig, cells: Vec<Assessment>) -> Self {
        let affirmative = cells
            .iter()
            .filter(|a| a.verdict.is_known_never_halt())
            .count();
        let uncertain = cells.len() - affirmative;
        let self_referential: Vec<AssessmentRequest> = cells
            .iter()
            .filter(|a| a.label.is_self_referential())
            .map(|a| a.request)
            .collect();
        let contradiction = cells
            .iter()
            .any(|a| a.label.is_self_referential() && a.verdict.is_known_never_halt());

        Self {
            config,
            cells,
            affirmative,
            uncertain,
            self_referential,
            contradiction,
        }
    }

    /// One-line summary of the counts.
    pub fn headline(&self) -> String {
        format!(
            "{} cells assessed: {} known never to halt, {} not known",
            self.cells.len(),
            self.affirmative,
            self.uncertain
        )
    }

    /// Human-readable summary, one entry per line.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![self.headline()];

        if self.self_referential.is_empty() {
            lines.push("No cell applied the assessor to itself.".to_string());
        }
        for request in &self.self_referential {
            lines.push(format!("Self-referential cell: {}", request));
        }

        if self.contradiction {
            lines.push(
                "Contradiction: the assessor halted on itself, claiming that it does not halt."
                    .to_string(),
            );
        } else if !self.self_referential.is_empty() {
            lines.push(
                "No contradiction: the assessor did not halt on itself, so nothing is known."
                    .to_string(),
            );
        }

        lines
    }

    /// Write the summary to `sink` as plain lines.
    pub fn write_summary(&self, sink: &mut dyn OutputSink) -> DiagonalResult<()> {
        for line in self.summary_lines() {
            sink.write(&line, Style::Plain)?;
        }
        sink.flush()?;
        Ok(())
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> DiagonalResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the pretty-printed JSON report to `path`.
    pub fn write_json(&self, path: &Path) -> DiagonalResult<()> {
        std::fs::write(path, self.to_json_pretty()?).map_err(|source| DiagonalError::ReportFile {
            path: path.to_path_buf(),
            source,
        })
    }
}
