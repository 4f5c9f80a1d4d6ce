// ═══════════════════════════════════════════════════════════════════════════
// Layer 0: Core (No internal dependencies)
// ═══════════════════════════════════════════════════════════════════════════
pub mod core;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 1: Output (depends on core)
// ═══════════════════════════════════════════════════════════════════════════
pub mod sink;
pub mod audit;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 2: Engine (depends on core, output)
// ═══════════════════════════════════════════════════════════════════════════
pub mod engine;

pub use self::core::{
    Assessment, AssessmentLabel, AssessmentRequest, Computation, DiagonalError, DiagonalResult,
    ErrorCategory, Registry, Verdict,
};
pub use sink::{CapturedLine, CapturingSink, ConsoleSink, OutputSink, Style};
pub use audit::{AuditConfig, AuditEntry, AuditFormat, AuditLogger};
pub use engine::{
    grid_requests, run_grid, AssessmentEngine, EngineConfig, GridReport, CONTROLLED_LOOP_PASSES,
};
