//! The assessment engine.
//!
//! Models a hypothetical halting oracle, the *assessor*, applied to the
//! computations of a [`Registry`]. One registry slot holds the assessor
//! itself, which is where the diagonal argument bites.
//!
//! ## Dispatch
//!
//! `assess(q, n)` with `q != n` is the general assessor `A(q, n)`. The diagonal
//! case `A(n, n)` is a computation over a single natural number, so it is
//! re-dispatched to [`AssessmentEngine::assess_unary`], which asks whether the
//! slot at `n` *is* the assessor and labels the request accordingly.
//!
//! ## The Halting Test
//!
//! The simulated assessor halts (reporting "known never to halt") exactly
//! when `n mod 3 == 0`. Otherwise it does not halt, which is modelled by the
//! controlled loop: a search that would continue forever, interrupted on its
//! second pass. With the specialized test enabled, the distinguished cell
//! always takes the controlled loop, replacing the contradictory
//! "halts, therefore known not to halt" line for the self-referential sentence.

mod config;
mod driver;
mod format;

pub use config::EngineConfig;
pub use driver::{grid_requests, run_grid, GridReport};
pub use format::{does_not_halt_line, halts_line};

use tracing::{debug, trace};

use crate::audit::{AuditEntry, AuditLogger};
use crate::core::{
    Assessment, AssessmentLabel, AssessmentRequest, DiagonalError, DiagonalResult, Registry,
    Verdict,
};
use crate::sink::{OutputSink, Style};

/// Passes the controlled loop makes before the demonstrator intervenes.
pub const CONTROLLED_LOOP_PASSES: usize = 2;

/// Applies the simulated assessor to registry computations.
pub struct AssessmentEngine {
    config: EngineConfig,
    registry: Registry,
    audit: Option<AuditLogger>,
}

impl AssessmentEngine {
    /// Validate `config` and build the registry it describes.
    pub fn new(config: EngineConfig) -> DiagonalResult<Self> {
        config.validate()?;
        let registry = Registry::build(
            config.grid_size,
            config.distinguished_index,
            config.assessor_present,
        )?;

        debug!(
            grid_size = config.grid_size,
            distinguished_index = config.distinguished_index,
            specialized_test = config.specialized_test,
            assessor_present = config.assessor_present,
            "Registry built"
        );

        Ok(Self {
            config,
            registry,
            audit: None,
        })
    }

    /// Record every assessment in `logger`.
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Does computation `q`, applied to `n`, halt?
    ///
    /// Emits exactly one line to `sink`.
    pub fn assess(
        &self,
        q: usize,
        n: usize,
        sink: &mut dyn OutputSink,
    ) -> DiagonalResult<Assessment> {
        if q == 0 || n == 0 {
            return Err(DiagonalError::NonPositiveRequest {
                computation_index: q,
                natural_number: n,
            });
        }

        let request = AssessmentRequest::new(q, n);
        if request.is_diagonal() {
            return self.assess_unary(n, sink);
        }

        self.run_test(AssessmentLabel::Assessor { q, n }, request, sink)
    }

    /// The unary assessor `A(n)`, equivalent to the diagonal case `A(n, n)`.
    ///
    /// The label depends on what is bound at slot `n`, not on the value of `n`.
    pub fn assess_unary(&self, n: usize, sink: &mut dyn OutputSink) -> DiagonalResult<Assessment> {
        if n == 0 {
            return Err(DiagonalError::NonPositiveRequest {
                computation_index: n,
                natural_number: n,
            });
        }

        let label = if self.registry.is_assessor_at(n) {
            AssessmentLabel::SelfReference { n }
        } else {
            AssessmentLabel::Assessor { q: n, n }
        };
        self.run_test(label, AssessmentRequest::new(n, n), sink)
    }

    /// Run the simulated halting test and report whether the computation is
    /// known never to halt.
    pub fn is_known_never_halt(
        &self,
        label: AssessmentLabel,
        request: AssessmentRequest,
        sink: &mut dyn OutputSink,
    ) -> DiagonalResult<bool> {
        let assessment = self.run_test(label, request, sink)?;
        Ok(assessment.verdict.is_known_never_halt())
    }

    /// Whether `request` is the cell the specialized test overrides.
    pub fn is_overridden(&self, request: &AssessmentRequest) -> bool {
        let d = self.registry.distinguished_index();
        self.config.specialized_test
            && request.computation_index == d
            && request.natural_number == d
    }

    fn run_test(
        &self,
        label: AssessmentLabel,
        request: AssessmentRequest,
        sink: &mut dyn OutputSink,
    ) -> DiagonalResult<Assessment> {
        let halts = !self.is_overridden(&request) && request.natural_number % 3 == 0;

        let (verdict, loop_passes) = if halts {
            sink.write(&halts_line(&label, &request), Style::Affirmative)?;
            (Verdict::KnownNeverHalts, 0)
        } else {
            let passes = self.controlled_loop(&label, &request, sink)?;
            (Verdict::NotKnown, passes)
        };

        let assessment = Assessment {
            request,
            label,
            verdict,
            loop_passes,
        };

        debug!(
            q = request.computation_index,
            n = request.natural_number,
            label = %label,
            verdict = %verdict,
            "Assessed"
        );

        if let Some(audit) = &self.audit {
            audit.log(AuditEntry::assessment(&assessment))?;
        }

        Ok(assessment)
    }

    /// The assessor's non-halting search.
    ///
    /// Each pass first checks whether the demonstrator has already stepped
    /// in; if so the search is abandoned. Otherwise it reports that the
    /// assessor does not halt and marks the intervention. The second pass is
    /// always the exit.
    fn controlled_loop(
        &self,
        label: &AssessmentLabel,
        request: &AssessmentRequest,
        sink: &mut dyn OutputSink,
    ) -> DiagonalResult<usize> {
        let mut intervened = false;
        let mut passes = 0;

        loop {
            passes += 1;
            trace!(pass = passes, intervened, request = %request, "Controlled loop");

            if intervened {
                break;
            }

            intervened = true;
            sink.write(&does_not_halt_line(label, request), Style::Uncertain)?;
        }

        debug_assert_eq!(passes, CONTROLLED_LOOP_PASSES);
        Ok(passes)
    }
}
