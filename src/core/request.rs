//! Assessment requests, labels and verdicts.

use serde::Serialize;

/// "Does computation `q`, applied to `n`, halt?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AssessmentRequest {
    pub computation_index: usize,
    pub natural_number: usize,
}

impl AssessmentRequest {
    pub fn new(computation_index: usize, natural_number: usize) -> Self {
        Self {
            computation_index,
            natural_number,
        }
    }

    /// The diagonal case `A(n, n)`.
    pub fn is_diagonal(&self) -> bool {
        self.computation_index == self.natural_number
    }
}

impl std::fmt::Display for AssessmentRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.computation_index, self.natural_number)
    }
}

/// The logical form under which a request is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum AssessmentLabel {
    /// The general assessor `A(q, n)`.
    Assessor { q: usize, n: usize },
    /// The assessor applied to its own index: the self-referential sentence.
    SelfReference { n: usize },
}

impl AssessmentLabel {
    pub fn is_self_referential(&self) -> bool {
        matches!(self, AssessmentLabel::SelfReference { .. })
    }
}

impl std::fmt::Display for AssessmentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssessmentLabel::Assessor { q, n } => write!(f, "Assessor({}, {})", q, n),
            AssessmentLabel::SelfReference { n } => write!(f, "Computation_{}({})", n, n),
        }
    }
}

/// Outcome of the simulated halting test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The assessor halted: the computation is known never to halt.
    KnownNeverHalts,
    /// The assessor did not halt: nothing is known.
    NotKnown,
}

impl Verdict {
    pub fn is_known_never_halt(&self) -> bool {
        matches!(self, Verdict::KnownNeverHalts)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::KnownNeverHalts => write!(f, "known never to halt"),
            Verdict::NotKnown => write!(f, "not known"),
        }
    }
}

/// Full record of one dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub request: AssessmentRequest,
    pub label: AssessmentLabel,
    pub verdict: Verdict,
    /// Passes made through the controlled loop (0 on the halting branch).
    pub loop_passes: usize,
}
