//! Result line wording.

use crate::core::{AssessmentLabel, AssessmentRequest};

/// Line emitted when the assessor halts: the computation is known never to halt.
pub fn halts_line(label: &AssessmentLabel, request: &AssessmentRequest) -> String {
    format!(
        "{} halts, therefore the program knows that Computation_{}({}) does not halt.",
        label, request.computation_index, request.natural_number
    )
}

/// Line emitted from the controlled loop: the assessor does not halt.
pub fn does_not_halt_line(label: &AssessmentLabel, request: &AssessmentRequest) -> String {
    format!(
        "{} does not halt, therefore the program does not know if Computation_{}({}) halts.",
        label, request.computation_index, request.natural_number
    )
}
