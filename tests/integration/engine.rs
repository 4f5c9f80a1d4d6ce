//! Integration tests for the AssessmentEngine.
//!
//! These tests verify:
//! - Request normalization (general vs diagonal dispatch)
//! - Self-identification by registry slot
//! - The modulo rule and the specialized self-referential override
//! - The controlled loop's single emission
//! - Configuration errors at construction

#![cfg(test)]

use crate::common::*;

use diagonal::*;

// =============================================================================
// Halting Branch
// =============================================================================

mod halting {
    use super::*;

    #[test]
    fn diagonal_multiples_of_three_emit_one_affirmative_line() {
        // Arrange
        let engine = default_engine();

        for n in [3, 6] {
            // Act
            let (a, sink) = assess(&engine, n, n);

            // Assert
            assert_single_line(&sink, Style::Affirmative);
            assert_eq!(a.verdict, Verdict::KnownNeverHalts);
        }
    }

    #[test]
    fn assessor_3_3_reads_as_general_form() {
        // Arrange
        let engine = default_engine();

        // Act
        let (a, sink) = assess(&engine, 3, 3);

        // Assert
        assert_eq!(a.label, AssessmentLabel::Assessor { q: 3, n: 3 });
        assert_eq!(sink.texts(), vec![lines::ASSESSOR_3_3]);
    }
}

// =============================================================================
// Controlled Loop
// =============================================================================

mod controlled_loop {
    use super::*;

    #[test]
    fn non_multiples_emit_exactly_one_uncertain_line() {
        // Arrange
        let engine = default_engine();

        for q in 1..=8 {
            for n in (1..=8).filter(|n| n % 3 != 0) {
                // Act
                let (a, sink) = assess(&engine, q, n);

                // Assert
                assert_single_line(&sink, Style::Uncertain);
                assert_eq!(a.loop_passes, CONTROLLED_LOOP_PASSES);
            }
        }
    }

    #[test]
    fn assessor_7_7_does_not_halt() {
        // Arrange
        let engine = default_engine();

        // Act
        let (a, sink) = assess(&engine, 7, 7);

        // Assert
        assert_eq!(a.verdict, Verdict::NotKnown);
        assert_eq!(sink.texts(), vec![lines::ASSESSOR_7_7]);
    }

    #[test]
    fn is_known_never_halt_reports_false_from_loop() {
        // Arrange
        let engine = default_engine();
        let mut sink = CapturingSink::new();

        // Act
        let known = engine
            .is_known_never_halt(
                AssessmentLabel::Assessor { q: 2, n: 5 },
                AssessmentRequest::new(2, 5),
                &mut sink,
            )
            .unwrap();

        // Assert
        assert!(!known);
        assert_single_line(&sink, Style::Uncertain);
    }
}

// =============================================================================
// Self-Reference
// =============================================================================

mod self_reference {
    use super::*;

    #[test]
    fn specialized_off_emits_contradictory_affirmative_line() {
        // Arrange
        let engine = default_engine();

        // Act
        let (a, sink) = assess(&engine, 6, 6);

        // Assert
        assert!(a.label.is_self_referential());
        assert_eq!(sink.texts(), vec![lines::SELF_REFERENCE_HALTS]);
        assert_single_line(&sink, Style::Affirmative);
    }

    #[test]
    fn specialized_on_emits_uncertain_line() {
        // Arrange
        let engine = specialized_engine();

        // Act
        let (a, sink) = assess(&engine, 6, 6);

        // Assert
        assert_eq!(a.verdict, Verdict::NotKnown);
        assert_eq!(sink.texts(), vec![lines::SELF_REFERENCE_DOES_NOT_HALT]);
        assert_single_line(&sink, Style::Uncertain);
    }

    #[test]
    fn off_diagonal_never_uses_computation_label() {
        // Arrange
        let engine = default_engine();

        for q in 1..=8 {
            for n in (1..=8).filter(|&n| n != q) {
                // Act
                let (a, sink) = assess(&engine, q, n);

                // Assert
                assert_eq!(a.label, AssessmentLabel::Assessor { q, n });
                assert!(sink.texts()[0].starts_with(&format!("Assessor({}, {})", q, n)));
            }
        }
    }

    #[test]
    fn self_identification_follows_the_slot() {
        // Arrange: assessor moved to slot 4
        let engine = engine_with(EngineConfig::default().with_distinguished_index(4));

        // Act
        let (at_four, _) = assess(&engine, 4, 4);
        let (at_six, _) = assess(&engine, 6, 6);

        // Assert
        assert_eq!(at_four.label, AssessmentLabel::SelfReference { n: 4 });
        assert_eq!(at_six.label, AssessmentLabel::Assessor { q: 6, n: 6 });
    }

    #[test]
    fn specialized_override_follows_distinguished_index() {
        // Arrange: assessor at slot 3, where the modulo rule would say "halts"
        let engine = engine_with(
            EngineConfig::default()
                .with_distinguished_index(3)
                .with_specialized_test(true),
        );

        // Act
        let (at_three, _) = assess(&engine, 3, 3);
        let (at_six, sink) = assess(&engine, 6, 6);

        // Assert
        assert_eq!(at_three.verdict, Verdict::NotKnown);
        assert_eq!(at_six.verdict, Verdict::KnownNeverHalts);
        assert!(sink.texts()[0].starts_with("Assessor(6, 6) halts"));
    }
}

// =============================================================================
// Configuration
// =============================================================================

mod configuration {
    use super::*;

    #[test]
    fn distinguished_index_outside_grid_fails_fast() {
        // Arrange
        let config = EngineConfig::default().with_grid_size(4);

        // Act
        let result = AssessmentEngine::new(config);

        // Assert
        match result {
            Err(e) => {
                assert!(e.is_config());
                assert_eq!(e.category(), ErrorCategory::Config);
            }
            Ok(_) => panic!("expected a configuration error"),
        }
    }

    #[test]
    fn requests_beyond_the_grid_are_assessed() {
        // Arrange
        let engine = default_engine();

        // Act
        let (beyond_diagonal, sink) = assess(&engine, 9, 9);
        let (beyond_both, _) = assess(&engine, 12, 40);

        // Assert
        assert_eq!(beyond_diagonal.label, AssessmentLabel::Assessor { q: 9, n: 9 });
        assert_eq!(beyond_diagonal.verdict, Verdict::KnownNeverHalts);
        assert_eq!(
            sink.texts(),
            vec!["Assessor(9, 9) halts, therefore the program knows that Computation_9(9) does not halt."]
        );
        assert_eq!(beyond_both.verdict, Verdict::NotKnown);
    }

    #[test]
    fn zero_indices_are_rejected() {
        // Arrange
        let engine = default_engine();
        let mut sink = CapturingSink::new();

        // Act
        let result = engine.assess(3, 0, &mut sink);

        // Assert
        match result {
            Err(e) => assert_eq!(e.category(), ErrorCategory::Request),
            Ok(_) => panic!("expected a request error"),
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn registry_has_exactly_one_assessor() {
        // Arrange
        let engine = default_engine();

        // Act
        let assessors: Vec<&Computation> =
            engine.registry().iter().filter(|c| c.is_assessor()).collect();

        // Assert
        assert_eq!(assessors.len(), 1);
        assert_eq!(assessors[0].index(), 6);
    }
}
