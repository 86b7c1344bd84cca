//! Property-based invariant tests for error aggregation.
//!
//! 1. Every raw error appears exactly once as an occurrence
//! 2. Failed plus warning counts equal the number of errors
//! 3. Aggregating the same input twice gives the same result
//! 4. Missing page numbers resolve to page 0
//! 5. The compliance verdict is always the engine's flag
//! 6. Audits are never empty and have distinct identities

use pdfa_report::compliance::{aggregate, RawError, Status};
use proptest::prelude::*;
use std::collections::HashSet;

// ── Strategies ──────────────────────────────────────────────────────────

fn code_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u8..9, 0u8..4).prop_map(|(family, clause)| format!("{}.{}", family, clause)),
        "[A-Z]{1,3}[0-9]{0,2}",
    ]
}

fn raw_error_strategy() -> impl Strategy<Value = RawError> {
    (
        code_strategy(),
        any::<bool>(),
        proptest::option::of(1u32..500),
        "[a-z <>&]{0,24}",
    )
        .prop_map(|(code, is_warning, page_number, details)| RawError {
            code,
            is_warning,
            page_number,
            details,
        })
}

fn errors_strategy() -> impl Strategy<Value = Vec<RawError>> {
    proptest::collection::vec(raw_error_strategy(), 0..64)
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_error_is_one_occurrence(errors in errors_strategy(), valid in any::<bool>()) {
        let result = aggregate(valid, &errors);
        prop_assert_eq!(result.occurrence_count(), errors.len());
    }

    #[test]
    fn counts_cover_all_errors(errors in errors_strategy()) {
        let result = aggregate(false, &errors);
        let summary = result.summary();
        let warnings = errors.iter().filter(|e| e.is_warning).count();

        prop_assert_eq!(summary.failed_count() + summary.warning_count(), errors.len());
        prop_assert_eq!(summary.warning_count(), warnings);
        prop_assert_eq!(summary.passed_count(), 0);
    }

    #[test]
    fn aggregation_is_deterministic(errors in errors_strategy(), valid in any::<bool>()) {
        prop_assert_eq!(aggregate(valid, &errors), aggregate(valid, &errors));
    }

    #[test]
    fn missing_pages_resolve_to_zero(errors in errors_strategy()) {
        let result = aggregate(false, &errors);
        let occurrences: Vec<_> = result
            .check_audits()
            .iter()
            .flat_map(|a| a.occurrences())
            .collect();
        let unpaged_errors = errors.iter().filter(|e| e.page_number.is_none()).count();
        let zero_pages = occurrences
            .iter()
            .filter(|o| o.location().page_number() == 0)
            .count();

        prop_assert_eq!(zero_pages, unpaged_errors);
    }

    #[test]
    fn verdict_is_passed_through(errors in errors_strategy(), valid in any::<bool>()) {
        prop_assert_eq!(aggregate(valid, &errors).is_compliant(), valid);
    }

    #[test]
    fn audits_are_distinct_and_non_empty(errors in errors_strategy()) {
        let result = aggregate(false, &errors);
        let mut seen = HashSet::new();
        for audit in result.check_audits() {
            prop_assert!(!audit.occurrences().is_empty());
            prop_assert!(seen.insert(audit.identity().clone()));
            for occurrence in audit.occurrences() {
                prop_assert!(matches!(occurrence.status(), Status::Failed | Status::Warning));
            }
        }
        let distinct_codes: HashSet<&str> = errors.iter().map(|e| e.code.as_str()).collect();
        prop_assert_eq!(seen.len(), distinct_codes.len());
    }
}
