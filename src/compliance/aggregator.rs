//! Aggregation of raw engine errors into a compliance report.
//!
//! This module turns the flat error list produced by a validation engine into
//! a [`ValidationResult`]: one [`CheckAudit`] per distinct check identity,
//! with every error kept as an [`Occurrence`], plus a [`Summary`](super::Summary) of
//! failures and warnings.

use super::check::{ByCode, CheckIdentity, IdentityPolicy};
use super::engine::EngineResult;
use super::summary::Counter;
use super::types::{CheckAudit, Occurrence, RawError, ValidationResult};
use indexmap::IndexMap;

/// Groups raw engine errors into check audits.
///
/// The aggregator never decides compliance itself: the verdict is always the
/// engine's top-level flag, even when every reported error is a warning.
///
/// # Example
///
/// ```
/// use pdfa_report::compliance::{RawError, ResultAggregator};
///
/// let errors = vec![
///     RawError::new("3.1.2", "font Arial is not embedded").with_page(1),
///     RawError::warning("3.1.2", "font Courier is not embedded").with_page(4),
/// ];
/// let result = ResultAggregator::new().aggregate(false, &errors);
///
/// assert!(!result.is_compliant());
/// assert_eq!(result.check_audits().len(), 1);
/// assert_eq!(result.summary().failed_count(), 1);
/// assert_eq!(result.summary().warning_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResultAggregator<P = ByCode> {
    policy: P,
}

impl ResultAggregator<ByCode> {
    /// Create an aggregator that groups errors by code.
    pub fn new() -> Self {
        Self { policy: ByCode }
    }
}

impl<P: IdentityPolicy> ResultAggregator<P> {
    /// Create an aggregator with a custom identity policy.
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    /// Build a validation result from the engine verdict and its errors.
    ///
    /// Audits are emitted in the order their identity was first seen, and
    /// occurrences keep the order of `errors`.
    pub fn aggregate(&self, top_level_valid: bool, errors: &[RawError]) -> ValidationResult {
        let mut counter = Counter::new();
        let mut grouped: IndexMap<CheckIdentity, Vec<Occurrence>> = IndexMap::new();

        for error in errors {
            let identity = self.policy.identify(error);
            if error.page_number.is_none() {
                log::trace!("Error {} has no page number, using document level", error.code);
            }

            counter.record(error.status());

            grouped
                .entry(identity)
                .or_default()
                .push(Occurrence::from_raw_error(error));
        }

        let check_audits: Vec<CheckAudit> = grouped
            .into_iter()
            .filter_map(|(identity, occurrences)| {
                log::debug!(
                    "Check {} ({}): {} occurrence(s)",
                    identity.id(),
                    identity.message(),
                    occurrences.len()
                );
                CheckAudit::from_occurrences(identity, occurrences)
            })
            .collect();

        let summary = counter.snapshot();
        log::debug!(
            "Aggregated {} error(s) into {} check audit(s): {}",
            errors.len(),
            check_audits.len(),
            summary
        );

        ValidationResult::new(top_level_valid, summary, check_audits)
    }

    /// Build a validation result from a complete engine result.
    pub fn aggregate_engine_result(&self, engine_result: &EngineResult) -> ValidationResult {
        self.aggregate(engine_result.is_valid, &engine_result.errors)
    }
}

/// Aggregate errors with the default grouping by code.
pub fn aggregate(top_level_valid: bool, errors: &[RawError]) -> ValidationResult {
    ResultAggregator::new().aggregate(top_level_valid, errors)
}
