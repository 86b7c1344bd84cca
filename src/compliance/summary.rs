//! Validation counters and the immutable summary they produce.

use super::types::Status;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable tally of check outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    failed_count: usize,
    warning_count: usize,
    #[serde(default, skip_serializing_if = "is_zero")]
    passed_count: usize,
}

fn is_zero(count: &usize) -> bool {
    *count == 0
}

impl Summary {
    /// Summary with every count at zero.
    pub const ZERO: Summary = Summary {
        failed_count: 0,
        warning_count: 0,
        passed_count: 0,
    };

    /// Number of failed checks.
    pub fn failed_count(&self) -> usize {
        self.failed_count
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Number of passed checks. Zero with engines that only report problems.
    pub fn passed_count(&self) -> usize {
        self.passed_count
    }

    /// Total number of recorded outcomes.
    pub fn total(&self) -> usize {
        self.failed_count + self.warning_count + self.passed_count
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed, {} warning(s)",
            self.failed_count, self.warning_count
        )?;
        if self.passed_count > 0 {
            write!(f, ", {} passed", self.passed_count)?;
        }
        Ok(())
    }
}

/// Running tally of check outcomes, finalized with [`Counter::snapshot`].
#[derive(Debug, Clone, Default)]
pub struct Counter {
    failed: usize,
    warnings: usize,
    passed: usize,
}

impl Counter {
    /// Create a counter with every count at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed check.
    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// Record a warning.
    pub fn record_warning(&mut self) {
        self.warnings += 1;
    }

    /// Record a passed check.
    pub fn record_pass(&mut self) {
        self.passed += 1;
    }

    /// Record an outcome by status.
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Failed => self.record_failure(),
            Status::Warning => self.record_warning(),
            Status::Passed => self.record_pass(),
        }
    }

    /// Copy the current counts into an immutable summary.
    ///
    /// Later recording does not affect summaries already taken.
    pub fn snapshot(&self) -> Summary {
        Summary {
            failed_count: self.failed,
            warning_count: self.warnings,
            passed_count: self.passed,
        }
    }
}
