//! PDF/A compliance report types and data structures.
//!
//! Everything here except [`RawError`] is immutable once built. Fields are
//! private and exposed through accessors, so a finished [`ValidationResult`]
//! cannot be altered by report consumers.

use super::check::CheckIdentity;
use super::summary::Summary;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Statement used when no richer explanation of the result is computed.
pub const DEFAULT_STATEMENT: &str = "unknown";

static DEFAULT_INSTANCE: ValidationResult = ValidationResult {
    is_compliant: false,
    statement: Cow::Borrowed(DEFAULT_STATEMENT),
    summary: Summary::ZERO,
    check_audits: Vec::new(),
};

/// A single violation record as emitted by the validation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawError {
    /// Engine error code (e.g. `"3.1.2"`).
    pub code: String,
    /// Whether the engine flagged this record as a warning.
    #[serde(default)]
    pub is_warning: bool,
    /// Page the error was found on, if the engine knows it.
    #[serde(default)]
    pub page_number: Option<u32>,
    /// Free-text detail supplied by the engine.
    #[serde(default)]
    pub details: String,
}

impl RawError {
    /// Create a failure record with no page information.
    pub fn new(code: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            is_warning: false,
            page_number: None,
            details: details.into(),
        }
    }

    /// Create a warning record with no page information.
    pub fn warning(code: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            is_warning: true,
            ..Self::new(code, details)
        }
    }

    /// Set the page number.
    pub fn with_page(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    /// Severity of this record, decided once from the engine's flag.
    pub fn status(&self) -> Status {
        Status::from_warning_flag(self.is_warning)
    }
}

impl fmt::Display for RawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.details)?;
        if let Some(page) = self.page_number {
            write!(f, " (page {})", page)?;
        }
        Ok(())
    }
}

/// Outcome of one check occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The check passed
    Passed,
    /// The check failed
    Failed,
    /// The check raised a non-fatal warning
    Warning,
}

impl Status {
    /// Map the engine's boolean warning flag onto a status.
    ///
    /// The engine only reports problems, so a record that is not a warning
    /// is a failure.
    pub fn from_warning_flag(is_warning: bool) -> Self {
        if is_warning {
            Status::Warning
        } else {
            Status::Failed
        }
    }

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Passed => "PASSED",
            Status::Failed => "FAILED",
            Status::Warning => "WARNING",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where in the document an occurrence was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    page_number: u32,
}

impl Location {
    /// Document-level location (page unknown).
    pub const DOCUMENT: Location = Location { page_number: 0 };

    /// Location on a given page. `0` means document level.
    pub fn page(page_number: u32) -> Self {
        Self { page_number }
    }

    /// Resolve an optional engine page number, substituting document level.
    pub fn resolve(page_number: Option<u32>) -> Self {
        page_number.map_or(Self::DOCUMENT, Self::page)
    }

    /// Page number, `0` when unknown.
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Whether the location is document level rather than a specific page.
    pub fn is_document_level(&self) -> bool {
        self.page_number == 0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_document_level() {
            write!(f, "document")
        } else {
            write!(f, "page {}", self.page_number)
        }
    }
}

/// One concrete outcome of a check at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    status: Status,
    location: Location,
    message: String,
}

impl Occurrence {
    /// Create an occurrence.
    pub fn new(status: Status, location: Location, message: impl Into<String>) -> Self {
        Self {
            status,
            location,
            message: message.into(),
        }
    }

    /// Build the occurrence for a raw engine error.
    pub fn from_raw_error(error: &RawError) -> Self {
        Self::new(
            error.status(),
            Location::resolve(error.page_number),
            error.details.clone(),
        )
    }

    /// Outcome of the check.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Location of the occurrence.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Message describing the occurrence.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.status, self.location, self.message)
    }
}

/// All occurrences of one check found in a document.
///
/// An audit always holds at least one occurrence, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuditRecord")]
pub struct CheckAudit {
    identity: CheckIdentity,
    occurrences: Vec<Occurrence>,
}

/// Unchecked wire form of [`CheckAudit`].
#[derive(Deserialize)]
struct AuditRecord {
    identity: CheckIdentity,
    occurrences: Vec<Occurrence>,
}

impl TryFrom<AuditRecord> for CheckAudit {
    type Error = String;

    fn try_from(record: AuditRecord) -> std::result::Result<Self, Self::Error> {
        CheckAudit::from_occurrences(record.identity, record.occurrences)
            .ok_or_else(|| "check audit must contain at least one occurrence".to_string())
    }
}

impl CheckAudit {
    /// Create an audit, or `None` if `occurrences` is empty.
    pub fn from_occurrences(identity: CheckIdentity, occurrences: Vec<Occurrence>) -> Option<Self> {
        if occurrences.is_empty() {
            None
        } else {
            Some(Self {
                identity,
                occurrences,
            })
        }
    }

    /// Identity of the audited check.
    pub fn identity(&self) -> &CheckIdentity {
        &self.identity
    }

    /// Occurrences in encounter order. Never empty.
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    /// Number of occurrences with the given status.
    pub fn count_status(&self, status: Status) -> usize {
        self.occurrences
            .iter()
            .filter(|o| o.status == status)
            .count()
    }
}

/// Root of a compliance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_compliant: bool,
    statement: Cow<'static, str>,
    summary: Summary,
    check_audits: Vec<CheckAudit>,
}

impl ValidationResult {
    /// Create a result with the default statement.
    pub fn new(is_compliant: bool, summary: Summary, check_audits: Vec<CheckAudit>) -> Self {
        Self {
            is_compliant,
            statement: Cow::Borrowed(DEFAULT_STATEMENT),
            summary,
            check_audits,
        }
    }

    /// The shared "no validation performed" result.
    ///
    /// Not compliant, no audits, zero summary, default statement.
    pub fn default_instance() -> &'static ValidationResult {
        &DEFAULT_INSTANCE
    }

    /// Build a new result that carries a different statement.
    pub fn with_statement(&self, statement: impl Into<String>) -> Self {
        Self {
            statement: Cow::Owned(statement.into()),
            ..self.clone()
        }
    }

    /// Whether the engine judged the document compliant.
    pub fn is_compliant(&self) -> bool {
        self.is_compliant
    }

    /// Statement summarising the validation.
    pub fn statement(&self) -> &str {
        &self.statement
    }

    /// Numeric summary of the validation.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Audits, one per distinct check, in first-seen order.
    pub fn check_audits(&self) -> &[CheckAudit] {
        &self.check_audits
    }

    /// Find the audit for a check id.
    pub fn audit_for(&self, id: &str) -> Option<&CheckAudit> {
        self.check_audits.iter().find(|a| a.identity.id() == id)
    }

    /// Total number of occurrences across all audits.
    pub fn occurrence_count(&self) -> usize {
        self.check_audits.iter().map(|a| a.occurrences.len()).sum()
    }

    /// Check if any check failed.
    pub fn has_failures(&self) -> bool {
        self.summary.failed_count() > 0
    }

    /// Check if any warning was raised.
    pub fn has_warnings(&self) -> bool {
        self.summary.warning_count() > 0
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        DEFAULT_INSTANCE.clone()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} check(s), {}",
            if self.is_compliant {
                "compliant"
            } else {
                "not compliant"
            },
            self.statement,
            self.check_audits.len(),
            self.summary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_instance() {
        let result = ValidationResult::default_instance();
        assert!(!result.is_compliant());
        assert_eq!(result.statement(), "unknown");
        assert!(result.check_audits().is_empty());
        assert_eq!(*result.summary(), Summary::ZERO);
        assert!(std::ptr::eq(result, ValidationResult::default_instance()));
        assert_eq!(ValidationResult::default(), *result);
    }

    #[test]
    fn test_location_resolve() {
        assert_eq!(Location::resolve(None).page_number(), 0);
        assert!(Location::resolve(None).is_document_level());
        assert_eq!(Location::resolve(Some(7)).page_number(), 7);
        assert_eq!(format!("{}", Location::page(3)), "page 3");
        assert_eq!(format!("{}", Location::DOCUMENT), "document");
    }

    #[test]
    fn test_status_from_flag() {
        assert_eq!(Status::from_warning_flag(true), Status::Warning);
        assert_eq!(Status::from_warning_flag(false), Status::Failed);
        assert_eq!(Status::Passed.as_str(), "PASSED");
    }

    #[test]
    fn test_occurrence_from_raw_error() {
        let error = RawError::warning("2.4.3", "invalid rendering intent").with_page(4);
        let occurrence = Occurrence::from_raw_error(&error);
        assert_eq!(occurrence.status(), Status::Warning);
        assert_eq!(occurrence.location().page_number(), 4);
        assert_eq!(occurrence.message(), "invalid rendering intent");
    }

    #[test]
    fn test_check_audit_rejects_empty() {
        let identity = CheckIdentity::new("1.0", "syntax");
        assert!(CheckAudit::from_occurrences(identity.clone(), Vec::new()).is_none());

        let audit = CheckAudit::from_occurrences(
            identity,
            vec![
                Occurrence::new(Status::Failed, Location::page(1), "a"),
                Occurrence::new(Status::Warning, Location::DOCUMENT, "b"),
            ],
        )
        .unwrap();
        assert_eq!(audit.occurrences().len(), 2);
        assert_eq!(audit.count_status(Status::Failed), 1);
        assert_eq!(audit.count_status(Status::Passed), 0);
    }

    #[test]
    fn test_with_statement_builds_new_result() {
        let original = ValidationResult::new(true, Summary::ZERO, Vec::new());
        let explained = original.with_statement("PDF/A-1b profile satisfied");
        assert_eq!(original.statement(), DEFAULT_STATEMENT);
        assert_eq!(explained.statement(), "PDF/A-1b profile satisfied");
        assert!(explained.is_compliant());
    }

    #[test]
    fn test_raw_error_display() {
        let error = RawError::new("3.1.1", "font not embedded").with_page(2);
        assert_eq!(format!("{}", error), "[3.1.1] font not embedded (page 2)");
    }
}
