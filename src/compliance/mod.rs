//! PDF/A compliance reporting.
//!
//! This module converts the flat list of raw errors produced by a PDF/A
//! validation engine into a structured [`ValidationResult`]: a compliance
//! verdict, a numeric [`Summary`], and one [`CheckAudit`] per distinct check.
//!
//! ## Pipeline
//!
//! 1. The engine parses the PDF and reports `(is_valid, errors)`
//!    ([`ValidationEngine`], [`EngineResult`])
//! 2. Each error gets a [`CheckIdentity`] ([`IdentityPolicy`]), a [`Status`]
//!    and a [`Location`]
//! 3. Errors are grouped by identity and counted ([`ResultAggregator`], [`Counter`])
//! 4. The immutable [`ValidationResult`] is assembled
//!
//! ## Example
//!
//! ```
//! use pdfa_report::compliance::{validate_stream, ReplayEngine};
//!
//! let recorded = br#"{"isValid": false, "errors": [
//!     {"code": "7.1", "isWarning": false, "details": "missing pdfaid:part"}
//! ]}"#;
//! let result = validate_stream(&recorded[..], &ReplayEngine::new())?;
//!
//! assert!(!result.is_compliant());
//! assert_eq!(result.check_audits()[0].identity().id(), "7.1");
//! # Ok::<(), pdfa_report::error::Error>(())
//! ```
//!
//! ## Standards Reference
//!
//! - ISO 19005-1:2005 (PDF/A-1)
//! - ISO 19005-2:2011 (PDF/A-2)
//! - ISO 19005-3:2012 (PDF/A-3)

mod aggregator;
mod check;
mod engine;
mod replay;
mod summary;
mod types;

pub use aggregator::{aggregate, ResultAggregator};
pub use check::{
    derive_identity, rule_family, ByCode, ByCodeAndDetails, CheckIdentity, IdentityPolicy,
};
pub use engine::{
    validate_bytes, validate_bytes_with, validate_stream, validate_stream_with, EngineResult,
    ParsedDocument, ValidationEngine,
};
pub use replay::{ReplayDocument, ReplayEngine};
pub use summary::{Counter, Summary};
pub use types::{
    CheckAudit, Location, Occurrence, RawError, Status, ValidationResult, DEFAULT_STATEMENT,
};
