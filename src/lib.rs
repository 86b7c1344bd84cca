// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF/A Report
//!
//! Structured compliance reports for PDF/A validation.
//!
//! A PDF/A validation engine reports a top-level verdict and a flat list of
//! raw errors. This crate groups those errors into per-rule check audits,
//! tallies failures and warnings, and publishes the outcome as an immutable
//! [`ValidationResult`](compliance::ValidationResult) that serializes to JSON
//! or XML.
//!
//! ## Core Features
//!
//! - **Aggregation**: one audit per distinct check, every error kept as an
//!   occurrence with its page and message
//! - **Swappable grouping**: identity derivation sits behind
//!   [`IdentityPolicy`](compliance::IdentityPolicy)
//! - **Engine boundary**: any engine implementing
//!   [`ValidationEngine`](compliance::ValidationEngine) can be driven by
//!   [`validate_stream`](compliance::validate_stream)
//! - **Wire formats**: JSON and XML encoders with stable field names
//!
//! ## Quick Start
//!
//! ```
//! use pdfa_report::compliance::{aggregate, RawError};
//! use pdfa_report::report::to_json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let errors = vec![
//!     RawError::new("3.1.2", "font Arial is not embedded").with_page(1),
//!     RawError::warning("7.1", "document title missing"),
//! ];
//! let result = aggregate(false, &errors);
//!
//! println!("{}", result);
//! println!("{}", to_json(&result, true)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Compliance aggregation
pub mod compliance;

// Report encoders
pub mod report;

// Re-exports
pub use compliance::{CheckAudit, RawError, Summary, ValidationResult};
pub use config::{GroupingKey, ReportConfig, ReportFormat};
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
