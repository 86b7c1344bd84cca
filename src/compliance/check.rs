//! Check identity derivation.
//!
//! A [`CheckIdentity`] is the grouping key for raw engine errors: every error
//! that maps to the same identity ends up in the same audit. How an identity
//! is derived is isolated behind [`IdentityPolicy`] so that the key can be
//! refined without touching aggregation.

use super::types::RawError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a distinct rule or clause violated by a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckIdentity {
    id: String,
    message: String,
}

impl CheckIdentity {
    /// Create an identity from an id and a human message.
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Rule id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human readable description of the rule.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CheckIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.message)
    }
}

/// Strategy for deriving a [`CheckIdentity`] from a raw error.
///
/// Implementations must be pure: equal input always yields equal identities.
pub trait IdentityPolicy {
    /// Derive the grouping identity for an error.
    fn identify(&self, error: &RawError) -> CheckIdentity;
}

impl<F> IdentityPolicy for F
where
    F: Fn(&RawError) -> CheckIdentity,
{
    fn identify(&self, error: &RawError) -> CheckIdentity {
        self(error)
    }
}

/// Group by error code alone.
///
/// The message is derived from the code's rule family, so two errors with
/// the same code always share an identity. Distinct clauses that share a
/// code are merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByCode;

impl IdentityPolicy for ByCode {
    fn identify(&self, error: &RawError) -> CheckIdentity {
        CheckIdentity::new(error.code.as_str(), rule_family(&error.code))
    }
}

/// Group by error code and detail text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByCodeAndDetails;

impl IdentityPolicy for ByCodeAndDetails {
    fn identify(&self, error: &RawError) -> CheckIdentity {
        CheckIdentity::new(error.code.as_str(), error.details.trim())
    }
}

/// Derive the identity of an error with the default [`ByCode`] policy.
pub fn derive_identity(error: &RawError) -> CheckIdentity {
    ByCode.identify(error)
}

/// Describe the rule family of a Preflight-style dotted error code.
pub fn rule_family(code: &str) -> &'static str {
    let family = code.trim().split('.').next().unwrap_or_default();
    match family {
        "1" => "File structure or syntax violation",
        "2" => "Graphics violation",
        "3" => "Font violation",
        "4" => "Transparency violation",
        "5" => "Annotation violation",
        "6" => "Action violation",
        "7" => "Metadata violation",
        "8" => "PDF processing failure",
        _ => "Unclassified violation",
    }
}
