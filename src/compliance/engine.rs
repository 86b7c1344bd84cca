//! Boundary to the external PDF/A validation engine.
//!
//! The engine is a black box that parses PDF bytes into a document handle
//! and validates it, reporting a verdict and a list of raw errors. This
//! module drives it and hands the outcome to the aggregator.
//!
//! An invalid document is not an error: it comes back as a
//! [`ValidationResult`] with `is_compliant() == false`. Only read, parse and
//! engine faults are returned as [`Error`].

use super::aggregator::ResultAggregator;
use super::check::IdentityPolicy;
use super::types::{RawError, ValidationResult};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Verdict and raw errors reported by the engine for one document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineResult {
    /// Engine's top-level validity verdict.
    pub is_valid: bool,
    /// Raw errors in the order the engine reported them.
    #[serde(default)]
    pub errors: Vec<RawError>,
}

/// A document parsed by a validation engine.
///
/// The handle owns whatever engine resources the parsed document holds and
/// releases them when dropped.
pub trait ParsedDocument {
    /// Run validation on the parsed document.
    fn validate(&mut self) -> Result<EngineResult>;
}

/// A PDF/A validation engine.
pub trait ValidationEngine {
    /// Parsed document handle produced by this engine.
    type Document: ParsedDocument;

    /// Parse raw PDF bytes.
    ///
    /// Returns [`Error::Malformed`] when the bytes cannot be parsed.
    fn parse(&self, bytes: &[u8]) -> Result<Self::Document>;
}

/// Validate an in-memory PDF with the default aggregator.
pub fn validate_bytes<E>(bytes: &[u8], engine: &E) -> Result<ValidationResult>
where
    E: ValidationEngine + ?Sized,
{
    validate_bytes_with(bytes, engine, &ResultAggregator::new())
}

/// Validate an in-memory PDF with a specific aggregator.
pub fn validate_bytes_with<E, P>(
    bytes: &[u8],
    engine: &E,
    aggregator: &ResultAggregator<P>,
) -> Result<ValidationResult>
where
    E: ValidationEngine + ?Sized,
    P: IdentityPolicy,
{
    let mut document = engine.parse(bytes).inspect_err(|e| {
        log::warn!("Engine could not parse {} byte(s): {}", bytes.len(), e);
    })?;

    let outcome = document.validate();
    // Release the engine handle before any fault propagates.
    drop(document);

    let engine_result = outcome.inspect_err(|e| log::warn!("Validation did not complete: {}", e))?;
    log::debug!(
        "Engine verdict: valid={}, {} raw error(s)",
        engine_result.is_valid,
        engine_result.errors.len()
    );

    Ok(aggregator.aggregate_engine_result(&engine_result))
}

/// Read a PDF byte stream and validate it with the default aggregator.
///
/// # Errors
///
/// - [`Error::Io`] if the stream cannot be read
/// - [`Error::Malformed`] if the engine cannot parse the bytes
/// - [`Error::Engine`] if the engine faults during validation
pub fn validate_stream<R, E>(source: R, engine: &E) -> Result<ValidationResult>
where
    R: Read,
    E: ValidationEngine + ?Sized,
{
    validate_stream_with(source, engine, &ResultAggregator::new())
}

/// Read a PDF byte stream and validate it with a specific aggregator.
pub fn validate_stream_with<R, E, P>(
    mut source: R,
    engine: &E,
    aggregator: &ResultAggregator<P>,
) -> Result<ValidationResult>
where
    R: Read,
    E: ValidationEngine + ?Sized,
    P: IdentityPolicy,
{
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;
    if bytes.is_empty() {
        return Err(Error::Malformed {
            reason: "empty input stream".to_string(),
        });
    }
    validate_bytes_with(&bytes, engine, aggregator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct StubDocument {
        outcome: Option<Result<EngineResult>>,
        released: Rc<Cell<bool>>,
    }

    impl ParsedDocument for StubDocument {
        fn validate(&mut self) -> Result<EngineResult> {
            self.outcome
                .take()
                .unwrap_or_else(|| Err(Error::Engine("validated twice".to_string())))
        }
    }

    impl Drop for StubDocument {
        fn drop(&mut self) {
            self.released.set(true);
        }
    }

    struct StubEngine {
        fault: bool,
        released: Rc<Cell<bool>>,
    }

    impl ValidationEngine for StubEngine {
        type Document = StubDocument;

        fn parse(&self, bytes: &[u8]) -> Result<StubDocument> {
            if !bytes.starts_with(b"%PDF-") {
                return Err(Error::Malformed {
                    reason: "missing %PDF- header".to_string(),
                });
            }
            let outcome = if self.fault {
                Err(Error::Engine("profile unavailable".to_string()))
            } else {
                Ok(EngineResult {
                    is_valid: false,
                    errors: vec![RawError::new("6.1", "launch action").with_page(2)],
                })
            };
            Ok(StubDocument {
                outcome: Some(outcome),
                released: Rc::clone(&self.released),
            })
        }
    }

    fn engine(fault: bool) -> StubEngine {
        StubEngine {
            fault,
            released: Rc::new(Cell::new(false)),
        }
    }

    #[test]
    fn test_invalid_document_is_a_result() {
        let engine = engine(false);
        let result = validate_stream(&b"%PDF-1.4 ..."[..], &engine).unwrap();
        assert!(!result.is_compliant());
        assert_eq!(result.summary().failed_count(), 1);
        assert!(engine.released.get());
    }

    #[test]
    fn test_engine_fault_releases_handle() {
        let engine = engine(true);
        let err = validate_stream(&b"%PDF-1.4 ..."[..], &engine).unwrap_err();
        assert!(err.is_engine_fault());
        assert!(engine.released.get());
    }

    #[test]
    fn test_malformed_bytes() {
        let engine = engine(false);
        let err = validate_bytes(b"GIF89a", &engine).unwrap_err();
        assert!(err.is_io());
        assert!(!engine.released.get());
    }

    #[test]
    fn test_empty_stream_is_malformed() {
        let err = validate_stream(std::io::empty(), &engine(false)).unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
    }
}
