//! JSON encoding of validation reports.

use crate::compliance::ValidationResult;
use crate::error::Result;
use std::io::Write;

/// Encode a validation result as JSON.
pub fn to_json(result: &ValidationResult, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Write a validation result as JSON to a sink.
pub fn write_json<W: Write>(result: &ValidationResult, sink: W, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(sink, result)?;
    } else {
        serde_json::to_writer(sink, result)?;
    }
    Ok(())
}

/// Decode a validation result from a JSON report.
pub fn from_json(json: &str) -> Result<ValidationResult> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::{aggregate, RawError};
    use serde_json::{json, Value};

    #[test]
    fn test_default_instance_shape() {
        let json = to_json(ValidationResult::default_instance(), false).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            json!({
                "isCompliant": false,
                "statement": "unknown",
                "summary": {"failedCount": 0, "warningCount": 0},
                "checkAudits": []
            })
        );
    }

    #[test]
    fn test_audit_shape() {
        let result = aggregate(false, &[RawError::new("C1", "bad font").with_page(3)]);
        let value: Value = serde_json::from_str(&to_json(&result, true).unwrap()).unwrap();
        assert_eq!(
            value["checkAudits"][0],
            json!({
                "identity": {"id": "C1", "message": "Unclassified violation"},
                "occurrences": [
                    {"status": "FAILED", "location": {"pageNumber": 3}, "message": "bad font"}
                ]
            })
        );
    }

    #[test]
    fn test_decode_report() {
        let result = aggregate(
            true,
            &[
                RawError::warning("2.1", "a").with_page(1),
                RawError::new("7.1", "b"),
            ],
        );
        let mut encoded = Vec::new();
        write_json(&result, &mut encoded, false).unwrap();
        let decoded = from_json(std::str::from_utf8(&encoded).unwrap()).unwrap();
        assert_eq!(decoded, result);
    }

    #[test]
    fn test_decode_rejects_empty_audit() {
        let json = r#"{"isCompliant": false, "statement": "unknown",
            "summary": {"failedCount": 0, "warningCount": 0},
            "checkAudits": [{"identity": {"id": "1", "message": "m"}, "occurrences": []}]}"#;
        assert!(from_json(json).is_err());
    }
}
