//! Report encoders.
//!
//! A [`ValidationResult`] can be published as JSON ([`to_json`]) or XML
//! ([`to_xml`]). Both encodings carry the same fields under the same names.

mod json;
mod xml;

pub use json::{from_json, to_json, write_json};
pub use xml::{to_xml, write_xml};

use crate::compliance::ValidationResult;
use crate::config::{ReportConfig, ReportFormat};
use crate::error::Result;

/// Encode a validation result in the configured format.
pub fn render(result: &ValidationResult, config: &ReportConfig) -> Result<String> {
    match config.format {
        ReportFormat::Json => to_json(result, config.pretty),
        ReportFormat::Xml => to_xml(result, config.pretty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dispatches_on_format() {
        let result = ValidationResult::default_instance();
        let json = render(result, &ReportConfig::new().with_pretty(false)).unwrap();
        assert!(json.starts_with("{\"isCompliant\":false"));

        let xml = render(result, &ReportConfig::new().with_format(ReportFormat::Xml)).unwrap();
        assert!(xml.starts_with("<?xml"));
    }
}
