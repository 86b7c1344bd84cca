//! XML encoding of validation reports.
//!
//! Element names follow the JSON field names. Check audits are written as
//! repeated `<checkAudits>` children of the root with no wrapping element,
//! which keeps the document compatible with existing report consumers.
//!
//! ```xml
//! <validationResult>
//!   <isCompliant>false</isCompliant>
//!   <statement>unknown</statement>
//!   <summary><failedCount>1</failedCount><warningCount>0</warningCount></summary>
//!   <checkAudits>
//!     <identity><id>3.1.2</id><message>Font violation</message></identity>
//!     <occurrences>
//!       <occurrence>
//!         <status>FAILED</status>
//!         <location><pageNumber>1</pageNumber></location>
//!         <message>font not embedded</message>
//!       </occurrence>
//!     </occurrences>
//!   </checkAudits>
//! </validationResult>
//! ```

use crate::compliance::{CheckAudit, Occurrence, Summary, ValidationResult};
use crate::error::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;
use std::io::Write;

/// Encode a validation result as an XML document.
pub fn to_xml(result: &ValidationResult, pretty: bool) -> Result<String> {
    let bytes = write_xml(result, Vec::new(), pretty)?;
    String::from_utf8(bytes).map_err(|e| Error::Utf8Error(e.utf8_error()))
}

/// Write a validation result as XML to a sink, returning the sink.
pub fn write_xml<W: Write>(result: &ValidationResult, sink: W, pretty: bool) -> Result<W> {
    let mut writer = if pretty {
        Writer::new_with_indent(sink, b' ', 2)
    } else {
        Writer::new(sink)
    };

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    start(&mut writer, "validationResult")?;
    text_element(
        &mut writer,
        "isCompliant",
        if result.is_compliant() {
            "true"
        } else {
            "false"
        },
    )?;
    text_element(&mut writer, "statement", result.statement())?;
    write_summary(&mut writer, result.summary())?;
    for audit in result.check_audits() {
        write_audit(&mut writer, audit)?;
    }
    end(&mut writer, "validationResult")?;

    Ok(writer.into_inner())
}

fn write_summary<W: Write>(writer: &mut Writer<W>, summary: &Summary) -> Result<()> {
    start(writer, "summary")?;
    text_element(writer, "failedCount", &summary.failed_count().to_string())?;
    text_element(writer, "warningCount", &summary.warning_count().to_string())?;
    if summary.passed_count() > 0 {
        text_element(writer, "passedCount", &summary.passed_count().to_string())?;
    }
    end(writer, "summary")
}

fn write_audit<W: Write>(writer: &mut Writer<W>, audit: &CheckAudit) -> Result<()> {
    start(writer, "checkAudits")?;

    start(writer, "identity")?;
    text_element(writer, "id", audit.identity().id())?;
    text_element(writer, "message", audit.identity().message())?;
    end(writer, "identity")?;

    start(writer, "occurrences")?;
    for occurrence in audit.occurrences() {
        write_occurrence(writer, occurrence)?;
    }
    end(writer, "occurrences")?;

    end(writer, "checkAudits")
}

fn write_occurrence<W: Write>(writer: &mut Writer<W>, occurrence: &Occurrence) -> Result<()> {
    start(writer, "occurrence")?;
    text_element(writer, "status", occurrence.status().as_str())?;
    start(writer, "location")?;
    text_element(
        writer,
        "pageNumber",
        &occurrence.location().page_number().to_string(),
    )?;
    end(writer, "location")?;
    text_element(writer, "message", occurrence.message())?;
    end(writer, "occurrence")
}

fn start<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    start(writer, name)?;
    writer.write_event(Event::Text(BytesText::new(&xml_chars(text))))?;
    end(writer, name)
}

/// Replace characters outside the XML 1.0 `Char` production with U+FFFD.
fn xml_chars(text: &str) -> Cow<'_, str> {
    fn allowed(c: char) -> bool {
        matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}')
            || c >= '\u{10000}'
    }

    if text.chars().all(allowed) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(
            text.chars()
                .map(|c| if allowed(c) { c } else { char::REPLACEMENT_CHARACTER })
                .collect(),
        )
    }
}
