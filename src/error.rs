//! Error types for the PDF/A report library.
//!
//! Only failures that stop validation from running are errors. A document
//! that fails PDF/A validation is a normal outcome and is reported through
//! [`ValidationResult`](crate::compliance::ValidationResult) instead.

/// Result type alias for report library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while validating or reporting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error while reading the source byte stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error
    #[error("UTF-8 decoding error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    /// The engine could not parse the source bytes
    #[error("Malformed input: {reason}")]
    Malformed {
        /// Reason reported by the engine
        reason: String,
    },

    /// Internal fault of the validation engine, unrelated to document validity
    #[error("Validation engine fault: {0}")]
    Engine(String),

    /// JSON report encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML report encoding error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl Error {
    /// True when the source could not be read or parsed.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Malformed { .. })
    }

    /// True when the engine itself failed.
    pub fn is_engine_fault(&self) -> bool {
        matches!(self, Error::Engine(_))
    }
}
