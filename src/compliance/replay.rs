//! Engine that replays recorded validation output.
//!
//! Validation engines are often run out of process. `ReplayEngine` accepts
//! their recorded output as JSON, in the [`EngineResult`] shape:
//!
//! ```json
//! {"isValid": false, "errors": [{"code": "3.1.2", "isWarning": false, "pageNumber": 1, "details": "font not embedded"}]}
//! ```

use super::engine::{EngineResult, ParsedDocument, ValidationEngine};
use crate::error::{Error, Result};

/// Validation engine backed by recorded JSON output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayEngine;

impl ReplayEngine {
    /// Create a replay engine.
    pub fn new() -> Self {
        Self
    }
}

/// Recorded engine output waiting to be replayed.
#[derive(Debug)]
pub struct ReplayDocument {
    recorded: Option<EngineResult>,
}

impl ParsedDocument for ReplayDocument {
    fn validate(&mut self) -> Result<EngineResult> {
        self.recorded
            .take()
            .ok_or_else(|| Error::Engine("recorded output was already replayed".to_string()))
    }
}

impl ValidationEngine for ReplayEngine {
    type Document = ReplayDocument;

    fn parse(&self, bytes: &[u8]) -> Result<ReplayDocument> {
        let recorded: EngineResult =
            serde_json::from_slice(bytes).map_err(|e| Error::Malformed {
                reason: format!("recorded engine output is not valid JSON: {}", e),
            })?;
        log::debug!("Loaded recorded output with {} error(s)", recorded.errors.len());
        Ok(ReplayDocument {
            recorded: Some(recorded),
        })
    }
}
