//! Configuration for report generation.

use crate::compliance::{
    ByCode, ByCodeAndDetails, CheckIdentity, IdentityPolicy, RawError, ResultAggregator,
};
use std::fmt;
use std::str::FromStr;

/// Output encoding of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// JSON document
    #[default]
    Json,
    /// XML document
    Xml,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "xml" => Ok(ReportFormat::Xml),
            other => Err(format!("unknown report format '{}'", other)),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Xml => write!(f, "xml"),
        }
    }
}

/// Key used to group raw errors into check audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupingKey {
    /// Error code only
    #[default]
    Code,
    /// Error code and detail text
    CodeAndDetails,
}

impl IdentityPolicy for GroupingKey {
    fn identify(&self, error: &RawError) -> CheckIdentity {
        match self {
            GroupingKey::Code => ByCode.identify(error),
            GroupingKey::CodeAndDetails => ByCodeAndDetails.identify(error),
        }
    }
}

/// Report generation configuration.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Output encoding.
    pub format: ReportFormat,

    /// Indent the output.
    pub pretty: bool,

    /// How raw errors are grouped.
    pub grouping: GroupingKey,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            format: ReportFormat::Json,
            pretty: true,
            grouping: GroupingKey::Code,
        }
    }

    /// Set the output encoding.
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable indented output.
    pub fn with_pretty(mut self, enable: bool) -> Self {
        self.pretty = enable;
        self
    }

    /// Set the grouping key.
    pub fn with_grouping(mut self, grouping: GroupingKey) -> Self {
        self.grouping = grouping;
        self
    }

    /// Aggregator that groups errors by the configured key.
    pub fn aggregator(&self) -> ResultAggregator<GroupingKey> {
        ResultAggregator::with_policy(self.grouping)
    }
}
