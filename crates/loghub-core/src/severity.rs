//! The six-level severity scale shared by the hub, renderer, and sink.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ranked severity of a log record.
///
/// Declaration order defines the total rank order used for filtering:
/// `Silent < Error < Warning < Info < Verbose < Debug`. Rank grows with
/// verbosity, so a subscription threshold caps how chatty a listener gets.
/// `Silent` is a filter threshold only, meaning "admit nothing"; it is never
/// attached to an emitted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Silent = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    Verbose = 4,
    Debug = 5,
}

impl Severity {
    /// Numeric rank used for threshold comparisons (0 = Silent, 5 = Debug).
    #[must_use]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Returns a short lowercase name suitable for configuration values.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Silent => "silent",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Verbose => "verbose",
            Severity::Debug => "debug",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown severity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: {:?}", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "silent" => Ok(Severity::Silent),
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "verbose" => Ok(Severity::Verbose),
            "debug" => Ok(Severity::Debug),
            other => Err(ParseSeverityError(other.to_string())),
        }
    }
}
