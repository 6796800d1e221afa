//! Immutable log record values.

use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// One logged event: fully rendered text plus a severity.
///
/// Records are immutable after construction. Transforms such as the console
/// renderer produce a new record via [`with_text`](Self::with_text) rather
/// than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    text: String,
    level: Severity,
}

impl LogRecord {
    /// Creates a record at the given level.
    ///
    /// The hub only constructs records at the five emittable levels;
    /// [`Severity::Silent`] exists purely as a filter threshold.
    #[must_use]
    pub fn new(level: Severity, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    /// The rendered message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The severity this record was emitted at.
    #[must_use]
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Returns a new record at the same level with replaced text.
    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: self.level,
        }
    }
}
