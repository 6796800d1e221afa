//! The fatal failure channel.

use std::fmt;

/// Unrecoverable failure produced by [`LogHub::fatal`](crate::LogHub::fatal).
///
/// Rust has no non-local throw suitable for library code, so the
/// "emit, then diverge" contract is modeled as a value the caller must
/// propagate: `fatal` emits an Error-level record and hands back a
/// `FatalError` whose only purpose is to travel up a `Result` chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalError {
    message: String,
}

impl FatalError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message carried by the failure, identical to the emitted record.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FatalError {}
