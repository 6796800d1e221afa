//! Core types for loghub: the severity scale, immutable log records, the
//! argument formatter, and the publish/subscribe event hub.
//!
//! This crate is the dependency-light heart of the system:
//!
//! - [`Severity`]: six ranked levels, `Silent` (filter-only) through `Debug`
//! - [`LogRecord`]: immutable `(text, level)` value
//! - [`format_values`]: heterogeneous argument list to one display string
//! - [`LogHub`]: synchronous fan-out to subscribed listeners with optional
//!   per-subscription verbosity thresholds
//! - [`FatalError`]: the "emit, then diverge" failure channel
//!
//! Terminal rendering and output routing live in `loghub-console`; the hub
//! itself has no opinion about where records end up.
//!
//! # Design principles
//!
//! - Dispatch is synchronous and fire-and-forget: no queues, no deferral
//! - Records are immutable; transforms return new records
//! - All public types are `Send + Sync`
//! - A misbehaving listener is isolated, reported out-of-band via the `log`
//!   facade, and never breaks delivery to the rest

#![forbid(unsafe_code)]

mod error;
mod format;
mod hub;
mod record;
mod severity;

pub use error::FatalError;
pub use format::{format_values, inspect};
pub use hub::{LogHub, Subscription, default_hub, targets};
pub use record::LogRecord;
pub use severity::{ParseSeverityError, Severity};

// Re-exported for the `log_debug!`/`log_verbose!` macro expansions.
pub use serde_json;
