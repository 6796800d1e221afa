//! Minimal in-process publish/subscribe logging.
//!
//! A [`LogHub`] accepts leveled log records from application code and fans
//! each one out, synchronously, to every registered listener. Listeners may
//! cap their verbosity with a per-subscription [`Severity`] threshold. The
//! console pieces are ordinary listeners wired in with [`attach_console`]:
//! [`format_log`] adds the bracketed level tag and optional ANSI color, and
//! [`print_log`] routes output to stdout or stderr by severity.
//!
//! # Quick start
//!
//! ```
//! use loghub::{LogHub, Severity, log_debug};
//!
//! let hub = LogHub::new();
//! let sub = hub.subscribe_filtered(
//!     |record| eprintln!("{}: {}", record.level(), record.text()),
//!     Severity::Info,
//! );
//!
//! hub.info("server started");                  // delivered
//! log_debug!(hub, "handshake", 42);            // dropped by the threshold
//!
//! sub.cancel();
//! ```
//!
//! For one shared stream across a binary, [`default_hub`] provides a
//! process-wide instance, and [`HubLogger`] bridges the standard `log`
//! macros into it.

#![forbid(unsafe_code)]

pub use loghub_core::{
    FatalError, LogHub, LogRecord, ParseSeverityError, Severity, Subscription, default_hub,
    format_values, inspect, targets,
};

pub use loghub_console::{
    ColorSupport, FormatLogOptions, HubLogger, attach_console, color_disabled, format_log,
    format_log_with, print_log, support, write_log,
};

pub use loghub_core::{log_debug, log_verbose, serde_json};
