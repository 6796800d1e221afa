//! Console rendering and output for loghub records.
//!
//! This crate holds everything terminal-shaped so the hub in `loghub-core`
//! stays free of I/O:
//!
//! - [`ColorSupport`]: environment-driven color capability tiers
//! - [`format_log`]: pure record-to-record renderer (level tag + ANSI color)
//! - [`print_log`]: severity-routed stdout/stderr sink
//! - [`HubLogger`]: bridge from the standard `log` facade into a hub
//! - [`attach_console`]: one-call renderer-plus-sink wiring for a hub

#![forbid(unsafe_code)]

pub mod detection;
pub mod logger;
pub mod print;
pub mod render;

pub use detection::{ColorSupport, color_disabled, support};
pub use logger::{HubLogger, attach_console};
pub use print::{print_log, write_log};
pub use render::{FormatLogOptions, format_log, format_log_with};
