//! `log` facade bridge and hub-to-console wiring.
//!
//! [`HubLogger`] lets code written against the standard [`log`] macros feed
//! a [`LogHub`], and [`attach_console`] wires the renderer and sink to a hub
//! as a single listener.
//!
//! # Usage
//!
//! ```no_run
//! use loghub_console::{HubLogger, FormatLogOptions, attach_console};
//! use loghub_core::default_hub;
//!
//! let _console = attach_console(default_hub(), FormatLogOptions::default());
//! HubLogger::try_init(log::Level::Info);
//!
//! log::info!("now visible on the console");
//! ```

use log::{Level, Log, Metadata, Record};
use loghub_core::serde_json::Value;
use loghub_core::{LogHub, Subscription, default_hub};

use crate::print::print_log;
use crate::render::{FormatLogOptions, format_log};

/// Bridge from the `log` facade into a [`LogHub`].
///
/// Facade levels map onto the severity scale: Error, Warn, and Info map
/// directly; Debug and Trace land at Debug and Verbose. Messages arrive
/// pre-formatted by the facade, so the string passes through the hub's
/// formatter verbatim.
pub struct HubLogger {
    hub: LogHub,
    min_level: Level,
}

impl HubLogger {
    /// Creates a bridge forwarding into `hub` at or below `min_level`.
    #[must_use]
    pub fn new(min_level: Level, hub: LogHub) -> Self {
        Self { hub, min_level }
    }

    /// Installs a bridge to the process-wide default hub as the global
    /// logger.
    ///
    /// Returns an error if a global logger is already set.
    pub fn init(min_level: Level) -> Result<(), log::SetLoggerError> {
        Self::init_with(min_level, default_hub().clone())
    }

    /// Installs a bridge to `hub` as the global logger.
    pub fn init_with(min_level: Level, hub: LogHub) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(min_level, hub)))?;
        log::set_max_level(min_level.to_level_filter());
        Ok(())
    }

    /// Installs the bridge, ignoring the error if a logger is already set.
    pub fn try_init(min_level: Level) {
        let _ = Self::init(min_level);
    }
}

impl Log for HubLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        match record.level() {
            Level::Error => self.hub.error(message),
            Level::Warn => self.hub.warn(message),
            Level::Info => self.hub.info(message),
            Level::Debug => self.hub.debug(&[Value::String(message)]),
            Level::Trace => self.hub.verbose(&[Value::String(message)]),
        }
    }

    fn flush(&self) {}
}

/// Subscribes a renderer-plus-sink listener to `hub`.
///
/// Every record emitted on `hub` is rendered with [`format_log`] and written
/// through [`print_log`]. Cancel the returned subscription to detach the
/// console.
pub fn attach_console(hub: &LogHub, options: FormatLogOptions) -> Subscription {
    hub.subscribe(move |record| print_log(&format_log(record, &options)))
}
