//! The event hub: subscription registry and synchronous dispatch.
//!
//! [`LogHub`] fans each emitted record out to every registered listener
//! before the emission call returns. Dispatch is synchronous and
//! fire-and-forget: nothing is queued, batched, or deferred, and the hub
//! knows nothing about what its listeners do with a record.
//!
//! # Usage
//!
//! ```
//! use loghub_core::{LogHub, Severity};
//!
//! let hub = LogHub::new();
//! let sub = hub.subscribe_filtered(|record| eprintln!("{}", record.text()), Severity::Info);
//!
//! hub.info("server started");   // delivered
//! hub.debug(&["noise".into()]); // dropped by the Info threshold
//!
//! sub.cancel();
//! ```
//!
//! # Listener isolation
//!
//! A panicking listener never breaks dispatch for the others: each
//! invocation runs under `catch_unwind` and failures are reported through
//! the `log` facade at target [`targets::HUB`].

use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, Weak};

use serde_json::Value;

use crate::error::FatalError;
use crate::format::format_values;
use crate::record::LogRecord;
use crate::severity::Severity;

/// Out-of-band diagnostic targets used with the `log` facade.
///
/// The hub never reports its own faults through its record stream; they go
/// through `log` under these targets instead.
pub mod targets {
    /// Dispatch machinery faults, e.g. a panicking listener.
    pub const HUB: &str = "loghub::hub";
}

type Callback = Arc<dyn Fn(&LogRecord) + Send + Sync>;

struct ListenerEntry {
    filter: Option<Severity>,
    callback: Callback,
}

#[derive(Default)]
struct HubInner {
    listeners: Mutex<HashMap<u64, ListenerEntry>>,
    next_id: AtomicU64,
}

/// Publish/subscribe hub for leveled log records.
///
/// Cloning a hub is cheap and yields a handle to the same registry
/// (Arc-backed), so producers and subscribers can each hold their own copy.
/// The registry mutex is the only synchronization; listeners run outside the
/// lock and may therefore subscribe or unsubscribe reentrantly.
#[derive(Clone, Default)]
pub struct LogHub {
    inner: Arc<HubInner>,
}

impl LogHub {
    /// Creates a hub with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for every emitted record.
    ///
    /// The returned [`Subscription`] is the only way to remove the listener
    /// again; dropping it without calling [`Subscription::cancel`] leaves
    /// the listener registered for the lifetime of the hub.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&LogRecord) + Send + Sync + 'static,
    {
        self.register(None, Arc::new(listener))
    }

    /// Registers a listener capped at the given verbosity threshold.
    ///
    /// Records whose level ranks above `threshold` are silently dropped for
    /// this subscription only: a threshold of [`Severity::Warning`] admits
    /// Error and Warning, while [`Severity::Silent`] admits nothing.
    pub fn subscribe_filtered<F>(&self, listener: F, threshold: Severity) -> Subscription
    where
        F: Fn(&LogRecord) + Send + Sync + 'static,
    {
        self.register(Some(threshold), Arc::new(listener))
    }

    fn register(&self, filter: Option<Severity>, callback: Callback) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut listeners) = self.inner.listeners.lock() {
            listeners.insert(id, ListenerEntry { filter, callback });
        }
        Subscription {
            id,
            hub: Arc::downgrade(&self.inner),
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().map(|l| l.len()).unwrap_or(0)
    }

    /// Formats `values` (strings verbatim, everything else deep-stringified,
    /// space-joined) and emits the result at Debug level.
    ///
    /// The [`log_debug!`](crate::log_debug) macro wraps arbitrary
    /// serializable arguments for this method.
    pub fn debug(&self, values: &[Value]) {
        self.dispatch(&LogRecord::new(Severity::Debug, format_values(values)));
    }

    /// Formats `values` like [`debug`](Self::debug) and emits at Verbose
    /// level.
    pub fn verbose(&self, values: &[Value]) {
        self.dispatch(&LogRecord::new(Severity::Verbose, format_values(values)));
    }

    /// Emits `text` verbatim at Info level. No formatter pass.
    pub fn info(&self, text: impl Into<String>) {
        self.dispatch(&LogRecord::new(Severity::Info, text));
    }

    /// Emits `text` verbatim at Warning level. No formatter pass.
    pub fn warn(&self, text: impl Into<String>) {
        self.dispatch(&LogRecord::new(Severity::Warning, text));
    }

    /// Emits `text` verbatim at Error level. No formatter pass.
    pub fn error(&self, text: impl Into<String>) {
        self.dispatch(&LogRecord::new(Severity::Error, text));
    }

    /// Emits `text` at Error level, then returns the unrecoverable failure
    /// for the caller to propagate.
    ///
    /// The contract is "emit, then diverge": control is not meant to
    /// continue past a fatal call, so propagate the returned value
    /// immediately:
    ///
    /// ```
    /// # use loghub_core::LogHub;
    /// fn load(hub: &LogHub) -> Result<(), Box<dyn std::error::Error>> {
    ///     Err(hub.fatal("config missing").into())
    /// }
    /// ```
    #[must_use = "fatal produces a failure the caller must propagate"]
    pub fn fatal(&self, text: impl Into<String>) -> FatalError {
        let text = text.into();
        self.error(text.clone());
        FatalError::new(text)
    }

    /// Synchronously invokes every currently registered listener.
    ///
    /// The registry is snapshotted under the lock and each entry is
    /// re-checked for membership right before its invocation, so a listener
    /// removed earlier in the same dispatch is skipped and one added
    /// mid-dispatch waits for the next record. No listener runs twice per
    /// record. Iteration order is whatever the registry yields; callers must
    /// not rely on it.
    fn dispatch(&self, record: &LogRecord) {
        let snapshot: Vec<(u64, Option<Severity>, Callback)> = {
            let Ok(listeners) = self.inner.listeners.lock() else {
                return;
            };
            listeners
                .iter()
                .map(|(id, entry)| (*id, entry.filter, Arc::clone(&entry.callback)))
                .collect()
        };

        for (id, filter, callback) in snapshot {
            if let Some(threshold) = filter {
                if record.level() > threshold {
                    continue;
                }
            }
            let still_registered = self
                .inner
                .listeners
                .lock()
                .map(|l| l.contains_key(&id))
                .unwrap_or(false);
            if !still_registered {
                continue;
            }
            if panic::catch_unwind(AssertUnwindSafe(|| (*callback)(record))).is_err() {
                log::warn!(target: targets::HUB, "listener {id} panicked; continuing dispatch");
            }
        }
    }
}

impl fmt::Debug for LogHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Disposer for one hub subscription.
///
/// Calling [`cancel`](Self::cancel) removes exactly this subscription;
/// repeated calls are no-ops. The handle deliberately does nothing on drop:
/// it is a removal capability, not a scope guard, so discarding it keeps the
/// listener registered.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    hub: Weak<HubInner>,
}

impl Subscription {
    /// Removes the subscription from its hub. Idempotent.
    pub fn cancel(&self) {
        if let Some(inner) = self.hub.upgrade() {
            if let Ok(mut listeners) = inner.listeners.lock() {
                listeners.remove(&self.id);
            }
        }
    }

    /// True while the subscription is still registered with a live hub.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.hub
            .upgrade()
            .and_then(|inner| {
                inner
                    .listeners
                    .lock()
                    .ok()
                    .map(|l| l.contains_key(&self.id))
            })
            .unwrap_or(false)
    }
}

/// Returns the process-wide default hub.
///
/// A convenience for binaries that want a single shared record stream.
/// There is no teardown: subscriptions on the default hub live until
/// individually cancelled. Subsystems and tests that need isolation should
/// construct their own [`LogHub`] instead.
#[must_use]
pub fn default_hub() -> &'static LogHub {
    static HUB: OnceLock<LogHub> = OnceLock::new();
    HUB.get_or_init(LogHub::new)
}

/// Emits a Debug-level record on a hub, accepting arbitrary serializable
/// arguments.
///
/// Strings pass through verbatim; everything else is deep-stringified:
///
/// ```
/// use loghub_core::{LogHub, log_debug};
///
/// let hub = LogHub::new();
/// log_debug!(hub, "request", 42, serde_json::json!({ "path": "/health" }));
/// ```
#[macro_export]
macro_rules! log_debug {
    ($hub:expr, $($value:expr),+ $(,)?) => {
        $hub.debug(&[$($crate::serde_json::json!($value)),+])
    };
}

/// Emits a Verbose-level record on a hub; argument handling matches
/// [`log_debug!`].
#[macro_export]
macro_rules! log_verbose {
    ($hub:expr, $($value:expr),+ $(,)?) => {
        $hub.verbose(&[$($crate::serde_json::json!($value)),+])
    };
}
