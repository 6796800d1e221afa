//! End-to-end scenarios across the full public surface.

use std::sync::{Arc, Mutex};

use loghub::{
    ColorSupport, FormatLogOptions, HubLogger, LogHub, LogRecord, Severity, format_log_with,
    log_debug, log_verbose, write_log,
};
use serde_json::json;

/// Shared record collector usable as a hub listener.
#[derive(Default)]
struct Collector {
    records: Mutex<Vec<LogRecord>>,
}

impl Collector {
    fn listener(self: &Arc<Self>) -> Box<dyn Fn(&LogRecord) + Send + Sync> {
        let collector = Arc::clone(self);
        Box::new(move |record: &LogRecord| {
            collector.records.lock().unwrap().push(record.clone());
        })
    }

    fn seen(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[test]
fn test_filtered_and_unfiltered_listeners_side_by_side() {
    let hub = LogHub::new();
    let filtered = Arc::new(Collector::default());
    let unfiltered = Arc::new(Collector::default());
    let _filtered_sub = hub.subscribe_filtered(filtered.listener(), Severity::Info);
    let _unfiltered_sub = hub.subscribe(unfiltered.listener());

    hub.debug(&[json!("x")]);
    hub.error("y");

    // The Info-capped listener sees only the error.
    let seen = filtered.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], LogRecord::new(Severity::Error, "y"));

    // The unfiltered listener sees both, in call order.
    let seen = unfiltered.seen();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], LogRecord::new(Severity::Debug, "x"));
    assert_eq!(seen[1], LogRecord::new(Severity::Error, "y"));
}

#[test]
fn test_fatal_reaches_all_active_listeners_once() {
    let hub = LogHub::new();
    let a = Arc::new(Collector::default());
    let b = Arc::new(Collector::default());
    let _sub_a = hub.subscribe(a.listener());
    let _sub_b = hub.subscribe_filtered(b.listener(), Severity::Error);

    let failure = hub.fatal("boom");

    for collector in [&a, &b] {
        let seen = collector.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], LogRecord::new(Severity::Error, "boom"));
    }
    assert_eq!(failure.to_string(), "boom");
    assert_eq!(failure.message(), "boom");
}

#[test]
fn test_fatal_propagates_through_result_chain() {
    fn run(hub: &LogHub) -> Result<(), Box<dyn std::error::Error>> {
        Err(hub.fatal("config missing").into())
    }

    let hub = LogHub::new();
    let err = run(&hub).unwrap_err();
    assert_eq!(err.to_string(), "config missing");
}

#[test]
fn test_threshold_truth_table() {
    let levels = [
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Verbose,
        Severity::Debug,
    ];
    let thresholds = [
        Severity::Silent,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Verbose,
        Severity::Debug,
    ];

    for threshold in thresholds {
        let hub = LogHub::new();
        let collector = Arc::new(Collector::default());
        let _sub = hub.subscribe_filtered(collector.listener(), threshold);

        for level in levels {
            match level {
                Severity::Error => hub.error("m"),
                Severity::Warning => hub.warn("m"),
                Severity::Info => hub.info("m"),
                Severity::Verbose => hub.verbose(&[json!("m")]),
                Severity::Debug => hub.debug(&[json!("m")]),
                Severity::Silent => unreachable!(),
            }
        }

        let expected: Vec<Severity> = levels
            .iter()
            .copied()
            .filter(|level| level.rank() <= threshold.rank())
            .collect();
        let seen: Vec<Severity> = collector.seen().iter().map(LogRecord::level).collect();
        assert_eq!(seen, expected, "threshold {threshold}");
    }
}

#[test]
fn test_macro_formatting_matches_contract() {
    let hub = LogHub::new();
    let collector = Arc::new(Collector::default());
    let _sub = hub.subscribe(collector.listener());

    log_debug!(hub, "a", 1, json!({"b": 2}));
    log_verbose!(hub, "nested", json!({ "deep": [1, { "two": 2 }] }));

    let seen = collector.seen();
    assert_eq!(seen[0].text(), "a 1 {\"b\":2}");
    assert_eq!(seen[0].level(), Severity::Debug);
    assert_eq!(seen[1].text(), "nested {\"deep\":[1,{\"two\":2}]}");
    assert_eq!(seen[1].level(), Severity::Verbose);
}

#[test]
fn test_full_console_pipeline_through_public_surface() {
    let hub = LogHub::new();
    let out: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
    let err: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));

    let (out_sink, err_sink) = (Arc::clone(&out), Arc::clone(&err));
    let _sub = hub.subscribe(move |record: &LogRecord| {
        let rendered = format_log_with(
            record,
            &FormatLogOptions { colorize: true },
            ColorSupport::Ansi16,
        );
        let mut out = out_sink.lock().unwrap();
        let mut err = err_sink.lock().unwrap();
        write_log(&rendered, &mut *out, &mut *err).unwrap();
    });

    hub.info("up");
    hub.error("down");

    let stdout = String::from_utf8(out.lock().unwrap().clone()).unwrap();
    let stderr = String::from_utf8(err.lock().unwrap().clone()).unwrap();
    assert_eq!(strip_ansi_escapes::strip_str(&stdout), "[INFO] up\n");
    assert_eq!(strip_ansi_escapes::strip_str(&stderr), "[ERR!] down\n");
}

#[test]
fn test_log_facade_macros_reach_the_hub() {
    let hub = LogHub::new();
    let collector = Arc::new(Collector::default());
    let _sub = hub.subscribe(collector.listener());

    // The global logger can only be installed once per process; this is the
    // only test in the workspace that installs one.
    HubLogger::init_with(log::Level::Info, hub.clone()).unwrap();

    log::error!("facade error");
    log::warn!("facade warning");
    log::info!("facade info");
    log::debug!("gated by the minimum level");

    let seen = collector.seen();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0], LogRecord::new(Severity::Error, "facade error"));
    assert_eq!(seen[1], LogRecord::new(Severity::Warning, "facade warning"));
    assert_eq!(seen[2], LogRecord::new(Severity::Info, "facade info"));
}

#[test]
fn test_disposer_lifecycle_across_crates() {
    let hub = LogHub::new();
    let collector = Arc::new(Collector::default());
    let sub = hub.subscribe(collector.listener());
    assert!(sub.is_active());

    hub.info("delivered");
    sub.cancel();
    hub.info("not delivered");
    sub.cancel(); // idempotent

    assert_eq!(collector.seen().len(), 1);
    assert!(!sub.is_active());
}
