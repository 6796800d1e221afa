//! Wires a hub to the console and emits one record per level.
//!
//! Run with `cargo run --example console_logging`. Error and Warning land on
//! stderr, the rest on stdout; color follows the terminal environment
//! (`NO_COLOR` or `LOGHUB_PLAIN` to disable, `LOGHUB_FORCE_COLOR` to force).

use loghub::{FormatLogOptions, LogHub, attach_console, log_debug, log_verbose};

fn run(hub: &LogHub) -> Result<(), Box<dyn std::error::Error>> {
    hub.info("server started");
    hub.warn("cache is cold");
    log_verbose!(hub, "loaded", 3, "routes");
    log_debug!(hub, "request", serde_json::json!({ "path": "/health", "status": 200 }));
    hub.error("backend unreachable");

    // fatal emits the record, then hands back the failure to propagate.
    Err(hub.fatal("shutting down: backend unreachable").into())
}

fn main() {
    let hub = LogHub::new();
    let _console = attach_console(&hub, FormatLogOptions::default());

    if let Err(fatal) = run(&hub) {
        eprintln!("exited: {fatal}");
        std::process::exit(1);
    }
}
