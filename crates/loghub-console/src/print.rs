//! Severity-routed terminal output.
//!
//! The sink writes a record's text, nothing more: Error and Warning go to
//! the error channel, everything else to the standard channel.

use std::io::{self, Write};

use loghub_core::{LogRecord, Severity};

/// Writes `record.text()` plus a newline to `out` or `err` by severity.
///
/// Error and Warning route to `err`; Info, Verbose, and Debug to `out`.
/// This is the injectable seam behind [`print_log`].
pub fn write_log<O: Write, E: Write>(
    record: &LogRecord,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    if record.level() <= Severity::Warning {
        writeln!(err, "{}", record.text())
    } else {
        writeln!(out, "{}", record.text())
    }
}

/// Writes `record` to the process stdout/stderr pair.
///
/// Fire-and-forget: write errors are ignored, matching the hub's delivery
/// model.
pub fn print_log(record: &LogRecord) {
    let _ = write_log(record, &mut io::stdout().lock(), &mut io::stderr().lock());
}
