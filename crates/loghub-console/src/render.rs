//! Pure record-to-record console rendering.
//!
//! [`format_log`] prefixes a record's text with a bracketed 4-character
//! level tag and optionally colorizes it. The input record is never mutated;
//! a new record at the same level is returned, so the renderer composes with
//! any sink.
//!
//! | Level   | Tag       | Styling                  |
//! |---------|-----------|--------------------------|
//! | Debug   | `[DBUG] ` | dim over tag and text    |
//! | Verbose | `[VERB] ` | dim over tag and text    |
//! | Info    | `[INFO] ` | tag blue, text plain     |
//! | Warning | `[WARN] ` | tag yellow, text plain   |
//! | Error   | `[ERR!] ` | tag red, text plain      |

use console::Style;
use loghub_core::{LogRecord, Severity};

use crate::detection::{ColorSupport, support};

/// Options for [`format_log`].
#[derive(Debug, Clone, Copy)]
pub struct FormatLogOptions {
    /// When false, styling is skipped regardless of terminal support.
    pub colorize: bool,
}

impl Default for FormatLogOptions {
    fn default() -> Self {
        Self { colorize: true }
    }
}

/// Renders `record` using the process-wide color support tier.
#[must_use]
pub fn format_log(record: &LogRecord, options: &FormatLogOptions) -> LogRecord {
    format_log_with(record, options, support())
}

/// Renders `record` with an explicit support tier.
///
/// This is the injectable seam for tests and alternate sinks; [`format_log`]
/// is the same function bound to the detected environment.
#[must_use]
pub fn format_log_with(
    record: &LogRecord,
    options: &FormatLogOptions,
    support: ColorSupport,
) -> LogRecord {
    let colored = options.colorize && support.has_color();

    let text = match record.level() {
        Severity::Debug => dim_line("[DBUG] ", record.text(), colored),
        Severity::Verbose => dim_line("[VERB] ", record.text(), colored),
        Severity::Info => tag_line(Style::new().blue(), "[INFO] ", record.text(), colored),
        Severity::Warning => tag_line(Style::new().yellow(), "[WARN] ", record.text(), colored),
        Severity::Error => tag_line(Style::new().red(), "[ERR!] ", record.text(), colored),
        // Silent records are never emitted by the hub; pass through untouched.
        Severity::Silent => return record.clone(),
    };

    record.with_text(text)
}

// Dim covers tag and text together.
fn dim_line(tag: &str, text: &str, colored: bool) -> String {
    let line = format!("{tag}{text}");
    if colored {
        Style::new()
            .dim()
            .force_styling(true)
            .apply_to(line)
            .to_string()
    } else {
        line
    }
}

// Color covers the tag only; the text stays plain.
fn tag_line(style: Style, tag: &str, text: &str, colored: bool) -> String {
    if colored {
        format!("{}{}", style.force_styling(true).apply_to(tag), text)
    } else {
        format!("{tag}{text}")
    }
}
