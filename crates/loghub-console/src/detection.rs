//! Color-capability detection.
//!
//! Determines how much ANSI styling the attached terminal supports, based on
//! the execution environment. The usual conventions apply: `NO_COLOR`, `CI`,
//! and `LOGHUB_PLAIN` disable styling, `LOGHUB_FORCE_COLOR` forces it, and
//! `TERM`/`COLORTERM` pick the tier when stderr is a terminal.

use std::env;
use std::io::{self, IsTerminal};
use std::sync::OnceLock;

/// ANSI color support tier reported by the terminal environment.
///
/// Ordered by capability so tiers can be compared and clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ColorSupport {
    /// No styling at all.
    #[default]
    None = 0,
    /// Basic 16-color ANSI.
    Ansi16 = 1,
    /// 256-color palette.
    Ansi256 = 2,
    /// 24-bit truecolor.
    TrueColor = 3,
}

impl ColorSupport {
    /// Numeric support level (0 = none).
    #[must_use]
    pub fn level(self) -> u8 {
        self as u8
    }

    /// True when any styling is available.
    #[must_use]
    pub fn has_color(self) -> bool {
        self != ColorSupport::None
    }

    /// Probes the environment for the current support tier.
    #[must_use]
    pub fn detect() -> Self {
        // Explicit force wins over everything, including non-terminal stderr.
        if env::var_os("LOGHUB_FORCE_COLOR").is_some() {
            return Self::from_term_env().max(ColorSupport::Ansi16);
        }
        if color_disabled() || !io::stderr().is_terminal() {
            return ColorSupport::None;
        }
        Self::from_term_env()
    }

    fn from_term_env() -> Self {
        if env::var("COLORTERM")
            .map(|v| v == "truecolor" || v == "24bit")
            .unwrap_or(false)
        {
            return ColorSupport::TrueColor;
        }
        match env::var("TERM") {
            Ok(term) if term.contains("256") => ColorSupport::Ansi256,
            Ok(term) if !term.is_empty() && term != "dumb" => ColorSupport::Ansi16,
            _ => ColorSupport::None,
        }
    }
}

/// Environment flags that disable styling regardless of terminal support.
#[must_use]
pub fn color_disabled() -> bool {
    env::var_os("NO_COLOR").is_some()
        || env::var_os("LOGHUB_PLAIN").is_some()
        || env::var_os("CI").is_some()
}

/// Cached process-wide support tier.
///
/// Detection runs once; [`format_log`](crate::format_log) reads this value
/// on every colorized call.
#[must_use]
pub fn support() -> ColorSupport {
    static SUPPORT: OnceLock<ColorSupport> = OnceLock::new();
    *SUPPORT.get_or_init(ColorSupport::detect)
}
