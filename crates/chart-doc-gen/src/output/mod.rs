//! Styled diagnostics for `chart-doc-gen`.
//!
//! Stdout carries the generated document, so every diagnostic goes to stderr.
//! Uses `anstyle` for style definitions and `anstream` for auto-detecting
//! terminal capabilities; output degrades to plain text when redirected.

mod styles;

use std::io::Write;

pub(crate) use styles::clap_styles;

use styles::{ERROR, HINT};

/// Print an error message to stderr (red X prefix).
pub(crate) fn error(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{ERROR}✗ {msg}{ERROR:#}").ok();
}

/// Print a dimmed follow-up line to stderr (error causes, guidance).
pub(crate) fn hint(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{HINT}{msg}{HINT:#}").ok();
}
