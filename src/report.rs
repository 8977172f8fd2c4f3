//! Classified status lines emitted while previewing or executing.
//!
//! The executor never prints; it hands every line to a [`Reporter`]. The CLI uses
//! [`ConsoleReporter`] (or [`TracingReporter`] for JSON output) and tests capture
//! lines with [`LogCapture`]. Any `FnMut(LogKind, &str)` closure is a reporter too.

use std::fmt;
use tracing::{error, info, warn};

use crate::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogKind {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogKind::Info => "info",
            LogKind::Success => "success",
            LogKind::Warning => "warning",
            LogKind::Error => "error",
        })
    }
}

pub trait Reporter {
    fn report(&mut self, kind: LogKind, message: &str);
}

impl<F> Reporter for F
where
    F: FnMut(LogKind, &str),
{
    fn report(&mut self, kind: LogKind, message: &str) {
        self(kind, message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub kind: LogKind,
    pub message: String,
}

/// Collects lines in memory.
#[derive(Debug, Default)]
pub struct LogCapture {
    pub lines: Vec<LogLine>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of_kind(&self, kind: LogKind) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(move |l| l.kind == kind)
            .map(|l| l.message.as_str())
    }

    pub fn count(&self, kind: LogKind) -> usize {
        self.of_kind(kind).count()
    }
}

impl Reporter for LogCapture {
    fn report(&mut self, kind: LogKind, message: &str) {
        self.lines.push(LogLine {
            kind,
            message: message.to_string(),
        });
    }
}

/// Forwards lines as tracing events (`target: "file_falcon::report"`).
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, kind: LogKind, message: &str) {
        match kind {
            LogKind::Info => info!(target: "file_falcon::report", kind = %kind, "{message}"),
            LogKind::Success => info!(target: "file_falcon::report", kind = %kind, "{message}"),
            LogKind::Warning => warn!(target: "file_falcon::report", kind = %kind, "{message}"),
            LogKind::Error => error!(target: "file_falcon::report", kind = %kind, "{message}"),
        }
    }
}

/// Colored terminal lines: info and success on stdout, warnings and errors on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter {
    /// Drop info lines (quiet log level).
    pub quiet: bool,
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, kind: LogKind, message: &str) {
        match kind {
            LogKind::Info if self.quiet => {}
            LogKind::Info => output::print_info(message),
            LogKind::Success => output::print_success(message),
            LogKind::Warning => output::print_warn(message),
            LogKind::Error => output::print_error(message),
        }
    }
}
