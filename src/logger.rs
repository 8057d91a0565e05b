use crate::error::DispatchError;
use crate::labels::LabelTable;
use crate::severity::Severity;
use std::io::{self, Write};

/// An owned logging configuration: a header prefix plus a per-severity label
/// table. Constructed once and passed by reference to call sites; there is no
/// process-wide state.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    header: String,
    labels: LabelTable,
}

impl Logger {
    /// Create a logger from a header and a label table
    pub fn new(header: impl Into<String>, labels: LabelTable) -> Self {
        Self {
            header: header.into(),
            labels,
        }
    }

    /// The header prefix prepended to every line
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The severity label table
    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Unconditionally replace the header and label table. A subsequent
    /// dispatch reflects only the newest values.
    pub fn reinitialize(&mut self, header: impl Into<String>, labels: LabelTable) {
        self.header = header.into();
        self.labels = labels;
    }

    /// Format one line: `header + label + message` (no trailing newline)
    pub fn format_line(&self, severity: Severity, message: &str) -> String {
        format!("{}{}{}", self.header, self.labels.get(severity), message)
    }

    /// Write one formatted line plus newline to `out`
    pub fn write_line<W: Write>(
        &self,
        out: &mut W,
        severity: Severity,
        message: &str,
    ) -> io::Result<()> {
        writeln!(out, "{}", self.format_line(severity, message))
    }

    /// Dispatch a message under a raw severity code, writing to explicit
    /// streams. A valid code produces exactly one line on `out`; an
    /// out-of-range code produces the diagnostic line on `err` and leaves
    /// `out` untouched. Non-fatal either way.
    pub fn dispatch_code_to<W: Write, E: Write>(
        &self,
        out: &mut W,
        err: &mut E,
        message: &str,
        code: i64,
    ) -> io::Result<()> {
        match Severity::from_code(code) {
            Some(severity) => self.write_line(out, severity, message),
            None => writeln!(
                err,
                "{}",
                DispatchError::SeverityOutOfRange {
                    code,
                    message: message.to_string(),
                }
            ),
        }
    }

    /// Write one line to stdout. Console write failures are ignored.
    pub fn dispatch(&self, message: &str, severity: Severity) {
        let _ = self.write_line(&mut io::stdout().lock(), severity, message);
    }

    /// Log at info severity
    pub fn info(&self, message: &str) {
        self.dispatch(message, Severity::Info);
    }

    /// Log at debug severity
    pub fn debug(&self, message: &str) {
        self.dispatch(message, Severity::Debug);
    }

    /// Log at error severity
    pub fn error(&self, message: &str) {
        self.dispatch(message, Severity::Error);
    }

    /// Log at warn severity
    pub fn warn(&self, message: &str) {
        self.dispatch(message, Severity::Warn);
    }
}
