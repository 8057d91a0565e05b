use crate::constants::SEVERITY_NAMES;
use std::fmt;

/// Message severity, a closed set with fixed numeric codes.
///
/// The codes are part of the external contract (`emit --code`), so the
/// discriminants are pinned and `COUNT` is the exclusive upper bound for
/// valid raw codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info = 0,
    Debug = 1,
    Error = 2,
    Warn = 3,
}

impl Severity {
    /// Number of defined severities; valid raw codes are `0..COUNT`
    pub const COUNT: usize = 4;

    /// All severities in code order
    pub const ALL: [Severity; Severity::COUNT] = [
        Severity::Info,
        Severity::Debug,
        Severity::Error,
        Severity::Warn,
    ];

    /// Validate a raw severity code crossing a dynamic boundary (CLI input,
    /// deserialized values). Returns `None` for negative or `>= COUNT` codes.
    pub fn from_code(code: i64) -> Option<Severity> {
        match code {
            0 => Some(Severity::Info),
            1 => Some(Severity::Debug),
            2 => Some(Severity::Error),
            3 => Some(Severity::Warn),
            _ => None,
        }
    }

    /// The numeric code of this severity
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Position in a label table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name ("info", "debug", "error", "warn")
    pub fn name(self) -> &'static str {
        SEVERITY_NAMES[self.index()]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
