//! Structured configuration issues.
//!
//! Parsing a [`FileConfig`](super::FileConfig) never fails on a bad value;
//! it falls back and records a [`ConfigIssue`] instead.

use std::fmt;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot be used.
    Error,
    /// Non-fatal: a fallback was used.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A `modules` entry that names no category.
    UnknownModule { field: String, value: String },
    /// `banner_char` is not exactly one character.
    InvalidBannerChar { value: String },
    /// Banner width leaves no room for the fill around a section title.
    WidthTooSmall { width: usize, minimum: usize },
}

/// A detected issue in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
