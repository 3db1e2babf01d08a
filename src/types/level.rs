//! Severity levels and the reporting threshold.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::{Error, Result};

/// Log severity, ordered by rank.
///
/// `Trace < Debug < Info < Warn < Error < Audit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Audit,
}

impl Severity {
    /// All severities, lowest rank first.
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Audit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Audit => "AUDIT",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    /// Case-insensitive. `WARNING` is accepted as a legacy spelling of `WARN`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRACE" => Ok(Severity::Trace),
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            "AUDIT" => Ok(Severity::Audit),
            _ => Err(Error::invalid_level(s)),
        }
    }
}

/// Minimum severity an event needs to be forwarded, or `Disabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Threshold {
    /// Suppresses every event.
    Disabled,
    /// Forwards events at or above this severity.
    At(Severity),
}

impl Threshold {
    /// Threshold used when nothing (or garbage) is configured.
    pub const DEFAULT: Threshold = Threshold::At(Severity::Error);

    /// Whether an event of `severity` passes this threshold.
    pub fn admits(self, severity: Severity) -> bool {
        match self {
            Threshold::Disabled => false,
            Threshold::At(minimum) => severity >= minimum,
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Disabled => f.write_str("OFF"),
            Threshold::At(severity) => severity.fmt(f),
        }
    }
}

impl FromStr for Threshold {
    type Err = Error;

    /// Any severity name, or `OFF` / `NONE` / `DISABLED` (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OFF" | "NONE" | "DISABLED" => Ok(Threshold::Disabled),
            _ => s.parse().map(Threshold::At),
        }
    }
}
