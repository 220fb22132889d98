//! Integer severity scale and level labels
//!
//! Severities are plain integers ordered numerically. Five points carry a
//! name: `DEBUG=-4`, `INFO=0`, `WARN=4`, `ERROR=8` and `FATAL=12`. Any other
//! value is legal and renders relative to the nearest named level below it,
//! e.g. `ERROR+92` for 100.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(i32);

impl Severity {
    pub const DEBUG: Severity = Severity(-4);
    pub const INFO: Severity = Severity(0);
    pub const WARN: Severity = Severity(4);
    pub const ERROR: Severity = Severity(8);
    pub const FATAL: Severity = Severity(12);

    /// Named points in ascending order
    pub const NAMED: [Severity; 5] = [
        Severity::DEBUG,
        Severity::INFO,
        Severity::WARN,
        Severity::ERROR,
        Severity::FATAL,
    ];

    #[inline]
    pub const fn new(value: i32) -> Self {
        Severity(value)
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Look up one of the five level names, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "DEBUG" => Some(Severity::DEBUG),
            "INFO" => Some(Severity::INFO),
            "WARN" => Some(Severity::WARN),
            "ERROR" => Some(Severity::ERROR),
            "FATAL" => Some(Severity::FATAL),
            _ => None,
        }
    }

    /// Offset notation without the FATAL override.
    ///
    /// The base is `DEBUG` below `INFO`, `INFO` below `WARN`, `WARN` below
    /// `ERROR` and `ERROR` for everything else; a signed offset follows when
    /// the value is not exactly on the base.
    ///
    /// ```
    /// use severity_logger::Severity;
    ///
    /// assert_eq!(Severity::INFO.default_label(), "INFO");
    /// assert_eq!(Severity::FATAL.default_label(), "ERROR+4");
    /// assert_eq!(Severity::new(100).default_label(), "ERROR+92");
    /// assert_eq!(Severity::new(-10).default_label(), "DEBUG-6");
    /// ```
    pub fn default_label(self) -> Cow<'static, str> {
        let (base, name) = if self < Severity::INFO {
            (Severity::DEBUG, "DEBUG")
        } else if self < Severity::WARN {
            (Severity::INFO, "INFO")
        } else if self < Severity::ERROR {
            (Severity::WARN, "WARN")
        } else {
            (Severity::ERROR, "ERROR")
        };

        // i64 keeps i32::MIN - DEBUG in range
        let offset = i64::from(self.0) - i64::from(base.0);
        if offset == 0 {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(format!("{}{:+}", name, offset))
        }
    }

    /// Label written to the `level` field. See [`render_label`].
    #[inline]
    pub fn label(self) -> Cow<'static, str> {
        render_label(self)
    }
}

/// Render the level label for a severity.
///
/// Exactly [`Severity::FATAL`] renders as `FATAL`; every other value keeps
/// its [`Severity::default_label`], so 11 and 13 stay `ERROR+3` and `ERROR+5`.
pub fn render_label(severity: Severity) -> Cow<'static, str> {
    if severity == Severity::FATAL {
        Cow::Borrowed("FATAL")
    } else {
        severity.default_label()
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::ERROR
    }
}

impl From<i32> for Severity {
    fn from(value: i32) -> Self {
        Severity(value)
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> Self {
        severity.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_label(*self))
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::from_name(s).ok_or_else(|| LoggerError::invalid_level(s))
    }
}
