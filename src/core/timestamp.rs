//! Timestamp formatting for the `time` field

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Rfc3339Millis,

    /// RFC 3339 with microseconds: `2025-01-08T10:30:45.123456Z`
    Rfc3339Micros,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// Prefer [`TimestampFormat::custom`], which rejects patterns chrono
    /// cannot render.
    Custom(String),
}

impl TimestampFormat {
    /// Validate a strftime pattern and wrap it.
    ///
    /// ```
    /// use severity_logger::TimestampFormat;
    ///
    /// assert!(TimestampFormat::custom("%d/%b/%Y:%H:%M:%S").is_ok());
    /// assert!(TimestampFormat::custom("%Q").is_err());
    /// ```
    pub fn custom(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(LoggerError::config("TimestampFormat", "empty strftime pattern"));
        }
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "TimestampFormat",
                format!("unsupported strftime pattern '{}'", pattern),
            ));
        }
        Ok(TimestampFormat::Custom(pattern))
    }

    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Rfc3339Millis => datetime.to_rfc3339_opts(SecondsFormat::Millis, true),
            TimestampFormat::Rfc3339Micros => datetime.to_rfc3339_opts(SecondsFormat::Micros, true),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::new();
                // An unchecked pattern must not panic inside an emission call
                if write!(out, "{}", datetime.format(pattern)).is_err() {
                    return datetime.to_rfc3339_opts(SecondsFormat::Millis, true);
                }
                out
            }
        }
    }
}

/// Formatting options shared by every record of a logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    /// `None` drops the `time` field entirely
    pub timestamp: Option<TimestampFormat>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            timestamp: Some(TimestampFormat::default()),
        }
    }
}

impl FormatterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp = Some(format);
        self
    }

    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_rfc3339_millis_format() {
        let result = TimestampFormat::Rfc3339Millis.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_rfc3339_micros_format() {
        let result = TimestampFormat::Rfc3339Micros.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123456Z");
    }

    #[test]
    fn test_unix_formats() {
        assert_eq!(TimestampFormat::Unix.format(&fixed_datetime()), "1736332245");
        assert_eq!(
            TimestampFormat::UnixMillis.format(&fixed_datetime()),
            "1736332245123"
        );
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::custom("%Y/%m/%d %H:%M").expect("valid pattern");
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_custom_rejects_bad_patterns() {
        assert!(matches!(
            TimestampFormat::custom(""),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
        assert!(TimestampFormat::custom("%Q").is_err());
    }

    #[test]
    fn test_unchecked_custom_pattern_falls_back() {
        let format = TimestampFormat::Custom("%Q".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_default_config() {
        let config = FormatterConfig::default();
        assert_eq!(config.timestamp, Some(TimestampFormat::Rfc3339Millis));
        assert_eq!(config.without_timestamp().timestamp, None);
    }

    #[test]
    fn test_deserialization() {
        let format: TimestampFormat =
            serde_json::from_str("\"UnixMillis\"").expect("deserialize UnixMillis");
        assert_eq!(format, TimestampFormat::UnixMillis);

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
