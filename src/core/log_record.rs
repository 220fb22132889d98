//! Log record structure

use super::log_context::LogContext;
use super::severity::Severity;
use chrono::{DateTime, Utc};

/// One emission, alive only for the duration of the write
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub message: String,
    pub context: LogContext,
}

impl LogRecord {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            message: message.into(),
            context: LogContext::new(),
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
