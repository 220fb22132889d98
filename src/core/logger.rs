//! Logger factory and emission

use super::{
    error::Result,
    level_hint::LevelHint,
    log_context::LogContext,
    log_record::LogRecord,
    severity::Severity,
    text_format::TextFormatter,
    timestamp::{FormatterConfig, TimestampFormat},
};
use crate::sinks::{self, BoxedSink};
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;

/// Build a logger writing to `sink`, or to standard output when `sink` is
/// `None`.
///
/// The threshold is resolved once from `hint` and never changes.
///
/// ```
/// use severity_logger::{create_logger, LevelHint, LogContext, Severity, SharedBuffer};
///
/// let buf = SharedBuffer::new();
/// let logger = create_logger(Some(buf.clone()), LevelHint::Default);
///
/// logger.debug("dropped");
/// logger.log_with_context(Severity::FATAL, "boom", LogContext::new().with_field("code", 3));
///
/// let out = buf.as_string();
/// assert!(!out.contains("dropped"));
/// assert!(out.contains("level=FATAL msg=boom code=3"));
/// ```
pub fn create_logger<W>(sink: Option<W>, hint: impl Into<LevelHint>) -> Logger
where
    W: Write + Send + 'static,
{
    let builder = Logger::builder().level_hint(hint);
    match sink {
        Some(sink) => builder.sink(sink).build(),
        None => builder.build(),
    }
}

/// Synchronous text logger with a fixed threshold
///
/// Records below the threshold are discarded before any formatting. Others
/// are formatted outside the sink lock and written with a single
/// `write_all`, so concurrent callers never interleave bytes.
pub struct Logger {
    threshold: Severity,
    formatter: TextFormatter,
    sink: Mutex<BoxedSink>,
}

impl Logger {
    #[must_use]
    pub fn new<W>(sink: W, hint: impl Into<LevelHint>) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::builder().sink(sink).level_hint(hint).build()
    }

    /// Logger on standard output
    #[must_use]
    pub fn stdout(hint: impl Into<LevelHint>) -> Self {
        Self::builder().level_hint(hint).build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Whether a record at `severity` would be written
    #[inline]
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }

    pub fn formatter_config(&self) -> &FormatterConfig {
        self.formatter.config()
    }

    pub fn log(&self, severity: impl Into<Severity>, message: impl Into<String>) {
        self.log_with_context(severity, message, LogContext::new());
    }

    /// Emit a record, discarding sink failures.
    ///
    /// A panic raised by the sink does not propagate to the caller. The
    /// process panic hook still runs and may report it on stderr.
    pub fn log_with_context(
        &self,
        severity: impl Into<Severity>,
        message: impl Into<String>,
        context: LogContext,
    ) {
        let severity = severity.into();
        if !self.enabled(severity) {
            return;
        }

        let message = message.into();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            self.try_log_with_context(severity, message, context)
        }));
    }

    /// Emit a record and report what happened.
    ///
    /// Returns `Ok(false)` when the record is below the threshold and
    /// `Ok(true)` once the line reached the sink. Sink errors are returned
    /// as [`LoggerError::IoError`](super::error::LoggerError::IoError).
    pub fn try_log_with_context(
        &self,
        severity: impl Into<Severity>,
        message: impl Into<String>,
        context: LogContext,
    ) -> Result<bool> {
        let severity = severity.into();
        if !self.enabled(severity) {
            return Ok(false);
        }

        let record = LogRecord::new(severity, message).with_context(context);
        let line = self.formatter.format(&record);
        self.sink.lock().write_all(line.as_bytes())?;
        Ok(true)
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()?;
        Ok(())
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::DEBUG, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::INFO, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Severity::WARN, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::ERROR, message);
    }

    /// Log at [`Severity::FATAL`]. Only a label; the process keeps running.
    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(Severity::FATAL, message);
    }

    pub fn debug_with_context(&self, message: impl Into<String>, context: LogContext) {
        self.log_with_context(Severity::DEBUG, message, context);
    }

    pub fn info_with_context(&self, message: impl Into<String>, context: LogContext) {
        self.log_with_context(Severity::INFO, message, context);
    }

    pub fn warn_with_context(&self, message: impl Into<String>, context: LogContext) {
        self.log_with_context(Severity::WARN, message, context);
    }

    pub fn error_with_context(&self, message: impl Into<String>, context: LogContext) {
        self.log_with_context(Severity::ERROR, message, context);
    }

    pub fn fatal_with_context(&self, message: impl Into<String>, context: LogContext) {
        self.log_with_context(Severity::FATAL, message, context);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Logger`]
///
/// # Example
/// ```
/// use severity_logger::prelude::*;
///
/// let buf = SharedBuffer::new();
/// let logger = Logger::builder()
///     .sink(buf.clone())
///     .level_hint(LevelHint::environment("test"))
///     .without_timestamp()
///     .build();
///
/// logger.debug("z");
/// assert_eq!(buf.as_string(), "level=DEBUG msg=z\n");
/// ```
pub struct LoggerBuilder {
    sink: Option<BoxedSink>,
    hint: LevelHint,
    formatter_config: FormatterConfig,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            sink: None,
            hint: LevelHint::Default,
            formatter_config: FormatterConfig::default(),
        }
    }

    /// Set the output sink; standard output when never called
    #[must_use = "builder methods return a new value"]
    pub fn sink<W>(mut self, sink: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level_hint(mut self, hint: impl Into<LevelHint>) -> Self {
        self.hint = hint.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter_config(mut self, config: FormatterConfig) -> Self {
        self.formatter_config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.formatter_config = self.formatter_config.with_timestamp_format(format);
        self
    }

    /// Leave the `time` field out of every line
    #[must_use = "builder methods return a new value"]
    pub fn without_timestamp(mut self) -> Self {
        self.formatter_config = self.formatter_config.without_timestamp();
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            threshold: self.hint.resolve_threshold(),
            formatter: TextFormatter::new(self.formatter_config),
            sink: Mutex::new(self.sink.unwrap_or_else(sinks::stdout)),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
