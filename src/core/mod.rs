//! Core logger types

pub mod error;
pub mod level_hint;
pub mod log_context;
pub mod log_record;
pub mod logger;
pub mod severity;
pub mod text_format;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use level_hint::{LevelHint, DEBUG_ENVIRONMENTS, DEFAULT_ENV_VAR};
pub use log_context::{FieldValue, LogContext};
pub use log_record::LogRecord;
pub use logger::{create_logger, Logger, LoggerBuilder};
pub use severity::{render_label, Severity};
pub use text_format::TextFormatter;
pub use timestamp::{FormatterConfig, TimestampFormat};
