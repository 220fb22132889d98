//! # Severity Logger
//!
//! A small factory for synchronous `key=value` text loggers.
//!
//! ## Features
//!
//! - **Integer severities**: `DEBUG=-4`, `INFO=0`, `WARN=4`, `ERROR=8`, `FATAL=12`,
//!   with any other value accepted and rendered as an offset (`ERROR+92`)
//! - **One threshold option**: absent, level name, environment name or raw value
//! - **FATAL label**: severity 12 is written as `FATAL` rather than `ERROR+4`
//! - **Thread safe**: one `write_all` per record behind a mutex
//!
//! ```
//! use severity_logger::{create_logger, LevelHint, SharedBuffer};
//!
//! let buf = SharedBuffer::new();
//! let logger = create_logger(Some(buf.clone()), LevelHint::environment("development"));
//! logger.debug("w");
//! assert!(buf.as_string().contains("level=DEBUG msg=w"));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        create_logger, render_label, FieldValue, FormatterConfig, LevelHint, LogContext,
        LogRecord, Logger, LoggerBuilder, LoggerError, Result, Severity, TimestampFormat,
        DEBUG_ENVIRONMENTS,
    };
    pub use crate::sinks::SharedBuffer;
}

pub use self::core::{
    create_logger, render_label, FieldValue, FormatterConfig, LevelHint, LogContext, LogRecord,
    Logger, LoggerBuilder, LoggerError, Result, Severity, TextFormatter, TimestampFormat,
    DEBUG_ENVIRONMENTS, DEFAULT_ENV_VAR,
};
pub use sinks::SharedBuffer;
