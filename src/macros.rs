//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use severity_logger::prelude::*;
//! use severity_logger::error;
//!
//! let buf = SharedBuffer::new();
//! let logger = create_logger(Some(buf.clone()), LevelHint::Default);
//!
//! let port = 8080;
//! error!(logger, "bind failed on port {}", port);
//! assert!(buf.as_string().contains("msg=\"bind failed on port 8080\""));
//! ```

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use severity_logger::prelude::*;
/// # let logger = Logger::builder().sink(SharedBuffer::new()).build();
/// use severity_logger::log;
/// log!(logger, Severity::FATAL, "Simple message");
/// log!(logger, 100, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use severity_logger::prelude::*;
/// # let logger = Logger::builder().sink(SharedBuffer::new()).build();
/// use severity_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::DEBUG, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::INFO, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::WARN, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::ERROR, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// # use severity_logger::prelude::*;
/// # let logger = Logger::builder().sink(SharedBuffer::new()).build();
/// use severity_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::FATAL, $($arg)+)
    };
}
