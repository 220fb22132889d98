//! Sink implementations
//!
//! Any `std::io::Write + Send` value can back a logger. This module holds
//! the ones the crate ships.

pub mod buffer;

pub use buffer::SharedBuffer;

use std::io::Write;

/// Boxed sink type stored by a logger
pub type BoxedSink = Box<dyn Write + Send>;

/// The default sink: standard output
pub fn stdout() -> BoxedSink {
    Box::new(std::io::stdout())
}
