//! In-memory sink

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Cloneable in-memory sink
///
/// All clones share one buffer, so a caller can hand one clone to a logger
/// and read what was written through another.
///
/// ```
/// use severity_logger::{create_logger, LevelHint, SharedBuffer};
///
/// let buf = SharedBuffer::new();
/// let logger = create_logger(Some(buf.clone()), LevelHint::Default);
/// logger.error("x");
/// assert!(buf.as_string().contains("level=ERROR"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the bytes written so far
    pub fn contents(&self) -> Vec<u8> {
        self.inner.lock().clone()
    }

    /// Written bytes as text, lossily decoded
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
