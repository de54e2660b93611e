//! Output sinks.
//!
//! A printer writes to any `io::Write + Send`. The process streams are the
//! defaults; [`SharedBuffer`] captures output in memory.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// The boxed sink type a [`Printer`](crate::Printer) owns.
pub type Sink = Box<dyn Write + Send>;

/// The process's standard output.
pub fn stdout() -> Sink {
    Box::new(io::stdout())
}

/// The process's standard error.
pub fn stderr() -> Sink {
    Box::new(io::stderr())
}

/// An in-memory sink whose clones share one buffer.
///
/// Hand one clone to a printer and keep another to read what was written.
///
/// # Examples
///
/// ```
/// use palette::{Background, Foreground, Printer, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let mut printer = Printer::new(Foreground::RED, Background::REGULAR, []);
/// printer.set_writer(buffer.clone());
/// printer.print_str("hi").unwrap();
/// assert_eq!(buffer.contents(), "\x1b[31;49mhi\x1b[0m");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        // A panic mid-write leaves plain bytes behind, still safe to read.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Everything written so far, decoded lossily as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Everything written so far.
    pub fn bytes(&self) -> Vec<u8> {
        self.lock().to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discard the captured bytes.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
