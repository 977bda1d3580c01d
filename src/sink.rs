//! Line-oriented write targets.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use console::Term;

/// A destination for formatted lines.
///
/// Implemented for [`console::Term`] (stdout/stderr) and for [`Capture`].
pub trait Sink {
    /// Writes `line` followed by a newline.
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Whether the sink is attached to an interactive terminal.
    fn is_terminal(&self) -> bool;
}

impl Sink for Term {
    fn write_line(&self, line: &str) -> io::Result<()> {
        Term::write_line(self, line)
    }

    fn is_terminal(&self) -> bool {
        self.is_term()
    }
}

/// An in-memory sink that records everything written to it.
///
/// Clones share the same buffer, so a logger can own one handle while the
/// caller inspects another.
///
/// # Example
///
/// ```rust
/// use termlog::{Capture, Logger};
///
/// let out = Capture::new();
/// let err = Capture::new();
/// let logger = Logger::builder()
///     .sinks(out.clone(), err.clone())
///     .build()
///     .unwrap();
///
/// logger.warn("disk almost full").unwrap();
/// assert_eq!(out.contents(), "[Warn] disk almost full\n");
/// assert!(err.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Capture {
    buffer: Arc<Mutex<String>>,
    terminal: bool,
}

impl Capture {
    /// A capture that reports itself as a non-terminal.
    pub fn new() -> Self {
        Self::default()
    }

    /// A capture that reports itself as an interactive terminal.
    pub fn terminal() -> Self {
        Self {
            buffer: Arc::default(),
            terminal: true,
        }
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Written lines without their trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Discards captured output.
    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Sink for Capture {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|_| io::Error::other("capture buffer poisoned"))?;
        buffer.push_str(line);
        buffer.push('\n');
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_appends_newline() {
        let capture = Capture::new();
        capture.write_line("one").unwrap();
        capture.write_line("two").unwrap();
        assert_eq!(capture.contents(), "one\ntwo\n");
        assert_eq!(capture.lines(), vec!["one", "two"]);
    }

    #[test]
    fn test_capture_clones_share_buffer() {
        let capture = Capture::new();
        let handle = capture.clone();
        capture.write_line("shared").unwrap();
        assert_eq!(handle.contents(), "shared\n");
    }

    #[test]
    fn test_capture_terminal_flag() {
        assert!(!Capture::new().is_terminal());
        assert!(Capture::terminal().is_terminal());
    }

    #[test]
    fn test_capture_reads_through_poisoned_lock() {
        let capture = Capture::new();
        capture.write_line("kept").unwrap();

        let handle = capture.clone();
        let result = std::thread::spawn(move || {
            let _guard = handle.buffer.lock().unwrap();
            panic!("poison the buffer");
        })
        .join();
        assert!(result.is_err());
        assert!(capture.buffer.is_poisoned());

        assert_eq!(capture.contents(), "kept\n");
        assert!(!capture.is_empty());
    }

    #[test]
    fn test_capture_clear() {
        let capture = Capture::new();
        capture.write_line("gone").unwrap();
        capture.clear();
        assert!(capture.is_empty());
    }
}
