use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::warn;

/// Shared progress writer.
///
/// Every clone writes to the same underlying writer; each [`emit`] holds the
/// lock for exactly one block of text, so lines from concurrent workers never
/// interleave.
///
/// [`emit`]: OutputSink::emit
#[derive(Clone)]
pub struct OutputSink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl std::fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputSink").finish_non_exhaustive()
    }
}

impl OutputSink {
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Writes `text` as one uninterrupted block. Write failures are logged
    /// and otherwise ignored; progress output never fails a run.
    pub fn emit(&self, text: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let result = writer
            .write_all(text.as_bytes())
            .and_then(|()| writer.flush());
        if let Err(err) = result {
            warn!("Failed to write progress output: {}", err);
        }
    }

    /// Writes `line` followed by a newline.
    pub fn emit_line(&self, line: &str) {
        self.emit(&format!("{}\n", line));
    }
}
