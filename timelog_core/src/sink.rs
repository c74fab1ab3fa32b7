//! File-backed append target.

use crate::error::{LogError, Result};
use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use timelog_traits::Appendable;

/// Owns an append-mode handle on one destination and writes text verbatim.
///
/// The handle is opened in `open` and closed when the sink is dropped. Each
/// `write` is flushed before returning, so readers see it immediately; there
/// is no `fsync`.
#[derive(Debug)]
pub struct LogSink {
    path: PathBuf,
    file: File,
}

impl LogSink {
    /// Open `path` for append, creating the file if it does not exist.
    /// Parent directories are never created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LogError::io(path, e))?;
        tracing::debug!(path = %path.display(), "opened log sink");
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `text` as-is. No newline is added.
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.file
            .write_all(text.as_bytes())
            .and_then(|()| self.file.flush())
            .map_err(|e| LogError::io(&self.path, e))?;
        tracing::trace!(path = %self.path.display(), bytes = text.len(), "appended");
        Ok(())
    }

    /// Render `line` now and append the result.
    pub fn put<D: Display + ?Sized>(&mut self, line: &D) -> Result<()> {
        self.write(&line.to_string())
    }
}

impl Appendable for LogSink {
    type Error = LogError;

    #[inline]
    fn write(&mut self, text: &str) -> Result<()> {
        LogSink::write(self, text)
    }
}
