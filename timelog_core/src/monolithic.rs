//! Single-object logger: formats and writes in one place.

use crate::error::{LogError, Result};
use crate::format::TIMESTAMP_FORMAT;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use timelog_traits::{Appendable, Clock};

/// Opens the destination at construction and stamps each `put` inline.
///
/// Output matches `TimedSink<LogSink, C>` for the same clock.
#[derive(Debug)]
pub struct FileTimedLog<C> {
    path: PathBuf,
    file: File,
    clock: C,
}

impl<C: Clock> FileTimedLog<C> {
    pub fn open(path: impl AsRef<Path>, clock: C) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LogError::io(path, e))?;
        tracing::debug!(path = %path.display(), "opened timed file log");
        Ok(Self {
            path: path.to_path_buf(),
            file,
            clock,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn put(&mut self, text: &str) -> Result<()> {
        let line = format!("{}{text}", self.clock.now().format(TIMESTAMP_FORMAT));
        self.file
            .write_all(line.as_bytes())
            .and_then(|()| self.file.flush())
            .map_err(|e| LogError::io(&self.path, e))
    }
}

impl<C: Clock> Appendable for FileTimedLog<C> {
    type Error = LogError;

    #[inline]
    fn write(&mut self, text: &str) -> Result<()> {
        self.put(text)
    }
}
