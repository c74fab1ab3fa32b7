//! In-memory `Appendable` implementations for tests and dry runs.

use crate::error::LogError;
use std::io;
use timelog_traits::Appendable;

/// Collects every write in order. Never fails.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySink {
    writes: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Each `write` call, in call order.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// Everything written, concatenated the way a file would hold it.
    pub fn contents(&self) -> String {
        self.writes.concat()
    }
}

impl Appendable for MemorySink {
    type Error = LogError;

    fn write(&mut self, text: &str) -> Result<(), LogError> {
        self.writes.push(text.to_owned());
        Ok(())
    }
}

/// Rejects every write with an io error of the configured kind.
#[derive(Debug, Clone)]
pub struct FailingSink {
    kind: io::ErrorKind,
    attempts: usize,
}

impl FailingSink {
    pub fn new(kind: io::ErrorKind) -> Self {
        Self { kind, attempts: 0 }
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl Appendable for FailingSink {
    type Error = LogError;

    fn write(&mut self, _text: &str) -> Result<(), LogError> {
        self.attempts += 1;
        Err(LogError::io("<failing sink>", io::Error::from(self.kind)))
    }
}
