//! Callers for each composition shape.
//!
//! Each script appends one line. Only `run` knows which shape is in use.

use crate::error::Result;
use crate::line::TimedLine;
use crate::monolithic::FileTimedLog;
use crate::sink::LogSink;
use crate::timed::TimedSink;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use timelog_traits::{Appendable, Clock};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Composition {
    Monolithic,
    Horizontal,
    #[default]
    Vertical,
}

impl Composition {
    pub const ALL: [Composition; 3] = [
        Composition::Monolithic,
        Composition::Horizontal,
        Composition::Vertical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Composition::Monolithic => "monolithic",
            Composition::Horizontal => "horizontal",
            Composition::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown composition {0:?} (expected monolithic|horizontal|vertical)")]
pub struct UnknownComposition(pub String);

impl FromStr for Composition {
    type Err = UnknownComposition;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Composition::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownComposition(s.to_owned()))
    }
}

/// Script -> FileTimedLog
#[derive(Debug, Clone)]
pub struct MonolithicScript<C> {
    clock: C,
}

impl<C: Clock> MonolithicScript<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn write(&self, text: &str, path: impl AsRef<Path>) -> Result<()> {
        FileTimedLog::open(path, &self.clock)?.put(text)
    }
}

/// Script -> TimedLine, Script -> LogSink
#[derive(Debug, Clone)]
pub struct HorizontalScript<C> {
    clock: C,
}

impl<C: Clock> HorizontalScript<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn write(&self, text: &str, path: impl AsRef<Path>) -> Result<()> {
        let line = TimedLine::new(text, &self.clock);
        let mut log = LogSink::open(path)?;
        log.put(&line)
    }
}

/// Script -> TimedSink -> Appendable
#[derive(Debug, Clone)]
pub struct VerticalScript<C> {
    clock: C,
}

impl<C: Clock> VerticalScript<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Wrap `log` in the timestamp decorator and write once.
    pub fn write<A: Appendable>(&self, text: &str, log: A) -> std::result::Result<(), A::Error> {
        TimedSink::new(log, &self.clock).write(text)
    }
}

/// Append `text` to `path` using the requested composition.
pub fn run<C: Clock>(
    composition: Composition,
    text: &str,
    path: impl AsRef<Path>,
    clock: C,
) -> Result<()> {
    let path = path.as_ref();
    match composition {
        Composition::Monolithic => MonolithicScript::new(clock).write(text, path)?,
        Composition::Horizontal => HorizontalScript::new(clock).write(text, path)?,
        Composition::Vertical => VerticalScript::new(clock).write(text, LogSink::open(path)?)?,
    }
    tracing::info!(
        variant = %composition,
        path = %path.display(),
        bytes = text.len(),
        "line appended"
    );
    Ok(())
}
