//! Timestamped line value.

use crate::format::format_timestamp;
use std::fmt;
use timelog_traits::Clock;

/// Raw text that renders with a timestamp prefix.
///
/// The timestamp is read from the clock each time the line is displayed, not
/// when it is constructed.
#[derive(Debug, Clone)]
pub struct TimedLine<C> {
    text: String,
    clock: C,
}

impl<C: Clock> TimedLine<C> {
    pub fn new(text: impl Into<String>, clock: C) -> Self {
        Self {
            text: text.into(),
            clock,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl<C: Clock> fmt::Display for TimedLine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_timestamp(self.clock.now()))?;
        f.write_str(&self.text)
    }
}
