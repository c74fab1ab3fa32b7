//! Timestamp decorator over any `Appendable`.

use crate::format::TimestampFormatter;
use timelog_traits::{Appendable, Clock};

/// Prepends the current date to every write, then delegates to `origin`.
///
/// Exposes the same single `write` operation as what it wraps, so a caller
/// holds one collaborator while formatting and writing stay separate units.
/// Errors from `origin` are returned unchanged.
#[derive(Debug, Clone)]
pub struct TimedSink<A, C> {
    origin: A,
    clock: C,
}

impl<A, C> TimedSink<A, C> {
    pub fn new(origin: A, clock: C) -> Self {
        Self { origin, clock }
    }

    pub fn inner(&self) -> &A {
        &self.origin
    }

    pub fn into_inner(self) -> A {
        self.origin
    }
}

impl<A: Appendable, C: Clock> Appendable for TimedSink<A, C> {
    type Error = A::Error;

    fn write(&mut self, text: &str) -> Result<(), Self::Error> {
        let line = TimestampFormatter::format(text, self.clock.now());
        self.origin.write(&line)
    }
}
