use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::sync::{Arc, Mutex};

/// Wall-clock abstraction used to stamp log lines.
///
/// - now(): returns the current local date and time
/// - today(): calendar date of `now()`
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    #[inline]
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    #[inline]
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    #[inline]
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Default clock backed by the local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    at: NaiveDateTime,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at }
    }

    /// Frozen at midnight of `date`.
    pub fn on_date(date: NaiveDate) -> Self {
        Self::new(date.and_time(NaiveTime::default()))
    }
}

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> NaiveDateTime {
        self.at
    }
}

/// Deterministic clock whose time can be set or advanced manually.
///
/// Clones share the same underlying time, so a test can keep one handle
/// while a logger owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    at: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self {
            at: Arc::new(Mutex::new(at)),
        }
    }

    pub fn on_date(date: NaiveDate) -> Self {
        Self::new(date.and_time(NaiveTime::default()))
    }

    /// Set the absolute time.
    pub fn set(&self, at: NaiveDateTime) {
        if let Ok(mut cur) = self.at.lock() {
            *cur = at;
        }
    }

    /// Advance the clock by `d`. Saturates at the current time on overflow.
    pub fn advance(&self, d: TimeDelta) {
        if let Ok(mut cur) = self.at.lock()
            && let Some(next) = cur.checked_add_signed(d)
        {
            *cur = next;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        match self.at.lock() {
            Ok(g) => *g,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
