#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Timestamped append-only logging, three ways.
//!
//! All three shapes append `"<Month> <DD>, <YYYY>: " + text` to a file:
//!
//! - **Monolithic**: `FileTimedLog` formats and writes (`monolithic` module)
//! - **Horizontal**: the caller holds a `TimedLine` and a `LogSink` (`line`, `sink`)
//! - **Vertical**: the caller holds a `TimedSink` wrapping any `Appendable` (`timed`)
//!
//! Callers pass their own trailing newline. Time comes from a
//! `timelog_traits::Clock`, so tests can pin the date.

pub mod conversions;
pub mod error;
pub mod format;
pub mod line;
pub mod mocks;
pub mod monolithic;
pub mod script;
pub mod sink;
pub mod timed;

pub use error::{LogError, Result};
pub use format::{TIMESTAMP_FORMAT, TimestampFormatter, format_timestamp};
pub use line::TimedLine;
pub use monolithic::FileTimedLog;
pub use script::{Composition, HorizontalScript, MonolithicScript, VerticalScript, run};
pub use sink::LogSink;
pub use timed::TimedSink;
pub use timelog_traits::{Appendable, Clock, FixedClock, ManualClock, SystemClock};
