//! Timestamp prefix rendering.

use chrono::NaiveDateTime;

/// `strftime` pattern for the line prefix, e.g. `April 01, 2024: `.
///
/// Day precision only; there is no time-of-day component.
pub const TIMESTAMP_FORMAT: &str = "%B %d, %Y: ";

/// Render the prefix for `now`.
#[inline]
pub fn format_timestamp(now: NaiveDateTime) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Produces timestamped lines from raw text.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampFormatter;

impl TimestampFormatter {
    /// `format_timestamp(now) + text`. Deterministic given `now`.
    pub fn format(text: &str, now: NaiveDateTime) -> String {
        let mut line = format_timestamp(now);
        line.push_str(text);
        line
    }
}
