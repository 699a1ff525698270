//! Parsing for the fixed date/time format emitted by Bubble
//! (<https://bubble.io>), a no-code app platform.
//!
//! Useful when a Bubble app calls into a Rust backend and sends dates as
//! display strings instead of timestamps.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::ParseError;

/// Layout of a Bubble date/time string, e.g. `"Nov 11, 2021 11:00 am"`.
pub const BUBBLE_DATETIME_FORMAT: &str = "%b %e, %Y %H:%M am";

/// Parse a date/time string in Bubble's fixed layout.
///
/// The shape is an abbreviated English month name, unpadded day, 4-digit
/// year, `H:MM` time and a trailing `am`. Two upstream quirks are matched
/// exactly: the hour field is read on a **24-hour** clock, and the `am`
/// tail is literal text rather than a meridiem indicator (so a `pm` suffix
/// is rejected). Verify against what your Bubble app actually emits before
/// relying on the time of day.
///
/// The layout carries no zone, so the result is UTC.
pub fn parse_bubble_time(s: &str) -> Result<DateTime<Utc>, ParseError> {
    NaiveDateTime::parse_from_str(s, BUBBLE_DATETIME_FORMAT)
        .map(|dt| dt.and_utc())
        .map_err(|e| ParseError::BubbleTime(s.to_string(), e))
}
