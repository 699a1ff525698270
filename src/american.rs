//! American-style date notation and time-of-day normalization.
//!
//! Output follows the date notation conventional in the United States:
//! full month name, unpadded day, then a 12-hour clock.

use std::fmt;

use chrono::{DateTime, Duration, NaiveTime, TimeZone};

/// Format `t` as an American date/time string, e.g.
/// `"January 2, 2021 3:04:05 PM"`.
pub fn format_american_datetime<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    t.format("%B %-d, %Y %-I:%M:%S %p").to_string()
}

/// Format `t` as an American date string, e.g. `"January 2, 2021"`.
pub fn format_american_date<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    t.format("%B %-d, %Y").to_string()
}

/// Return the same calendar day as `t`, in the same zone, with the time
/// set to 01:00:00.0.
pub fn to_1am<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let one_am = t.date_naive().and_time(NaiveTime::MIN) + Duration::hours(1);
    t.timezone()
        .from_local_datetime(&one_am)
        .earliest()
        // 01:00 can be skipped entirely by a DST jump on transition days
        .unwrap_or_else(|| t.timezone().from_utc_datetime(&one_am))
}
