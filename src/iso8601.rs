//! ISO 8601 formatting and parsing.
//!
//! Output sticks to the RFC 3339 profile; parsing is deliberately wider and
//! accepts the ISO 8601 shapes commonly seen in the wild (basic and extended
//! forms, varying fractional-second precision, `Z` or numeric offsets).

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone};

use crate::error::ParseError;

/// Extended or basic date/time with an explicit offset (`Z`, `+02`,
/// `+0200`, `+02:00`), optional fractional seconds.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y%m%dT%H%M%S%.f%#z"];

/// Zone-less variants of the same shapes, plus the space-separated form.
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y%m%dT%H%M%S%.f"];

/// Format `t` as an ISO 8601 (RFC 3339 profile) string, e.g.
/// `"2021-01-01T00:00:00+00:00"`.
///
/// Second precision, numeric offset always; the instant's own offset is
/// preserved rather than normalized to UTC.
pub fn format_iso8601<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    t.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Parse an ISO 8601 date/time string.
///
/// Tries RFC 3339 first, then falls back through the wider ISO 8601 shapes:
/// offsets without colons, zone-less date/times (taken as UTC), the
/// space-separated variant, the basic `YYYYMMDDTHHMMSS` form, and a bare
/// `YYYY-MM-DD` date (midnight UTC).
///
/// # Arguments
/// * `s` - ISO 8601 date/time string, e.g. `"2021-01-01T00:00:00Z"`
///
/// # Returns
/// * `Result<DateTime<FixedOffset>, ParseError>` - Parsed instant or parse error
pub fn parse_iso8601(s: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            log::trace!("parsed {s:?} with non-RFC 3339 format {format:?}");
            return Ok(dt);
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            log::trace!("parsed {s:?} as zone-less {format:?}, assuming UTC");
            return Ok(dt.and_utc().fixed_offset());
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN).and_utc().fixed_offset());
    }

    Err(ParseError::Iso8601(s.to_string()))
}
