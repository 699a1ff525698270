//! Conversions between epoch-millisecond timestamps and [`DateTime`] values.
//!
//! JavaScript's `Date.getTime()` reports milliseconds since the Unix epoch,
//! so these functions are the bridge between a web client's timestamps and
//! the chrono types used on the Rust side.

use chrono::{DateTime, Local, LocalResult, TimeZone, Utc};

use crate::error::ParseError;

/// Convert milliseconds since the Unix epoch into a [`DateTime`] in the
/// local time zone.
///
/// Accepts the output of JavaScript's `Date.getTime()` directly. Negative
/// values are instants before 1970.
pub fn parse_epoch_millis(millis: i64) -> DateTime<Local> {
    match Local.timestamp_millis_opt(millis) {
        LocalResult::Single(dt) => dt,
        // chrono cannot represent instants this far from the epoch;
        // clamp to its representable bounds
        _ if millis < 0 => DateTime::<Utc>::MIN_UTC.with_timezone(&Local),
        _ => DateTime::<Utc>::MAX_UTC.with_timezone(&Local),
    }
}

/// Parse a base-10 string of milliseconds since the Unix epoch into a
/// [`DateTime`] in the local time zone.
///
/// # Arguments
/// * `s` - Signed 64-bit integer string, e.g. `"1609459200000"`
///
/// # Returns
/// * `Result<DateTime<Local>, ParseError>` - Parsed instant or parse error
pub fn parse_epoch_millis_str(s: &str) -> Result<DateTime<Local>, ParseError> {
    let millis = s
        .parse::<i64>()
        .map_err(|e| ParseError::EpochMillis(s.to_string(), e))?;
    Ok(parse_epoch_millis(millis))
}

/// Return the timestamp of `t` for handing back to a JavaScript client.
///
/// Despite the name, the value is **whole seconds** since the Unix epoch,
/// not milliseconds; this keeps parity with the long-standing interop
/// contract, where the client reconstructs the date with
/// `new Date(ts * 1000)`. Use [`DateTime::timestamp_millis`] if you need
/// actual millisecond precision.
pub fn to_epoch_millis<Tz: TimeZone>(t: &DateTime<Tz>) -> i64 {
    t.timestamp()
}
