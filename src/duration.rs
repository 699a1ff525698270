//! `HH:MM:SS` duration parsing.

use chrono::Duration;

use crate::error::ParseError;

/// Parse a `HH:MM:SS` string (e.g. `"08:30:00"`) into a [`Duration`].
///
/// Exactly three colon-separated unsigned decimal fields are required;
/// anything else is a [`ParseError::HourMinuteSecond`].
pub fn parse_hhmmss(s: &str) -> Result<Duration, ParseError> {
    let mut fields = [0i64; 3];
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != fields.len() {
        return Err(ParseError::HourMinuteSecond(s.to_string()));
    }
    for (field, part) in fields.iter_mut().zip(&parts) {
        *field = part
            .parse::<u32>()
            .map(i64::from)
            .map_err(|_| ParseError::HourMinuteSecond(s.to_string()))?;
    }
    Ok(Duration::hours(fields[0]) + Duration::minutes(fields[1]) + Duration::seconds(fields[2]))
}
