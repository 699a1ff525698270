//! Error types for the parsing functions in this crate.

/// Error returned when a string does not match the format a parser expects.
///
/// Formatting and lookup functions never fail; only the `parse_*` family
/// returns this type.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid epoch millisecond string '{0}'")]
    EpochMillis(String, #[source] std::num::ParseIntError),

    #[error("'{0}' is not a valid ISO 8601 date/time string")]
    Iso8601(String),

    #[error("'{0}' does not match the Bubble date/time layout")]
    BubbleTime(String, #[source] chrono::ParseError),

    #[error("'{0}' is not a valid HH:MM:SS duration string")]
    HourMinuteSecond(String),
}
