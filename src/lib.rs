//! Timekit - date/time conversion helpers
//!
//! This library collects small, stateless functions for converting between
//! the timestamp and date/time string formats a backend typically meets at
//! its edges: JavaScript epoch-millisecond timestamps, ISO 8601 strings,
//! the fixed display format emitted by the Bubble no-code platform,
//! `HH:MM:SS` duration strings, and American-style date notation.
//!
//! Everything operates on [`chrono`] types and every function is pure, so
//! the whole crate is safe to call concurrently without synchronization.
//!
//! # Modules
//!
//! * [`american`] - American-notation formatting and 1 AM normalization
//! * [`bubble`] - Bubble fixed-format date/time parsing
//! * [`duration`] - `HH:MM:SS` duration parsing
//! * [`epoch`] - Epoch-millisecond timestamp conversions
//! * [`error`] - The crate's parse error type
//! * [`iso8601`] - ISO 8601 formatting and parsing
//! * [`month`] - Month abbreviation lookup tables

/// American date notation formatting and time-of-day normalization
pub mod american;

/// Parsing for the Bubble platform's fixed date/time format
pub mod bubble;

/// `HH:MM:SS` duration string parsing
pub mod duration;

/// Conversions between epoch-millisecond timestamps and date/time values
pub mod epoch;

/// Error types returned by the parsing functions
pub mod error;

/// ISO 8601 formatting and parsing
pub mod iso8601;

/// Month abbreviation lookup tables
pub mod month;

// Re-export the conversion functions for convenient access
pub use american::{format_american_date, format_american_datetime, to_1am};
pub use bubble::parse_bubble_time;
pub use duration::parse_hhmmss;
pub use epoch::{parse_epoch_millis, parse_epoch_millis_str, to_epoch_millis};
pub use error::ParseError;
pub use iso8601::{format_iso8601, parse_iso8601};
pub use month::{month_abbreviation, month_abbreviation_by_int};
