//! Month abbreviation lookup tables.
//!
//! Two immutable tables, built once on first use: one keyed by
//! [`chrono::Month`], one keyed by the 1-based month number. Safe for
//! concurrent reads without synchronization.

use std::collections::HashMap;

use chrono::Month;
use once_cell::sync::Lazy;

static MONTH_ABBREVIATIONS: Lazy<HashMap<Month, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (Month::January, "Jan"),
        (Month::February, "Feb"),
        (Month::March, "Mar"),
        (Month::April, "Apr"),
        (Month::May, "May"),
        (Month::June, "Jun"),
        (Month::July, "Jul"),
        (Month::August, "Aug"),
        (Month::September, "Sep"),
        (Month::October, "Oct"),
        (Month::November, "Nov"),
        (Month::December, "Dec"),
    ])
});

static MONTH_NUMBER_ABBREVIATIONS: Lazy<HashMap<i32, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (1, "Jan"),
        (2, "Feb"),
        (3, "Mar"),
        (4, "Apr"),
        (5, "May"),
        (6, "Jun"),
        (7, "Jul"),
        (8, "Aug"),
        (9, "Sep"),
        (10, "Oct"),
        (11, "Nov"),
        (12, "Dec"),
    ])
});

/// Return the 3-character abbreviation for the given month.
#[must_use]
pub fn month_abbreviation(month: Month) -> &'static str {
    MONTH_ABBREVIATIONS.get(&month).copied().unwrap_or_default()
}

/// Return the 3-character abbreviation for the given month number (1-12).
///
/// Anything outside 1-12 yields an empty string rather than an error.
#[must_use]
pub fn month_abbreviation_by_int(month: i32) -> &'static str {
    MONTH_NUMBER_ABBREVIATIONS.get(&month).copied().unwrap_or_default()
}
