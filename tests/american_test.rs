use chrono::{Datelike, Duration, FixedOffset, Local, TimeZone, Timelike, Utc};
use timekit::american::*;

#[test]
fn test_format_american_datetime() {
    let t = Utc.with_ymd_and_hms(2021, 1, 2, 15, 4, 5).unwrap();
    assert_eq!(format_american_datetime(&t), "January 2, 2021 3:04:05 PM");
}

#[test]
fn test_format_american_datetime_morning() {
    let t = Utc.with_ymd_and_hms(2021, 1, 2, 9, 4, 5).unwrap();
    assert_eq!(format_american_datetime(&t), "January 2, 2021 9:04:05 AM");
}

#[test]
fn test_format_american_datetime_midnight_and_noon() {
    let midnight = Utc.with_ymd_and_hms(2021, 1, 2, 0, 4, 5).unwrap();
    assert_eq!(format_american_datetime(&midnight), "January 2, 2021 12:04:05 AM");

    let noon = Utc.with_ymd_and_hms(2021, 1, 2, 12, 4, 5).unwrap();
    assert_eq!(format_american_datetime(&noon), "January 2, 2021 12:04:05 PM");
}

#[test]
fn test_format_american_date() {
    let t = Utc.with_ymd_and_hms(2021, 1, 2, 15, 4, 5).unwrap();
    assert_eq!(format_american_date(&t), "January 2, 2021");

    let t = Utc.with_ymd_and_hms(2021, 11, 30, 0, 0, 0).unwrap();
    assert_eq!(format_american_date(&t), "November 30, 2021");
}

#[test]
fn test_to_1am_keeps_date_and_zone() {
    let tz = FixedOffset::west_opt(5 * 3600).unwrap(); // -05:00
    let t = tz.with_ymd_and_hms(2021, 6, 15, 23, 59, 59).unwrap();
    let one_am = to_1am(&t);
    assert_eq!(one_am, tz.with_ymd_and_hms(2021, 6, 15, 1, 0, 0).unwrap());
    assert_eq!(one_am.offset(), t.offset());
}

#[test]
fn test_to_1am_local() {
    let t = Local.with_ymd_and_hms(2021, 6, 15, 23, 59, 59).unwrap();
    let one_am = to_1am(&t);
    assert_eq!(
        (one_am.year(), one_am.month(), one_am.day()),
        (2021, 6, 15)
    );
    assert_eq!((one_am.hour(), one_am.minute(), one_am.second()), (1, 0, 0));
}

#[test]
fn test_to_1am_clears_sub_second_precision() {
    let t = Utc.with_ymd_and_hms(2021, 6, 15, 4, 30, 15).unwrap() + Duration::milliseconds(123);
    let one_am = to_1am(&t);
    assert_eq!((one_am.hour(), one_am.minute(), one_am.second()), (1, 0, 0));
    assert_eq!(one_am.nanosecond(), 0);
}

#[test]
fn test_to_1am_does_not_move_the_input() {
    let t = Utc.with_ymd_and_hms(2021, 6, 15, 23, 59, 59).unwrap();
    let _ = to_1am(&t);
    assert_eq!(t, Utc.with_ymd_and_hms(2021, 6, 15, 23, 59, 59).unwrap());
}
