//! Integration tests for `Date`, `Weekday`, and Easter.

use cc_time::date::{days_in_month, is_leap_year};
use cc_time::{easter_date, easter_sunday, Date, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Date tests ───────────────────────────────────────────────────────────────

#[test]
fn consistency() {
    // Walk every day across several centuries and check that serial,
    // (y, m, d) and weekday all advance together.
    let mut prev = date(1583, 1, 1);
    let end = date(2400, 12, 31);
    let mut d = prev.add_days(1).unwrap();
    while d <= end {
        assert_eq!(d - prev, 1);
        let (py, pm, pd) = prev.ymd();
        let (y, m, day) = d.ymd();
        let same_month = y == py && m == pm && day == pd + 1;
        let next_month = y == py && m == pm + 1 && day == 1 && pd == days_in_month(py, pm).unwrap();
        let next_year = y == py + 1 && m == 1 && day == 1 && pm == 12 && pd == 31;
        assert!(same_month || next_month || next_year, "{prev:?} -> {d:?}");

        let wd = d.weekday().ordinal();
        let pwd = prev.weekday().ordinal();
        assert!(wd == pwd + 1 || (wd == 1 && pwd == 7), "{prev:?} -> {d:?}");

        prev = d;
        d = d.add_days(1).unwrap();
    }
}

#[test]
fn leap_years() {
    assert!(is_leap_year(1600));
    assert!(!is_leap_year(1700));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_month(2024, 2).unwrap(), 29);
    assert_eq!(days_in_month(2025, 2).unwrap(), 28);
    assert!(Date::from_ymd(2025, 2, 29).is_err());
}

#[test]
fn range_limits() {
    assert_eq!(Date::MIN, date(1583, 1, 1));
    assert_eq!(Date::MAX, date(9999, 12, 31));
    assert!(Date::from_ymd(1582, 12, 31).is_err());
    assert!(Date::from_serial(Date::MIN.serial() - 1).is_err());
    assert_eq!(Date::from_serial(1).unwrap(), date(1900, 1, 1));
}

#[test]
fn storage_keys() {
    assert_eq!(date(2024, 10, 9).to_key_string(), "2024-10-9");
    assert_eq!(date(2024, 1, 10).to_key_string(), "2024-1-10");
    assert_ne!(date(2024, 1, 1).to_key_string(), date(2024, 11, 1).to_key_string());
}

// ─── Easter tests ─────────────────────────────────────────────────────────────

#[test]
fn easter_known_sundays() {
    let known = [
        (1900, 4, 15),
        (1961, 4, 2),
        (2000, 4, 23),
        (2008, 3, 23),
        (2011, 4, 24),
        (2019, 4, 21),
        (2023, 4, 9),
        (2024, 3, 31),
        (2025, 4, 20),
        (2026, 4, 5),
        (2030, 4, 21),
    ];
    for (y, m, d) in known {
        assert_eq!(easter_sunday(y).unwrap(), (m, d), "Easter {y}");
        assert_eq!(easter_date(y).unwrap(), date(y as u16, m, d));
    }
}

proptest! {
    #[test]
    fn easter_is_sunday_between_march_22_and_april_25(year in 1583i32..=9999) {
        let easter = easter_date(year).unwrap();
        prop_assert_eq!(easter.weekday(), Weekday::Sunday);
        let earliest = date(year as u16, 3, 22);
        let latest = date(year as u16, 4, 25);
        prop_assert!(earliest <= easter && easter <= latest);
    }

    #[test]
    fn ymd_roundtrip(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let (y, m, day) = d.ymd();
        prop_assert_eq!(Date::from_ymd(y, m, day).unwrap(), d);
    }
}
