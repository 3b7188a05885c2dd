//! `Date` type.
//!
//! Dates are stored as a serial number of days.  Serial 1 is January 1, 1900
//! (a Monday); earlier dates have zero or negative serials.
//!
//! # Valid range
//! The proleptic Gregorian calendar from 1583-01-01 (the first full
//! Gregorian year) to 9999-12-31.

use std::str::FromStr;

use crate::weekday::Weekday;
use cc_core::errors::{Error, Result};

/// First supported year.
pub const MIN_YEAR: u16 = 1583;

/// Last supported year.
pub const MAX_YEAR: u16 = 9999;

/// Days from 1970-01-01 to 1900-01-01, plus one so that 1900-01-01 is serial 1.
const SERIAL_OFFSET: i32 = 25_568;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1583.
    pub const MIN: Date = Date(days_from_civil(MIN_YEAR as i32, 1, 1) + SERIAL_OFFSET);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(days_from_civil(MAX_YEAR as i32, 12, 31) + SERIAL_OFFSET);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        let days_in = days_in_month(year, month)?;
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(
            days_from_civil(year as i32, month as i32, day as i32) + SERIAL_OFFSET,
        ))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        let (y, m, d) = civil_from_days(self.0 - SERIAL_OFFSET);
        (y as u16, m as u8, d as u8)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 → Monday, serial 7 → Sunday
        Weekday::ALL[(self.0 - 1).rem_euclid(7) as usize]
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic overflow: {self:?} + {n}")))
            .and_then(Date::from_serial)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// The first `weekday` on or after `self` (`self` itself if it matches).
    pub fn next_weekday_on_or_after(self, weekday: Weekday) -> Result<Self> {
        let skip = (weekday.ordinal() as i32 - self.weekday().ordinal() as i32).rem_euclid(7);
        self.add_days(skip)
    }

    /// The first `weekday` strictly after `self` (a week later if `self`
    /// already falls on `weekday`).
    pub fn next_weekday_after(self, weekday: Weekday) -> Result<Self> {
        self.add_days(1)?.next_weekday_on_or_after(weekday)
    }

    /// The last `weekday` on or before `self` (`self` itself if it matches).
    pub fn last_weekday_on_or_before(self, weekday: Weekday) -> Result<Self> {
        let back = (self.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        self.add_days(-back)
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// For example, `nth_weekday(3, Weekday::Sunday, 2024, 11)` returns the
    /// third Sunday of November 2024 (2024-11-17).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?.next_weekday_on_or_after(weekday)?;
        let day = first.day_of_month() as u32 + 7 * (n as u32 - 1);
        if day > days_in_month(year, month)? as u32 {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday:?} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }

    /// Format as the unpadded `YYYY-M-D` key used for day-indexed storage.
    pub fn to_key_string(&self) -> String {
        let (y, m, d) = self.ymd();
        format!("{y}-{m}-{d}")
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse `YYYY-MM-DD`; zero padding of month and day is optional.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::Date(format!("cannot parse {s:?} as YYYY-MM-DD"));
        let parts: Vec<&str> = s.trim().split('-').collect();
        let [y, m, d] = parts.as_slice() else {
            return Err(invalid());
        };
        let y = y.parse::<u16>().map_err(|_| invalid())?;
        let m = m.parse::<u8>().map_err(|_| invalid())?;
        let d = d.parse::<u8>().map_err(|_| invalid())?;
        Date::from_ymd(y, m, d)
    }
}

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(date: Date) -> Self {
        let (y, m, d) = date.ymd();
        // every Date in [MIN, MAX] is representable
        chrono::NaiveDate::from_ymd_opt(y as i32, m as u32, d as u32).unwrap_or_default()
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(date: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(date.year())
            .map_err(|_| Error::Date(format!("year {} out of range", date.year())))?;
        Date::from_ymd(year, date.month() as u8, date.day() as u8)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// `Error::Date` if `month` is not in 1–12.
pub fn days_in_month(year: u16, month: u8) -> Result<u8> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(Error::Date(format!("month {month} out of range [1, 12]"))),
    }
}

/// Validate a caller-supplied year, returning it as a `u16`.
///
/// # Errors
/// `Error::InvalidArgument` if `year` is outside [`MIN_YEAR`, `MAX_YEAR`].
pub fn validate_year(year: i32) -> Result<u16> {
    if !(MIN_YEAR as i32..=MAX_YEAR as i32).contains(&year) {
        return Err(Error::InvalidArgument(format!(
            "year {year} out of supported Gregorian range [{MIN_YEAR}, {MAX_YEAR}]"
        )));
    }
    Ok(year as u16)
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
const fn days_from_civil(y: i32, m: i32, d: i32) -> i32 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
const fn civil_from_days(z: i32) -> (i32, i32, i32) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + if m <= 2 { 1 } else { 0 };
    (y, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
