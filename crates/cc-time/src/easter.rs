//! Gregorian Easter Sunday.
//!
//! Anonymous Gregorian algorithm, integer arithmetic only.  Every movable
//! feast in `cc-holidays` is an offset from this date, so the residue chain
//! below must stay exact.

use crate::date::{validate_year, Date};
use cc_core::errors::Result;

/// Return `(month, day)` of Easter Sunday in `year`.
///
/// # Errors
/// `Error::InvalidArgument` if `year` is outside the supported Gregorian
/// range (1583–9999).
///
/// # Example
/// ```
/// assert_eq!(cc_time::easter::easter_sunday(2024).unwrap(), (3, 31));
/// assert_eq!(cc_time::easter::easter_sunday(2025).unwrap(), (4, 20));
/// ```
pub fn easter_sunday(year: i32) -> Result<(u8, u8)> {
    let y = validate_year(year)? as i32;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let l = i - j;
    let month = 3 + (l + 40) / 44;
    let day = l + 28 - 31 * (month / 4);
    Ok((month as u8, day as u8))
}

/// Return Easter Sunday of `year` as a [`Date`].
pub fn easter_date(year: i32) -> Result<Date> {
    let (month, day) = easter_sunday(year)?;
    Date::from_ymd(year as u16, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;
    use cc_core::errors::Error;

    #[test]
    fn known_dates() {
        assert_eq!(easter_sunday(2023).unwrap(), (4, 9));
        assert_eq!(easter_sunday(2024).unwrap(), (3, 31));
        assert_eq!(easter_sunday(2025).unwrap(), (4, 20));
    }

    #[test]
    fn extreme_dates() {
        // earliest possible (March 22) and latest possible (April 25)
        assert_eq!(easter_sunday(1818).unwrap(), (3, 22));
        assert_eq!(easter_sunday(2285).unwrap(), (3, 22));
        assert_eq!(easter_sunday(1943).unwrap(), (4, 25));
        assert_eq!(easter_sunday(2038).unwrap(), (4, 25));
    }

    #[test]
    fn always_a_sunday_in_window() {
        for y in 1583..=2600 {
            let d = easter_date(y).unwrap();
            assert_eq!(d.weekday(), Weekday::Sunday, "{y}");
            let (m, day) = (d.month(), d.day_of_month());
            assert!((m == 3 && day >= 22) || (m == 4 && day <= 25), "{y}: {d}");
        }
    }

    #[test]
    fn rejects_out_of_range_year() {
        assert!(matches!(easter_sunday(-33), Err(Error::InvalidArgument(_))));
        assert!(matches!(easter_sunday(1582), Err(Error::InvalidArgument(_))));
        assert!(matches!(easter_date(10_000), Err(Error::InvalidArgument(_))));
    }
}
