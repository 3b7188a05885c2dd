//! Fixed-date civil holidays of South Korea.

use cc_core::errors::Result;
use cc_time::Date;

use crate::observance::{Observance, ObservanceKind};

/// `(month, day, kind)` for every nationally fixed holiday.
///
/// * New Year's Day (Jan 1)
/// * Independence Movement Day (Mar 1)
/// * Children's Day (May 5)
/// * Memorial Day (Jun 6)
/// * Liberation Day (Aug 15)
/// * National Foundation Day (Oct 3)
/// * Hangul Day (Oct 9)
/// * Christmas Day (Dec 25), also a liturgical feast
pub const FIXED_CIVIL_HOLIDAYS: [(u8, u8, ObservanceKind); 8] = [
    (1, 1, ObservanceKind::NewYearsDay),
    (3, 1, ObservanceKind::IndependenceMovementDay),
    (5, 5, ObservanceKind::ChildrensDay),
    (6, 6, ObservanceKind::MemorialDay),
    (8, 15, ObservanceKind::LiberationDay),
    (10, 3, ObservanceKind::NationalFoundationDay),
    (10, 9, ObservanceKind::HangulDay),
    (12, 25, ObservanceKind::Christmas),
];

/// The fixed civil holidays of `year`, in table order.
pub fn civil_holidays(year: u16) -> Result<Vec<(Date, Observance)>> {
    FIXED_CIVIL_HOLIDAYS
        .iter()
        .map(|&(m, d, kind)| Ok((Date::from_ymd(year, m, d)?, Observance::new(kind))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observance::{Category, Color};

    #[test]
    fn all_public_holidays() {
        let entries = civil_holidays(2024).unwrap();
        assert_eq!(entries.len(), 8);
        assert!(entries.iter().all(|(_, o)| o.is_public_holiday()));
    }

    #[test]
    fn only_christmas_is_liturgical() {
        for (date, o) in civil_holidays(2024).unwrap() {
            if o.kind() == ObservanceKind::Christmas {
                assert_eq!((date.month(), date.day_of_month()), (12, 25));
                assert_eq!(o.category(), Category::LiturgicalSeason);
                assert_eq!(o.color(), Some(Color::Gold));
            } else {
                assert_eq!(o.category(), Category::CivilHoliday, "{}", o.kind());
                assert_eq!(o.color(), None);
            }
        }
    }

    #[test]
    fn hangul_day() {
        let entries = civil_holidays(2023).unwrap();
        let (date, o) = &entries[6];
        assert_eq!(*date, Date::from_ymd(2023, 10, 9).unwrap());
        assert_eq!(o.name(), "한글날");
    }
}
