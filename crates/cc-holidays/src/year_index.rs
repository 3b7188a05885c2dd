//! Per-year index of observances keyed by month and day.

use std::collections::BTreeMap;
use std::str::FromStr;

use cc_core::errors::{Error, Result};
use cc_time::date::days_in_month;
use cc_time::Date;
use serde::{Serialize, Serializer};

use crate::observance::{Observance, ObservanceKind};

/// A `(month, day)` key without a year.
///
/// Keys order by month, then day.  They display and parse as the unpadded
/// `"M-D"` string; parsing also accepts zero padding, so `"03-01"` and
/// `"3-1"` are the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey {
    month: u8,
    day: u8,
}

impl DayKey {
    /// Create a key.  February 29 is accepted.
    pub fn new(month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidArgument(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        // 2000 is a leap year, so this admits Feb 29
        let max = days_in_month(2000, month)?;
        if day == 0 || day > max {
            return Err(Error::InvalidArgument(format!(
                "day {day} out of range [1, {max}] for month {month}"
            )));
        }
        Ok(Self { month, day })
    }

    /// Month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }
}

impl From<Date> for DayKey {
    fn from(date: Date) -> Self {
        let (_, month, day) = date.ymd();
        Self { month, day }
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.month, self.day)
    }
}

impl FromStr for DayKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidArgument(format!("cannot parse {s:?} as M-D"));
        let (m, d) = s.trim().split_once('-').ok_or_else(invalid)?;
        let month = m.parse::<u8>().map_err(|_| invalid())?;
        let day = d.parse::<u8>().map_err(|_| invalid())?;
        DayKey::new(month, day)
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// All observances of one year, grouped by day.
///
/// Within a day, observances keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearIndex {
    year: u16,
    days: BTreeMap<DayKey, Vec<Observance>>,
}

impl YearIndex {
    /// Create an empty index for `year`.
    pub fn new(year: u16) -> Self {
        Self {
            year,
            days: BTreeMap::new(),
        }
    }

    /// The year this index describes.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Append `observance` to the list for `date`'s day.  Existing entries are
    /// never replaced.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `date` is not in this index's year.
    pub fn insert(&mut self, date: Date, observance: Observance) -> Result<()> {
        if date.year() != self.year {
            return Err(Error::InvalidArgument(format!(
                "{date} does not belong to year index {}",
                self.year
            )));
        }
        self.days
            .entry(DayKey::from(date))
            .or_default()
            .push(observance);
        Ok(())
    }

    /// Append many `(date, observance)` pairs in order.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = (Date, Observance)>) -> Result<()> {
        for (date, observance) in entries {
            self.insert(date, observance)?;
        }
        Ok(())
    }

    /// Observances on `key`, empty if none.
    pub fn get(&self, key: DayKey) -> &[Observance] {
        self.days.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Observances on `date`; empty if `date` is in another year.
    pub fn on(&self, date: Date) -> &[Observance] {
        if date.year() != self.year {
            return &[];
        }
        self.get(DayKey::from(date))
    }

    /// Iterate over days carrying at least one observance, in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (DayKey, &[Observance])> + '_ {
        self.days.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Number of days carrying at least one observance.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// `true` if no day carries an observance.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of observances across all days.
    pub fn observance_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// The first date carrying `kind`, if present.
    pub fn find(&self, kind: ObservanceKind) -> Option<Date> {
        self.dates_of(kind).next()
    }

    /// Every date carrying `kind`, in calendar order.
    pub fn dates_of(&self, kind: ObservanceKind) -> impl Iterator<Item = Date> + '_ {
        self.days
            .iter()
            .filter(move |(_, list)| list.iter().any(|o| o.kind() == kind))
            .filter_map(|(key, _)| Date::from_ymd(self.year, key.month, key.day).ok())
    }

    /// `true` if any observance on `date` is a public holiday.
    pub fn is_public_holiday(&self, date: Date) -> bool {
        self.on(date).iter().any(Observance::is_public_holiday)
    }

    /// `true` if `date` is drawn as a non-working day: every Sunday, plus any
    /// public holiday.
    pub fn is_red_day(&self, date: Date) -> bool {
        date.weekday().is_sunday() || self.is_public_holiday(date)
    }

    /// Every public-holiday date, in calendar order.
    pub fn public_holidays(&self) -> impl Iterator<Item = Date> + '_ {
        self.days
            .iter()
            .filter(|(_, list)| list.iter().any(Observance::is_public_holiday))
            .filter_map(|(key, _)| Date::from_ymd(self.year, key.month, key.day).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn day_key_parse_and_display() {
        let key: DayKey = "03-01".parse().unwrap();
        assert_eq!(key, DayKey::new(3, 1).unwrap());
        assert_eq!(key.to_string(), "3-1");
        assert_ne!(DayKey::new(1, 1).unwrap(), "1-10".parse::<DayKey>().unwrap());
        assert!("2-29".parse::<DayKey>().is_ok());
        assert!("2-30".parse::<DayKey>().is_err());
        assert!("13-1".parse::<DayKey>().is_err());
        assert!("310".parse::<DayKey>().is_err());
    }

    #[test]
    fn day_keys_order_by_calendar() {
        let a = DayKey::new(1, 10).unwrap();
        let b = DayKey::new(2, 1).unwrap();
        let c = DayKey::new(10, 3).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn insert_appends_in_order() {
        let mut index = YearIndex::new(2025);
        let may5 = date(2025, 5, 5);
        index.insert(may5, ObservanceKind::ChildrensDay.into()).unwrap();
        index.insert(may5, ObservanceKind::BuddhasBirthday.into()).unwrap();
        let kinds: Vec<_> = index.on(may5).iter().map(Observance::kind).collect();
        assert_eq!(
            kinds,
            [ObservanceKind::ChildrensDay, ObservanceKind::BuddhasBirthday]
        );
        assert_eq!(index.len(), 1);
        assert_eq!(index.observance_count(), 2);
        assert!(index.is_public_holiday(may5));
    }

    #[test]
    fn insert_rejects_other_year() {
        let mut index = YearIndex::new(2025);
        let err = index
            .insert(date(2024, 12, 25), ObservanceKind::Christmas.into())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(index.is_empty());
        assert!(index.on(date(2024, 12, 25)).is_empty());
    }

    #[test]
    fn red_days() {
        let mut index = YearIndex::new(2024);
        index
            .insert(date(2024, 3, 31), ObservanceKind::Easter.into())
            .unwrap();
        index
            .insert(date(2024, 2, 14), ObservanceKind::AshWednesday.into())
            .unwrap();
        index
            .insert(date(2024, 10, 9), ObservanceKind::HangulDay.into())
            .unwrap();
        // Easter is a Sunday; Ash Wednesday is a colored working day
        assert!(index.is_red_day(date(2024, 3, 31)));
        assert!(!index.is_red_day(date(2024, 2, 14)));
        assert!(index.is_red_day(date(2024, 10, 9)));
        assert!(!index.is_red_day(date(2024, 10, 10)));
        assert_eq!(index.public_holidays().collect::<Vec<_>>(), [date(2024, 10, 9)]);
        assert_eq!(index.find(ObservanceKind::Easter), Some(date(2024, 3, 31)));
        assert_eq!(index.find(ObservanceKind::Pentecost), None);
    }
}
