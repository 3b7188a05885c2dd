//! The holiday engine: builds and caches a [`YearIndex`] per year.

use std::sync::{Arc, Mutex, PoisonError};

use cc_core::config::EngineConfig;
use cc_core::errors::Result;
use cc_time::{easter_date, validate_year, Date};
use tracing::{debug, instrument};

use crate::cache::YearCache;
use crate::civil::civil_holidays;
use crate::liturgical::derive_liturgical_dates;
use crate::lunar::lunar_holidays;
use crate::lunisolar::{LunarCalendar, TabularLunisolar};
use crate::year_index::YearIndex;

/// Civil, lunar, and liturgical observances for any year, with a
/// single-slot cache.
///
/// # Example
/// ```
/// use cc_holidays::{HolidayCalendar, ObservanceKind};
/// use cc_time::Date;
///
/// let mut calendar = HolidayCalendar::new();
/// let year = calendar.get_year_data(2025).unwrap();
/// assert_eq!(
///     year.find(ObservanceKind::Chuseok),
///     Some(Date::from_ymd(2025, 10, 6).unwrap())
/// );
/// ```
#[derive(Debug)]
pub struct HolidayCalendar<L = TabularLunisolar> {
    config: EngineConfig,
    oracle: L,
    cache: YearCache,
}

impl HolidayCalendar<TabularLunisolar> {
    /// Default configuration and the bundled lunisolar table.
    pub fn new() -> Self {
        Self::with_oracle(TabularLunisolar::new())
    }
}

impl Default for HolidayCalendar<TabularLunisolar> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LunarCalendar> HolidayCalendar<L> {
    /// Default configuration with the given oracle.
    pub fn with_oracle(oracle: L) -> Self {
        Self {
            config: EngineConfig::default(),
            oracle,
            cache: YearCache::new(),
        }
    }

    /// Validated configuration with the given oracle.
    pub fn with_config(config: EngineConfig, oracle: L) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            oracle,
            cache: YearCache::new(),
        })
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Lunisolar oracle.
    pub fn oracle(&self) -> &L {
        &self.oracle
    }

    /// The observances of `year`.
    ///
    /// Returns the cached index unchanged when `year` was the last year
    /// computed; otherwise computes it and replaces the cache.
    ///
    /// # Errors
    /// `Error::InvalidArgument` for a year outside 1583–9999, and oracle
    /// errors when the configuration asks for them to be propagated.
    #[instrument(level = "debug", skip(self))]
    pub fn get_year_data(&mut self, year: i32) -> Result<Arc<YearIndex>> {
        let y = validate_year(year)?;
        if let Some(index) = self.cache.get(y) {
            debug!("holiday cache hit");
            return Ok(index);
        }
        debug!(evicted = ?self.cache.year(), "holiday cache miss");
        let index = self.compute_year(year)?;
        Ok(self.cache.set(index))
    }

    /// Compute the observances of `year` without touching the cache.
    ///
    /// Entries are appended civil first, then lunar, then liturgical.
    pub fn compute_year(&self, year: i32) -> Result<YearIndex> {
        let y = validate_year(year)?;
        let mut index = YearIndex::new(y);
        index.extend(civil_holidays(y)?)?;
        index.extend(lunar_holidays(y, &self.config, &self.oracle)?)?;
        index.extend(derive_liturgical_dates(year, easter_date(year)?)?)?;
        debug!(
            year,
            days = index.len(),
            observances = index.observance_count(),
            "year index computed"
        );
        Ok(index)
    }

    /// `true` if `date` is a Sunday or a public holiday.
    pub fn is_red_day(&mut self, date: Date) -> Result<bool> {
        Ok(self.get_year_data(date.year() as i32)?.is_red_day(date))
    }

    /// Empty the cache.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// Year currently cached, if any.
    pub fn cached_year(&self) -> Option<u16> {
        self.cache.year()
    }
}

/// A [`HolidayCalendar`] that can be shared between threads.
///
/// The cache is replaced under a lock; readers keep their own
/// `Arc<YearIndex>` and never see a partially replaced slot.
#[derive(Debug)]
pub struct SharedHolidayCalendar<L = TabularLunisolar> {
    inner: Mutex<HolidayCalendar<L>>,
}

impl Default for SharedHolidayCalendar<TabularLunisolar> {
    fn default() -> Self {
        Self::new(HolidayCalendar::new())
    }
}

impl<L: LunarCalendar> SharedHolidayCalendar<L> {
    /// Wrap `calendar`.
    pub fn new(calendar: HolidayCalendar<L>) -> Self {
        Self {
            inner: Mutex::new(calendar),
        }
    }

    /// See [`HolidayCalendar::get_year_data`].
    pub fn get_year_data(&self, year: i32) -> Result<Arc<YearIndex>> {
        self.lock().get_year_data(year)
    }

    /// Empty the cache.
    pub fn invalidate(&self) {
        self.lock().invalidate();
    }

    /// Year currently cached, if any.
    pub fn cached_year(&self) -> Option<u16> {
        self.lock().cached_year()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HolidayCalendar<L>> {
        // a panic mid-computation leaves the previous slot intact
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observance::ObservanceKind;

    #[test]
    fn cache_hit_returns_same_index() {
        let mut cal = HolidayCalendar::new();
        let first = cal.get_year_data(2024).unwrap();
        let second = cal.get_year_data(2024).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cal.cached_year(), Some(2024));
    }

    #[test]
    fn miss_replaces_slot() {
        let mut cal = HolidayCalendar::new();
        let y2024 = cal.get_year_data(2024).unwrap();
        let y2025 = cal.get_year_data(2025).unwrap();
        assert_eq!(cal.cached_year(), Some(2025));
        let again = cal.get_year_data(2024).unwrap();
        assert!(!Arc::ptr_eq(&y2024, &again));
        assert_eq!(*y2024, *again);
        assert_ne!(*y2024, *y2025);
    }

    #[test]
    fn invalidate_forces_recompute() {
        let mut cal = HolidayCalendar::new();
        let before = cal.get_year_data(2023).unwrap();
        cal.invalidate();
        assert_eq!(cal.cached_year(), None);
        let after = cal.get_year_data(2023).unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(*before, *after);
    }

    #[test]
    fn invalid_year_leaves_cache_alone() {
        let mut cal = HolidayCalendar::new();
        cal.get_year_data(2024).unwrap();
        assert!(matches!(
            cal.get_year_data(-5),
            Err(cc_core::Error::InvalidArgument(_))
        ));
        assert_eq!(cal.cached_year(), Some(2024));
    }

    #[test]
    fn red_days() {
        let mut cal = HolidayCalendar::new();
        let date = |m, d| Date::from_ymd(2024, m, d).unwrap();
        assert!(cal.is_red_day(date(2, 10)).unwrap()); // 설날
        assert!(cal.is_red_day(date(2, 11)).unwrap()); // Sunday
        assert!(!cal.is_red_day(date(2, 14)).unwrap()); // Ash Wednesday
        assert!(!cal.is_red_day(date(5, 15)).unwrap()); // Buddha's Birthday
    }

    #[test]
    fn shared_calendar() {
        let shared = Arc::new(SharedHolidayCalendar::new(HolidayCalendar::new()));
        let handles: Vec<_> = [2024, 2025, 2024, 2026]
            .into_iter()
            .map(|year| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || shared.get_year_data(year).unwrap())
            })
            .collect();
        for handle in handles {
            let index = handle.join().unwrap();
            assert!(index.find(ObservanceKind::Easter).is_some());
        }
        assert!(shared.cached_year().is_some());
        shared.invalidate();
        assert_eq!(shared.cached_year(), None);
    }
}
