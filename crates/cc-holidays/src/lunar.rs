//! Lunar-calendar holidays: Lunar New Year (설날), Buddha's Birthday, and
//! Chuseok (추석).
//!
//! Each holiday is located by scanning a bounded window of solar days and
//! asking the oracle for each day's lunar month and day.  The lunar–solar
//! offset drifts by weeks from year to year, so the windows are wide.

use cc_core::config::{EngineConfig, OracleFailurePolicy, ScanWindow};
use cc_core::errors::Result;
use cc_time::Date;
use tracing::{debug, trace, warn};

use crate::lunisolar::LunarCalendar;
use crate::observance::{Observance, ObservanceKind};

/// Scan forward from `search_start` for at most `max_days` solar days and
/// return the first day whose lunar date is `target_month`/`target_day` in
/// a regular (non-leap) month.
///
/// `Ok(None)` means the date does not fall inside the window this year.
///
/// # Errors
/// Propagates oracle failures (`Error::LunarConversion`) and date range
/// errors; these are distinct from "not found".
pub fn find_lunar_date<L: LunarCalendar + ?Sized>(
    oracle: &L,
    search_start: Date,
    max_days: u32,
    target_month: u8,
    target_day: u8,
) -> Result<Option<Date>> {
    let mut date = search_start;
    for i in 0..max_days {
        let lunar = oracle.to_lunar(date)?;
        if !lunar.is_leap_month && lunar.month == target_month && lunar.day == target_day {
            trace!(%date, target_month, target_day, scanned = i + 1, "lunar date found");
            return Ok(Some(date));
        }
        if i + 1 < max_days {
            date = date.add_days(1)?;
        }
    }
    Ok(None)
}

/// The three lunar-calendar holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarHoliday {
    /// Lunar 1/1, observed with the day before and after.
    NewYear,
    /// Lunar 4/8, a single day.
    BuddhasBirthday,
    /// Lunar 8/15, observed with the day before and after.
    Chuseok,
}

impl LunarHoliday {
    /// All lunar holidays, in the order they are added to a year.
    pub const ALL: [LunarHoliday; 3] = [
        LunarHoliday::NewYear,
        LunarHoliday::BuddhasBirthday,
        LunarHoliday::Chuseok,
    ];

    /// Lunar `(month, day)`.
    pub fn lunar_month_day(&self) -> (u8, u8) {
        match self {
            LunarHoliday::NewYear => (1, 1),
            LunarHoliday::BuddhasBirthday => (4, 8),
            LunarHoliday::Chuseok => (8, 15),
        }
    }

    /// The configured search window.
    pub fn window(&self, config: &EngineConfig) -> ScanWindow {
        match self {
            LunarHoliday::NewYear => config.lunar_new_year,
            LunarHoliday::BuddhasBirthday => config.buddhas_birthday,
            LunarHoliday::Chuseok => config.chuseok,
        }
    }

    /// `(day offset, kind)` of every observance derived from the holiday.
    pub fn span(&self) -> &'static [(i32, ObservanceKind)] {
        match self {
            LunarHoliday::NewYear => &[
                (-1, ObservanceKind::LunarNewYearEve),
                (0, ObservanceKind::LunarNewYear),
                (1, ObservanceKind::LunarNewYearAfter),
            ],
            LunarHoliday::BuddhasBirthday => &[(0, ObservanceKind::BuddhasBirthday)],
            LunarHoliday::Chuseok => &[
                (-1, ObservanceKind::ChuseokEve),
                (0, ObservanceKind::Chuseok),
                (1, ObservanceKind::ChuseokAfter),
            ],
        }
    }

    /// Locate the holiday's main day in `year`.
    pub fn locate<L: LunarCalendar + ?Sized>(
        &self,
        year: u16,
        config: &EngineConfig,
        oracle: &L,
    ) -> Result<Option<Date>> {
        let window = self.window(config);
        let mut start = Date::from_ymd(year, window.start_month, window.start_day)?;
        let mut max_days = window.max_days;
        // scan only the part of the window the oracle covers; a window
        // entirely before its range still reports the conversion error
        if let Some(first) = oracle.first_supported() {
            let skipped = first - start;
            if skipped > 0 && (skipped as u32) < max_days {
                trace!(year, holiday = ?self, skipped, "search window clamped to oracle range");
                start = first;
                max_days -= skipped as u32;
            }
        }
        let (month, day) = self.lunar_month_day();
        find_lunar_date(oracle, start, max_days, month, day)
    }

    /// The holiday's observances in `year`, empty if it is not found.
    ///
    /// Span days falling in a neighbouring year are dropped; they belong
    /// to that year's index, not this one.
    pub fn observances<L: LunarCalendar + ?Sized>(
        &self,
        year: u16,
        config: &EngineConfig,
        oracle: &L,
    ) -> Result<Vec<(Date, Observance)>> {
        let Some(main) = self.locate(year, config, oracle)? else {
            debug!(year, holiday = ?self, "lunar holiday not in search window");
            return Ok(Vec::new());
        };
        let mut entries = Vec::with_capacity(self.span().len());
        for &(offset, kind) in self.span() {
            match main.add_days(offset) {
                Ok(date) if date.year() == year => entries.push((date, Observance::new(kind))),
                _ => debug!(year, %main, offset, ?kind, "span day outside year dropped"),
            }
        }
        Ok(entries)
    }
}

/// Every lunar-holiday observance of `year`, applying the configured
/// oracle failure policy.
pub fn lunar_holidays<L: LunarCalendar + ?Sized>(
    year: u16,
    config: &EngineConfig,
    oracle: &L,
) -> Result<Vec<(Date, Observance)>> {
    let mut entries = Vec::new();
    for holiday in LunarHoliday::ALL {
        match holiday.observances(year, config, oracle) {
            Ok(found) => entries.extend(found),
            Err(e) if config.on_oracle_failure == OracleFailurePolicy::Omit => {
                warn!(year, ?holiday, oracle = oracle.name(), error = %e, "omitting lunar holiday");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(entries)
}
