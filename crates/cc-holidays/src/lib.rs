//! # cc-holidays
//!
//! Computes, for one Gregorian year, every observance shown on the church
//! calendar: fixed Korean public holidays, the lunar-calendar holidays, and
//! the movable feasts of the church year.  Results are indexed by
//! month-day and cached one year at a time.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Single-slot year cache.
pub mod cache;

/// `HolidayCalendar`, the engine entry point.
pub mod calendar;

/// Fixed-date Korean public holidays.
pub mod civil;

/// Movable feasts of the church year.
pub mod liturgical;

/// Lunar-calendar holiday search.
pub mod lunar;

/// Lunisolar date conversion.
pub mod lunisolar;

/// Observance records and their display attributes.
pub mod observance;

/// Church season header badge.
pub mod season;

/// Month-day index of one year's observances.
pub mod year_index;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cache::YearCache;
pub use calendar::{HolidayCalendar, SharedHolidayCalendar};
pub use civil::{civil_holidays, FIXED_CIVIL_HOLIDAYS};
pub use liturgical::{derive_liturgical_dates, MovableFeasts};
pub use lunar::{find_lunar_date, lunar_holidays, LunarHoliday};
pub use lunisolar::{LunarCalendar, LunarDate, TabularLunisolar};
pub use observance::{BadgeStyle, Category, Color, Observance, ObservanceKind};
pub use season::ChurchSeason;
pub use year_index::{DayKey, YearIndex};
