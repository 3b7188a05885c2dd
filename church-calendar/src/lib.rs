//! # church-calendar
//!
//! Computes the annotations of a Korean church calendar: Korean public
//! holidays, the lunar-calendar holidays (설날, 석가탄신일, 추석), and the
//! movable feasts of the church year anchored on Gregorian Easter.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the
//! individual `cc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! church-calendar = "0.1"
//! ```
//!
//! ```rust
//! use church_calendar::holidays::{HolidayCalendar, ObservanceKind};
//! use church_calendar::time::Date;
//!
//! let mut calendar = HolidayCalendar::new();
//! let year = calendar.get_year_data(2024).unwrap();
//!
//! let easter = year.find(ObservanceKind::Easter).unwrap();
//! assert_eq!(easter, Date::from_ymd(2024, 3, 31).unwrap());
//! assert!(year.is_red_day(Date::from_ymd(2024, 2, 10).unwrap()));
//!
//! for (day, observances) in year.iter().take(3) {
//!     for o in observances {
//!         println!("{day}: {}", o.name());
//!     }
//! }
//! ```
//!
//! ## Configuration
//!
//! Lunar search windows and the oracle failure policy can be loaded from
//! TOML:
//!
//! ```rust
//! use church_calendar::core::EngineConfig;
//! use church_calendar::holidays::{HolidayCalendar, TabularLunisolar};
//!
//! let config = EngineConfig::from_toml_str(
//!     r#"
//!     on_oracle_failure = "fail"
//!
//!     [chuseok]
//!     start_month = 8
//!     start_day = 20
//!     max_days = 60
//!     "#,
//! )
//! .unwrap();
//! let calendar = HolidayCalendar::with_config(config, TabularLunisolar::new()).unwrap();
//! assert_eq!(calendar.config().chuseok.start_day, 20);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and engine configuration.
pub use cc_core as core;

/// Date, weekday, and Easter types.
pub use cc_time as time;

/// Observances, the year index, and the holiday engine.
pub use cc_holidays as holidays;
