//! # cc-time
//!
//! Date and weekday types plus the Gregorian Easter computation that anchors
//! every movable feast.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Gregorian Easter Sunday.
pub mod easter;

/// `Weekday`, the day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{validate_year, Date, MAX_YEAR, MIN_YEAR};
pub use easter::{easter_date, easter_sunday};
pub use weekday::Weekday;
