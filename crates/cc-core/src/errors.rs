//! Error types for church-calendar.
//!
//! A single `thiserror`-derived enum covers every failure the engine can
//! report.  Lunar dates that simply do not occur inside a search window are
//! *not* errors; those surface as `Ok(None)` from the scanner.

use thiserror::Error;

/// The top-level error type used throughout church-calendar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (raised by [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument, e.g. a year outside the supported Gregorian range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Date construction or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// The lunisolar conversion oracle could not convert a date.
    ///
    /// Distinct from "no match in the search window", which is not an error.
    #[error("lunar conversion failed: {0}")]
    LunarConversion(String),

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout church-calendar.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cc_core::{ensure, errors::Error};
/// fn window(days: u32) -> cc_core::errors::Result<u32> {
///     ensure!(days > 0, "window must be non-empty, got {days}");
///     Ok(days)
/// }
/// assert!(window(60).is_ok());
/// assert!(matches!(window(0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
