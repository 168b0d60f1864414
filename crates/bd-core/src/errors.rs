//! Error types for bizday.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  The [`ensure!`] macro is
//! shorthand for the common "check a precondition" pattern.

use thiserror::Error;

/// The top-level error type used throughout bizday.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction, parsing, or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// No weekend policy is registered for the region code.
    #[error("unknown region: no weekend policy registered for {0:?}")]
    UnknownRegion(String),

    /// No holiday calendar is registered under the name.
    #[error("unknown calendar: no holiday calendar registered as {0:?}")]
    UnknownCalendar(String),
}

impl Error {
    /// Return `true` for the "missing configuration" class of errors, i.e.
    /// an unknown region or an unknown calendar.
    pub fn is_unknown_key(&self) -> bool {
        matches!(self, Error::UnknownRegion(_) | Error::UnknownCalendar(_))
    }
}

/// Shorthand `Result` type used throughout bizday.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bd_core::{ensure, errors::Error};
/// fn positive(x: i32) -> bd_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
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
