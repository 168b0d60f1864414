//! # bizday
//!
//! Business-day determination over regional weekend rules and named exchange
//! holiday calendars.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! bizday = "0.1"
//! ```
//!
//! ```rust
//! use bizday::{is_nyse_business_day, Date, DEFAULT_CALENDAR, DEFAULT_REGION};
//!
//! let d = Date::from_ymd(2023, 6, 5).unwrap();
//! assert!(is_nyse_business_day(d, DEFAULT_REGION, DEFAULT_CALENDAR).unwrap());
//!
//! let new_year = Date::from_ymd(2023, 1, 1).unwrap();
//! assert!(!is_nyse_business_day(new_year, DEFAULT_REGION, DEFAULT_CALENDAR).unwrap());
//! ```
//!
//! Custom regions and calendars go into a configuration of their own:
//!
//! ```rust
//! use bizday::{BusinessDayConfig, Date, SimpleCalendar, WeekMask};
//!
//! let day = |m, d| Date::from_ymd(2023, m, d).unwrap();
//! let config = BusinessDayConfig::builder()
//!     .register_weekend("AE", WeekMask::new("Saturday/Sunday", [5, 6]).unwrap())
//!     .register_calendar("DFM", SimpleCalendar::new("DFM", [day(6, 28)]))
//!     .build();
//!
//! assert!(!config.is_business_day(day(6, 28), "AE", "DFM").unwrap());
//! assert!(config.is_business_day(day(6, 27), "AE", "DFM").unwrap());
//! assert!(config.is_business_day(day(6, 27), "US", "DFM").is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and input parsers.
pub use bd_core as core;

/// Dates, weekend policies, holiday calendars, and registries.
pub use bd_time as time;

pub use bd_core::{Error, Result};
pub use bd_time::{
    is_business_day_on_calendar, is_nyse_business_day, is_weekend, BusinessDayConfig,
    BusinessDayConfigBuilder, BusinessDayConvention, CombinedCalendar, Date, HolidayCalendar,
    MarketCalendar, NyseCalendar, SimpleCalendar, UsWeekend, WeekMask, Weekday, WeekendPolicy,
    XnysCalendar, DEFAULT_CALENDAR, DEFAULT_REGION,
};
