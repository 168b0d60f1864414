//! # bd-time
//!
//! Date, weekend-rule, holiday-calendar, and business-day types.
//!
//! A date is a *business day* under a market when it is neither a weekend
//! day for the market's region nor a listed holiday of the market's holiday
//! calendar.  Regions and calendars are looked up by key in an immutable
//! [`BusinessDayConfig`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// `HolidayCalendar` trait and the caller-supplied calendar.
pub mod calendar;

/// Concrete holiday calendars (combined, exchange tables).
pub mod calendars;

/// Immutable registry configuration and the business-day predicates.
pub mod config;

/// `Date` type.
pub mod date;

/// Weekend policy plus holiday calendar.
pub mod market;

/// String-keyed policy registries.
pub mod registry;

/// Day of the week.
pub mod weekday;

/// Regional weekend policies.
pub mod weekend;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{HolidayCalendar, SimpleCalendar};
pub use calendars::{CombinedCalendar, NyseCalendar, XnysCalendar};
pub use config::{
    is_business_day_on_calendar, is_nyse_business_day, is_weekend, BusinessDayConfig,
    BusinessDayConfigBuilder, DEFAULT_CALENDAR, DEFAULT_REGION,
};
pub use date::Date;
pub use market::MarketCalendar;
pub use registry::{CalendarRegistry, Registry, WeekendRegistry};
pub use weekday::Weekday;
pub use weekend::{UsWeekend, WeekMask, WeekendPolicy};
