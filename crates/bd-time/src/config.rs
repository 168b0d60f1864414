//! The immutable set of registries behind every business-day query.
//!
//! A configuration is assembled once with [`BusinessDayConfigBuilder`] and is
//! read-only afterwards, so it can be shared across threads without locking.
//! Code that wants its own regions or calendars builds and passes its own
//! configuration; the free functions at the bottom of this module use the
//! process-wide [`BusinessDayConfig::global`] instance.

use std::sync::{Arc, LazyLock};

use bd_core::errors::Result;

use crate::calendar::HolidayCalendar;
use crate::calendars::{CombinedCalendar, NyseCalendar, XnysCalendar};
use crate::date::Date;
use crate::market::MarketCalendar;
use crate::registry::{CalendarRegistry, WeekendRegistry};
use crate::weekend::{UsWeekend, WeekendPolicy};

/// Region used when the caller does not name one.
pub const DEFAULT_REGION: &str = "US";

/// Calendar used when the caller does not name one.
pub const DEFAULT_CALENDAR: &str = "NYSE";

static GLOBAL: LazyLock<BusinessDayConfig> = LazyLock::new(BusinessDayConfig::standard);

/// Weekend and holiday registries, immutable once built.
#[derive(Debug, Clone)]
pub struct BusinessDayConfig {
    weekends: WeekendRegistry,
    calendars: CalendarRegistry,
}

impl BusinessDayConfig {
    /// Start an empty configuration.
    pub fn builder() -> BusinessDayConfigBuilder {
        BusinessDayConfigBuilder::default()
    }

    /// The standard configuration: `"US"` → Saturday/Sunday weekend;
    /// `"NYSE"` and `"XNYS"` fixed holiday calendars.
    pub fn standard() -> Self {
        Self::builder()
            .register_weekend(DEFAULT_REGION, UsWeekend)
            .register_calendar(NyseCalendar::NAME, NyseCalendar::new())
            .register_calendar(XnysCalendar::NAME, XnysCalendar::new())
            .build()
    }

    /// The process-wide standard configuration, built on first use.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// The weekend registry.
    pub fn weekends(&self) -> &WeekendRegistry {
        &self.weekends
    }

    /// The holiday-calendar registry.
    pub fn calendars(&self) -> &CalendarRegistry {
        &self.calendars
    }

    /// Return `true` if `date` is a weekend day in `region`.
    ///
    /// # Errors
    /// [`Error::UnknownRegion`](bd_core::Error::UnknownRegion) if no weekend
    /// policy is registered for `region`.
    pub fn is_weekend(&self, date: Date, region: &str) -> Result<bool> {
        Ok(self.weekends.require(region)?.is_weekend(date))
    }

    /// Return `true` if `date` is not a listed holiday of `calendar_name`.
    /// Weekends are not considered.
    ///
    /// # Errors
    /// [`Error::UnknownCalendar`](bd_core::Error::UnknownCalendar) if no
    /// calendar is registered under `calendar_name`.
    pub fn is_business_day_on_calendar(&self, date: Date, calendar_name: &str) -> Result<bool> {
        Ok(self.calendars.require(calendar_name)?.is_business_day(date))
    }

    /// Return `true` if `date` is neither a weekend day in `region` nor a
    /// holiday of `calendar_name`.
    ///
    /// The region is resolved first, so when both keys are unknown the error
    /// is [`Error::UnknownRegion`](bd_core::Error::UnknownRegion).
    pub fn is_business_day(&self, date: Date, region: &str, calendar_name: &str) -> Result<bool> {
        let weekend = self.is_weekend(date, region)?;
        let open = self.is_business_day_on_calendar(date, calendar_name)?;
        tracing::trace!(%date, region, calendar = calendar_name, weekend, open, "business-day check");
        Ok(!weekend && open)
    }

    /// Resolve `region` and `calendar_name` into a [`MarketCalendar`].
    pub fn market(&self, region: &str, calendar_name: &str) -> Result<MarketCalendar> {
        let weekend = self.weekends.require(region)?;
        let holidays = self.calendars.require(calendar_name)?;
        Ok(MarketCalendar::new(weekend, holidays))
    }
}

impl Default for BusinessDayConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builder for [`BusinessDayConfig`].
///
/// Registering a key twice keeps the later entry.
#[derive(Debug, Default)]
pub struct BusinessDayConfigBuilder {
    weekends: WeekendRegistry,
    calendars: CalendarRegistry,
}

impl BusinessDayConfigBuilder {
    /// Register the weekend policy for `region`.
    pub fn register_weekend(
        mut self,
        region: impl Into<String>,
        policy: impl WeekendPolicy + 'static,
    ) -> Self {
        self.weekends.register(region, Arc::new(policy));
        self
    }

    /// Register an already shared weekend policy for `region`.
    pub fn register_weekend_arc(mut self, region: impl Into<String>, policy: Arc<dyn WeekendPolicy>) -> Self {
        self.weekends.register(region, policy);
        self
    }

    /// Register `calendar` under `name`.
    pub fn register_calendar(
        mut self,
        name: impl Into<String>,
        calendar: impl HolidayCalendar + 'static,
    ) -> Self {
        self.calendars.register(name, Arc::new(calendar));
        self
    }

    /// Register an already shared calendar under `name`.
    pub fn register_calendar_arc(mut self, name: impl Into<String>, calendar: Arc<dyn HolidayCalendar>) -> Self {
        self.calendars.register(name, calendar);
        self
    }

    /// Register under `name` the union of calendars already registered on
    /// this builder as `constituents`, combined in the given order.
    ///
    /// # Errors
    /// [`Error::UnknownCalendar`](bd_core::Error::UnknownCalendar) naming the
    /// first constituent that is not registered.
    pub fn register_combined(mut self, name: impl Into<String>, constituents: &[&str]) -> Result<Self> {
        let resolved = constituents
            .iter()
            .map(|key| self.calendars.require(key))
            .collect::<Result<Vec<_>>>()?;
        let name = name.into();
        let combined = CombinedCalendar::new(name.clone(), resolved.iter().map(|c| &**c));
        self.calendars.register(name, Arc::new(combined));
        Ok(self)
    }

    /// Finish the configuration.
    pub fn build(self) -> BusinessDayConfig {
        tracing::debug!(
            regions = ?self.weekends.keys(),
            calendars = ?self.calendars.keys(),
            "built business-day configuration"
        );
        BusinessDayConfig {
            weekends: self.weekends,
            calendars: self.calendars,
        }
    }
}

// ── Free functions over the global configuration ─────────────────────────────

/// Return `true` if `date` is a weekend day in `region`.
///
/// Uses [`BusinessDayConfig::global`]; pass [`DEFAULT_REGION`] for `"US"`.
pub fn is_weekend(date: Date, region: &str) -> Result<bool> {
    BusinessDayConfig::global().is_weekend(date, region)
}

/// Return `true` if `date` is not a listed holiday of `calendar_name`.
///
/// Uses [`BusinessDayConfig::global`]; pass [`DEFAULT_CALENDAR`] for
/// `"NYSE"`.
pub fn is_business_day_on_calendar(date: Date, calendar_name: &str) -> Result<bool> {
    BusinessDayConfig::global().is_business_day_on_calendar(date, calendar_name)
}

/// Return `true` if `date` is a business day: not a weekend day in `region`
/// and not a holiday of `calendar_name`.
///
/// # Example
/// ```
/// use bd_time::{is_nyse_business_day, Date, DEFAULT_CALENDAR, DEFAULT_REGION};
///
/// let friday = Date::from_ymd(2023, 5, 12).unwrap();
/// let saturday = Date::from_ymd(2023, 5, 13).unwrap();
/// assert!(is_nyse_business_day(friday, DEFAULT_REGION, DEFAULT_CALENDAR).unwrap());
/// assert!(!is_nyse_business_day(saturday, DEFAULT_REGION, DEFAULT_CALENDAR).unwrap());
/// ```
pub fn is_nyse_business_day(date: Date, region: &str, calendar_name: &str) -> Result<bool> {
    BusinessDayConfig::global().is_business_day(date, region, calendar_name)
}
