//! `HolidayCalendar` trait and the caller-supplied [`SimpleCalendar`].
//!
//! A holiday calendar knows only which specific dates are excluded from
//! business-day status.  Weekends are a separate concern handled by
//! [`WeekendPolicy`](crate::weekend::WeekendPolicy); the two are combined by
//! [`MarketCalendar`](crate::market::MarketCalendar).

use std::collections::HashSet;

use crate::date::Date;

/// An immutable set of holiday dates.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"NYSE"`).
    fn name(&self) -> &str;

    /// The full holiday set.  Enumeration order is unspecified.
    fn holidays(&self) -> &HashSet<Date>;

    /// Return `true` if `date` is listed as a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        self.holidays().contains(&date)
    }

    /// Return `true` if `date` is not listed as a holiday.
    ///
    /// Weekends are not considered here.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_holiday(date)
    }

    /// Number of distinct holidays.
    fn holiday_count(&self) -> usize {
        self.holidays().len()
    }

    /// Holidays in the inclusive range `[from, to]`, sorted ascending.
    fn holiday_list(&self, from: Date, to: Date) -> Vec<Date> {
        let mut list: Vec<Date> = self
            .holidays()
            .iter()
            .copied()
            .filter(|d| (from..=to).contains(d))
            .collect();
        list.sort_unstable();
        list
    }
}

/// A calendar whose holidays are supplied by the constructing caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleCalendar {
    name: String,
    holidays: HashSet<Date>,
}

impl SimpleCalendar {
    /// Create a calendar from a name and a collection of holidays.
    ///
    /// Duplicate dates collapse into one.
    pub fn new(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Create a calendar with no holidays.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, std::iter::empty())
    }
}

impl HolidayCalendar for SimpleCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn holidays(&self) -> &HashSet<Date> {
        &self.holidays
    }
}
