//! A weekend policy and a holiday calendar resolved together.
//!
//! A date is a business day of a market calendar iff it is neither a weekend
//! day under the weekend policy nor a listed holiday of the holiday calendar.
//! On top of that predicate this module provides date adjustment and
//! business-day arithmetic.

use std::sync::Arc;

use bd_core::errors::Result;

use crate::business_day_convention::BusinessDayConvention;
use crate::calendar::HolidayCalendar;
use crate::date::Date;
use crate::weekend::WeekendPolicy;

/// A resolved (weekend policy, holiday calendar) pair.
#[derive(Debug, Clone)]
pub struct MarketCalendar {
    weekend: Arc<dyn WeekendPolicy>,
    holidays: Arc<dyn HolidayCalendar>,
}

impl MarketCalendar {
    /// Pair a weekend policy with a holiday calendar.
    pub fn new(weekend: Arc<dyn WeekendPolicy>, holidays: Arc<dyn HolidayCalendar>) -> Self {
        Self { weekend, holidays }
    }

    /// The weekend policy.
    pub fn weekend_policy(&self) -> &dyn WeekendPolicy {
        self.weekend.as_ref()
    }

    /// The holiday calendar.
    pub fn holiday_calendar(&self) -> &dyn HolidayCalendar {
        self.holidays.as_ref()
    }

    /// Return `true` if `date` is a weekend day.
    pub fn is_weekend(&self, date: Date) -> bool {
        self.weekend.is_weekend(date)
    }

    /// Return `true` if `date` is a non-business day (weekend or holiday).
    pub fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is neither a weekend day nor a listed holiday.
    pub fn is_business_day(&self, date: Date) -> bool {
        !self.weekend.is_weekend(date) && self.holidays.is_business_day(date)
    }

    /// Adjust `date` according to the given business-day convention.
    ///
    /// # Errors
    /// Returns a date error if no business day is found before leaving the
    /// valid date range.
    pub fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => self.roll(date, 1),
            BusinessDayConvention::Preceding => self.roll(date, -1),
            // Running off the valid range counts as leaving the month
            BusinessDayConvention::ModifiedFollowing => match self.roll(date, 1) {
                Ok(adjusted) if adjusted.month() == date.month() => Ok(adjusted),
                _ => self.roll(date, -1),
            },
            BusinessDayConvention::ModifiedPreceding => match self.roll(date, -1) {
                Ok(adjusted) if adjusted.month() == date.month() => Ok(adjusted),
                _ => self.roll(date, 1),
            },
            BusinessDayConvention::Nearest => {
                if self.is_business_day(date) {
                    return Ok(date);
                }
                // Either direction may run off the valid range
                match (self.roll(date, 1), self.roll(date, -1)) {
                    (Ok(fwd), Ok(bwd)) => {
                        if fwd - date <= date - bwd {
                            Ok(fwd)
                        } else {
                            Ok(bwd)
                        }
                    }
                    (Ok(fwd), Err(_)) => Ok(fwd),
                    (Err(_), Ok(bwd)) => Ok(bwd),
                    (Err(e), Err(_)) => Err(e),
                }
            }
        }
    }

    /// Advance `date` by `n` business days (backwards if `n < 0`).
    ///
    /// `n == 0` returns `date` unchanged, business day or not.
    pub fn advance(&self, mut date: Date, n: i32) -> Result<Date> {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.unsigned_abs();
        while remaining > 0 {
            date = date.add_days(step)?;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    pub fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        if d1 == d2 {
            return 0;
        }
        let (sign, start, end) = if d2 > d1 { (1, d1, d2) } else { (-1, d2, d1) };
        let count = (1..=end - start)
            .filter(|&i| self.is_business_day(start + i))
            .count() as i32;
        sign * count
    }

    /// Business days in the inclusive range `[from, to]`, ascending.
    pub fn business_days_in(&self, from: Date, to: Date) -> Vec<Date> {
        if to < from {
            return Vec::new();
        }
        (0..=to - from)
            .map(|i| from + i)
            .filter(|&d| self.is_business_day(d))
            .collect()
    }

    /// Step by `step` days from `date` (inclusive) until a business day.
    fn roll(&self, mut date: Date, step: i32) -> Result<Date> {
        while !self.is_business_day(date) {
            date = date.add_days(step)?;
        }
        Ok(date)
    }
}
