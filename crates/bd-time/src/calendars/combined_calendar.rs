//! The union of several holiday calendars.

use std::collections::HashSet;

use crate::calendar::HolidayCalendar;
use crate::date::Date;

/// A calendar whose holidays are the deduplicated union of its constituents'.
///
/// The union is computed once in [`CombinedCalendar::new`]; the constituents
/// are not retained, so later lookups never consult them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedCalendar {
    name: String,
    constituents: Vec<String>,
    holidays: HashSet<Date>,
}

impl CombinedCalendar {
    /// Combine `calendars` in order under the given name.
    ///
    /// An empty list yields a calendar with no holidays.
    pub fn new<'a, I, C>(name: impl Into<String>, calendars: I) -> Self
    where
        I: IntoIterator<Item = &'a C>,
        C: HolidayCalendar + ?Sized + 'a,
    {
        let mut holidays = HashSet::new();
        let mut constituents = Vec::new();
        for calendar in calendars {
            holidays.extend(calendar.holidays().iter().copied());
            constituents.push(calendar.name().to_owned());
        }
        let name = name.into();
        tracing::trace!(
            calendar = %name,
            constituents = constituents.len(),
            holidays = holidays.len(),
            "combined holiday calendars"
        );
        Self {
            name,
            constituents,
            holidays,
        }
    }

    /// Combine `calendars`, naming the result after its constituents joined
    /// by `", "`.
    pub fn joined<'a, I, C>(calendars: I) -> Self
    where
        I: IntoIterator<Item = &'a C>,
        C: HolidayCalendar + ?Sized + 'a,
    {
        let mut combined = Self::new(String::new(), calendars);
        combined.name = combined.constituents.join(", ");
        combined
    }

    /// Names of the constituent calendars, in construction order.
    pub fn constituents(&self) -> &[String] {
        &self.constituents
    }
}

impl HolidayCalendar for CombinedCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn holidays(&self) -> &HashSet<Date> {
        &self.holidays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::SimpleCalendar;
    use crate::calendars::nyse::NyseCalendar;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn first() -> SimpleCalendar {
        SimpleCalendar::new("A", [date(2015, 9, 5), date(2015, 9, 7)])
    }

    fn second() -> SimpleCalendar {
        SimpleCalendar::new("B", [date(2015, 9, 7), date(2015, 9, 9)])
    }

    #[test]
    fn union_deduplicates() {
        let combined = CombinedCalendar::new("A+B", &[first(), second()]);
        assert_eq!(combined.holiday_count(), 3);
        assert!(!combined.is_business_day(date(2015, 9, 5)));
        assert!(!combined.is_business_day(date(2015, 9, 7)));
        assert!(!combined.is_business_day(date(2015, 9, 9)));
        assert!(combined.is_business_day(date(2015, 9, 8)));
        assert_eq!(combined.constituents(), ["A", "B"]);
    }

    #[test]
    fn joined_name() {
        let combined = CombinedCalendar::joined(&[first(), second()]);
        assert_eq!(combined.name(), "A, B");
    }

    #[test]
    fn empty_constituents() {
        let combined = CombinedCalendar::new("Nothing", &Vec::<SimpleCalendar>::new());
        assert_eq!(combined.holiday_count(), 0);
        assert!(combined.constituents().is_empty());
    }

    #[test]
    fn heterogeneous_trait_objects() {
        let nyse = NyseCalendar::new();
        let extra = SimpleCalendar::new("Extra", [date(2023, 6, 5)]);
        let cals: Vec<&dyn HolidayCalendar> = vec![&nyse, &extra];
        let combined = CombinedCalendar::new("NYSE+Extra", cals);
        assert_eq!(combined.holiday_count(), nyse.holiday_count() + 1);
        assert!(combined.is_holiday(date(2023, 6, 5)));
        assert!(combined.is_holiday(date(2021, 11, 25)));
    }
}
