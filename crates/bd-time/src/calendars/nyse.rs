//! New York Stock Exchange holiday tables.
//!
//! Both calendars here are literal date lists; no holiday rule is evaluated.
//!
//! * [`NyseCalendar`] (`"NYSE"`) carries the legacy table exactly as it has
//!   always been shipped.  Its sections for 2022 and 2023 were authored with
//!   2021 dates, so it lists no holiday at all after 2021-12-25.  The table is
//!   kept as-is so existing answers do not change.
//! * [`XnysCalendar`] (`"XNYS"`) carries the exchange's published full-day
//!   closures for 2021–2023, as observed (e.g. Christmas 2021 fell on a
//!   Saturday and was observed on Friday 2021-12-24).

use std::collections::HashSet;

use crate::calendar::HolidayCalendar;
use crate::date::Date;

/// Legacy NYSE table, grouped under the year labels it was published with.
const NYSE_HOLIDAYS: &[&str] = &[
    // 2021
    "2021-01-01", "2021-01-18", "2021-02-15", "2021-04-02", "2021-05-31",
    "2021-07-05", "2021-09-06", "2021-11-25", "2021-12-25",
    // 2022 (entries carry 2021 dates)
    "2021-01-17", "2021-02-21", "2021-04-15", "2021-05-30", "2021-07-04",
    "2021-09-05", "2021-11-24", "2021-12-25",
    // 2023 (entries carry 2021 dates)
    "2021-01-01", "2021-01-15", "2021-02-19", "2021-03-29", "2021-05-27",
    "2021-06-19", "2021-07-04", "2021-09-02", "2021-11-28", "2021-12-25",
];

/// Published NYSE full-day closures.
const XNYS_HOLIDAYS: &[&str] = &[
    // 2021
    "2021-01-01", "2021-01-18", "2021-02-15", "2021-04-02", "2021-05-31",
    "2021-07-05", "2021-09-06", "2021-11-25", "2021-12-24",
    // 2022
    "2022-01-17", "2022-02-21", "2022-04-15", "2022-05-30", "2022-06-20",
    "2022-07-04", "2022-09-05", "2022-11-24", "2022-12-26",
    // 2023
    "2023-01-02", "2023-01-16", "2023-02-20", "2023-04-07", "2023-05-29",
    "2023-06-19", "2023-07-04", "2023-09-04", "2023-11-23", "2023-12-25",
];

// Both tables are compile-time constants; `tables_parse` checks every entry.
fn parse_table(table: &[&str]) -> HashSet<Date> {
    table
        .iter()
        .map(|s| s.parse::<Date>().expect("embedded holiday table holds valid ISO dates"))
        .collect()
}

/// The `"NYSE"` calendar: the legacy fixed holiday table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NyseCalendar {
    holidays: HashSet<Date>,
}

impl NyseCalendar {
    /// Registry key of this calendar.
    pub const NAME: &'static str = "NYSE";

    /// Build the calendar from the embedded table.
    pub fn new() -> Self {
        Self {
            holidays: parse_table(NYSE_HOLIDAYS),
        }
    }
}

impl Default for NyseCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl HolidayCalendar for NyseCalendar {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn holidays(&self) -> &HashSet<Date> {
        &self.holidays
    }
}

/// The `"XNYS"` calendar: published NYSE closures, 2021–2023.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XnysCalendar {
    holidays: HashSet<Date>,
}

impl XnysCalendar {
    /// Registry key of this calendar.
    pub const NAME: &'static str = "XNYS";

    /// Build the calendar from the embedded table.
    pub fn new() -> Self {
        Self {
            holidays: parse_table(XNYS_HOLIDAYS),
        }
    }
}

impl Default for XnysCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl HolidayCalendar for XnysCalendar {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn holidays(&self) -> &HashSet<Date> {
        &self.holidays
    }
}
