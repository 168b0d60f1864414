//! Concrete holiday calendars.

/// Union of several holiday calendars.
pub mod combined_calendar;

/// Fixed NYSE holiday tables.
pub mod nyse;

pub use combined_calendar::CombinedCalendar;
pub use nyse::{NyseCalendar, XnysCalendar};
