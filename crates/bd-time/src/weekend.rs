//! Weekend policies.
//!
//! A [`WeekendPolicy`] decides whether a date is a regional weekend day,
//! independently of any holiday list.  Policies are stateless or immutable
//! once built, so they can be shared freely behind an `Arc`.

use bd_core::ensure;
use bd_core::errors::Result;

use crate::date::Date;
use crate::weekday::Weekday;

/// A regional rule deciding which weekdays are non-business by default.
pub trait WeekendPolicy: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Saturday/Sunday"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` falls on a weekend day under this rule.
    fn is_weekend(&self, date: Date) -> bool;
}

/// The United States weekend: Saturday and Sunday.
///
/// A date is a weekend day iff its weekday index (Monday = 0) is 5 or 6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsWeekend;

impl WeekendPolicy for UsWeekend {
    fn name(&self) -> &str {
        "Saturday/Sunday"
    }

    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().index() >= 5
    }
}

/// A weekend made of an arbitrary set of weekdays.
///
/// Covers regions whose weekend is not Saturday/Sunday, e.g. a
/// Friday/Saturday weekend is `WeekMask::new("Friday/Saturday", [4, 5])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekMask {
    name: String,
    // indexed by Weekday::index()
    mask: [bool; 7],
}

impl WeekMask {
    /// Build a mask from zero-based weekday indices (0 = Monday … 6 = Sunday).
    ///
    /// # Errors
    /// Returns a precondition error if an index is out of range or if the
    /// mask would leave no working day in the week.
    pub fn new(name: impl Into<String>, weekend_indices: impl IntoIterator<Item = u8>) -> Result<Self> {
        let mut mask = [false; 7];
        for i in weekend_indices {
            ensure!(i < 7, "weekday index {i} out of range [0, 6]");
            mask[i as usize] = true;
        }
        ensure!(
            mask.iter().any(|is_weekend| !is_weekend),
            "a week mask must leave at least one working day"
        );
        Ok(Self {
            name: name.into(),
            mask,
        })
    }

    /// Build a mask from weekdays.
    pub fn from_weekdays(name: impl Into<String>, days: &[Weekday]) -> Result<Self> {
        Self::new(name, days.iter().map(Weekday::index))
    }

    /// Return the weekend days of this mask, Monday first.
    pub fn weekend_days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|w| self.mask[w.index() as usize])
            .collect()
    }
}

impl WeekendPolicy for WeekMask {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_weekend(&self, date: Date) -> bool {
        self.mask[date.weekday().index() as usize]
    }
}
