//! String-keyed registries of weekend policies and holiday calendars.
//!
//! A [`Registry`] maps a key (region code or calendar name) to a shared
//! policy object.  Keys match exactly; `"us"` and `"US"` are different keys.
//! Once a registry is moved into a
//! [`BusinessDayConfig`](crate::config::BusinessDayConfig) it is only
//! reachable through `&Registry`, so registration is an initialisation-time
//! operation.

use std::collections::HashMap;
use std::sync::Arc;

use bd_core::errors::{Error, Result};

use crate::calendar::HolidayCalendar;
use crate::weekend::WeekendPolicy;

/// A policy type that can be stored in a [`Registry`].
pub trait Registrable {
    /// What the registry holds, for log output (e.g. `"weekend policy"`).
    const KIND: &'static str;

    /// The error reported when `key` is not registered.
    fn unknown_key(key: &str) -> Error;
}

impl Registrable for dyn WeekendPolicy {
    const KIND: &'static str = "weekend policy";

    fn unknown_key(key: &str) -> Error {
        Error::UnknownRegion(key.to_owned())
    }
}

impl Registrable for dyn HolidayCalendar {
    const KIND: &'static str = "holiday calendar";

    fn unknown_key(key: &str) -> Error {
        Error::UnknownCalendar(key.to_owned())
    }
}

/// Region code → weekend policy.
pub type WeekendRegistry = Registry<dyn WeekendPolicy>;

/// Calendar name → holiday calendar.
pub type CalendarRegistry = Registry<dyn HolidayCalendar>;

/// A map from string key to a shared policy object.
pub struct Registry<T: ?Sized + Registrable> {
    entries: HashMap<String, Arc<T>>,
}

impl<T: ?Sized + Registrable> Registry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert `value` under `key`, returning the entry it replaced, if any.
    pub fn register(&mut self, key: impl Into<String>, value: Arc<T>) -> Option<Arc<T>> {
        let key = key.into();
        let previous = self.entries.insert(key.clone(), value);
        if previous.is_some() {
            tracing::debug!(kind = T::KIND, %key, "overwrote registry entry");
        } else {
            tracing::debug!(kind = T::KIND, %key, "registered");
        }
        previous
    }

    /// Look up `key`; `None` if it is not registered.
    pub fn lookup(&self, key: &str) -> Option<&Arc<T>> {
        self.entries.get(key)
    }

    /// Look up `key`, failing with the registry's "unknown key" error.
    pub fn require(&self, key: &str) -> Result<Arc<T>> {
        match self.entries.get(key) {
            Some(value) => Ok(Arc::clone(value)),
            None => {
                tracing::warn!(kind = T::KIND, %key, "lookup of unregistered key");
                Err(T::unknown_key(key))
            }
        }
    }

    /// Return `true` if `key` is registered.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: ?Sized + Registrable> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + Registrable> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T: ?Sized + Registrable> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("kind", &T::KIND)
            .field("keys", &self.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::SimpleCalendar;
    use crate::calendars::NyseCalendar;
    use crate::weekend::{UsWeekend, WeekMask};

    #[test]
    fn lookup_absent_is_none() {
        let reg = WeekendRegistry::new();
        assert!(reg.lookup("US").is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn require_absent_names_the_key() {
        let weekends = WeekendRegistry::new();
        assert_eq!(
            weekends.require("EU").unwrap_err(),
            Error::UnknownRegion("EU".into())
        );
        let calendars = CalendarRegistry::new();
        assert_eq!(
            calendars.require("LSE").unwrap_err(),
            Error::UnknownCalendar("LSE".into())
        );
    }

    #[test]
    fn register_overwrites() {
        let mut reg = WeekendRegistry::new();
        assert!(reg.register("US", Arc::new(UsWeekend)).is_none());
        let mask = WeekMask::new("Sunday only", [6]).unwrap();
        let previous = reg.register("US", Arc::new(mask)).unwrap();
        assert_eq!(previous.name(), "Saturday/Sunday");
        assert_eq!(reg.require("US").unwrap().name(), "Sunday only");
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn keys_are_exact_and_sorted() {
        let mut reg = CalendarRegistry::new();
        reg.register("NYSE", Arc::new(NyseCalendar::new()));
        reg.register("EMPTY", Arc::new(SimpleCalendar::empty("EMPTY")));
        assert_eq!(reg.keys(), vec!["EMPTY", "NYSE"]);
        assert!(reg.contains_key("NYSE"));
        assert!(!reg.contains_key("nyse"));
    }

    #[test]
    fn require_shares_the_same_instance() {
        let mut reg = CalendarRegistry::new();
        reg.register("NYSE", Arc::new(NyseCalendar::new()));
        let a = reg.require("NYSE").unwrap();
        let b = reg.require("NYSE").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
