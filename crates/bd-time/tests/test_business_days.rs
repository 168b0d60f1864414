//! End-to-end business-day checks against the standard configuration.
//!
//! These integration tests exercise the free functions, `BusinessDayConfig`,
//! and `MarketCalendar` together.

use std::sync::Arc;

use bd_core::Error;
use bd_time::{
    is_business_day_on_calendar, is_nyse_business_day, is_weekend, BusinessDayConfig,
    BusinessDayConvention, Date, SimpleCalendar, WeekMask, DEFAULT_CALENDAR, DEFAULT_REGION,
};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn nyse(d: Date) -> bool {
    is_nyse_business_day(d, DEFAULT_REGION, DEFAULT_CALENDAR).unwrap()
}

// ─── NYSE / US scenarios ──────────────────────────────────────────────────────

#[test]
fn new_years_day_2023_is_closed() {
    // Sunday
    let d = date(2023, 1, 1);
    assert!(is_weekend(d, "US").unwrap());
    assert!(!nyse(d));
}

#[test]
fn independence_day_2023_is_open_on_the_legacy_table() {
    // Tuesday; the legacy table only lists 2021-dated July 4 entries
    let d = date(2023, 7, 4);
    assert!(!is_weekend(d, "US").unwrap());
    assert!(is_business_day_on_calendar(d, "NYSE").unwrap());
    assert!(nyse(d));
}

#[test]
fn ordinary_weekdays_are_open() {
    assert!(nyse(date(2023, 6, 5))); // Monday
    assert!(nyse(date(2023, 5, 12))); // Friday
}

#[test]
fn weekend_days_are_closed() {
    assert!(!nyse(date(2023, 5, 13))); // Saturday
    assert!(!nyse(date(2023, 5, 14))); // Sunday
}

#[test]
fn legacy_2021_holidays_are_closed() {
    assert!(!nyse(date(2021, 1, 18)));
    assert!(!nyse(date(2021, 11, 25)));
    // listed under the 2023 heading with a 2021 date
    assert!(!nyse(date(2021, 1, 15)));
}

#[test]
fn xnys_uses_published_closures() {
    let on_xnys = |d| is_nyse_business_day(d, DEFAULT_REGION, "XNYS").unwrap();
    assert!(!on_xnys(date(2023, 7, 4)));
    assert!(!on_xnys(date(2022, 6, 20)));
    assert!(!on_xnys(date(2021, 12, 24)));
    assert!(on_xnys(date(2023, 6, 5)));
    assert!(!on_xnys(date(2023, 5, 13)));
}

// ─── Unknown keys ─────────────────────────────────────────────────────────────

#[test]
fn unknown_region_is_an_error() {
    let err = is_weekend(date(2023, 5, 12), "EU").unwrap_err();
    assert_eq!(err, Error::UnknownRegion("EU".into()));
    assert!(err.is_unknown_key());
}

#[test]
fn unknown_calendar_is_an_error() {
    let err = is_business_day_on_calendar(date(2023, 5, 12), "LSE").unwrap_err();
    assert_eq!(err, Error::UnknownCalendar("LSE".into()));
}

#[test]
fn keys_are_case_sensitive() {
    assert!(is_nyse_business_day(date(2023, 5, 12), "us", "NYSE").is_err());
    assert!(is_nyse_business_day(date(2023, 5, 12), "US", "nyse").is_err());
}

#[test]
fn unknown_keys_never_answer() {
    // Even on a Saturday, where the weekend check alone would say "closed"
    let sat = date(2023, 5, 13);
    assert_eq!(
        is_nyse_business_day(sat, "US", "LSE"),
        Err(Error::UnknownCalendar("LSE".into()))
    );
}

// ─── Injected configuration ───────────────────────────────────────────────────

#[test]
fn injected_configuration_is_independent_of_global() {
    let config = BusinessDayConfig::builder()
        .register_weekend("AE", WeekMask::new("Saturday/Sunday", [5, 6]).unwrap())
        .register_calendar(
            "DFM",
            SimpleCalendar::new("DFM", [date(2023, 6, 28), date(2023, 6, 29)]),
        )
        .build();

    assert!(config.is_business_day(date(2023, 6, 27), "AE", "DFM").unwrap());
    assert!(!config.is_business_day(date(2023, 6, 28), "AE", "DFM").unwrap());
    assert!(config.is_business_day(date(2023, 6, 5), "US", "DFM").is_err());
    // the global configuration does not see the injected keys
    assert!(is_weekend(date(2023, 6, 5), "AE").is_err());
}

#[test]
fn combined_market_calendar() {
    let config = BusinessDayConfig::builder()
        .register_weekend("US", bd_time::UsWeekend)
        .register_calendar("NYSE", bd_time::NyseCalendar::new())
        .register_calendar("XNYS", bd_time::XnysCalendar::new())
        .register_combined("NYSE+XNYS", &["NYSE", "XNYS"])
        .unwrap()
        .build();

    let market = config.market("US", "NYSE+XNYS").unwrap();
    // 2021-12-24 from XNYS, 2021-01-15 from the legacy table
    assert!(!market.is_business_day(date(2021, 12, 24)));
    assert!(!market.is_business_day(date(2023, 7, 4)));
    assert!(!market.is_business_day(date(2021, 1, 15)));
    assert!(market.is_business_day(date(2023, 7, 5)));
}

#[test]
fn configuration_is_shareable_across_threads() {
    let config = Arc::new(BusinessDayConfig::standard());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let config = Arc::clone(&config);
            std::thread::spawn(move || {
                let d = date(2023, 5, 8) + i;
                config.is_business_day(d, "US", "NYSE").unwrap()
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}

// ─── Market calendar arithmetic ───────────────────────────────────────────────

#[test]
fn xnys_adjust_and_advance_around_independence_day() {
    let market = BusinessDayConfig::global().market("US", "XNYS").unwrap();
    // Saturday 2023-07-01 → Monday 2023-07-03 (Tuesday the 4th is closed)
    assert_eq!(
        market.adjust(date(2023, 7, 1), BusinessDayConvention::Following).unwrap(),
        date(2023, 7, 3)
    );
    assert_eq!(
        market.adjust(date(2023, 7, 4), BusinessDayConvention::Following).unwrap(),
        date(2023, 7, 5)
    );
    assert_eq!(market.advance(date(2023, 7, 3), 1).unwrap(), date(2023, 7, 5));
    assert_eq!(market.advance(date(2023, 7, 5), -1).unwrap(), date(2023, 7, 3));
    // Mon 3rd, Wed 5th, Thu 6th, Fri 7th
    assert_eq!(market.business_days_between(date(2023, 6, 30), date(2023, 7, 7)), 4);
}

#[test]
fn xnys_business_days_in_2023() {
    let market = BusinessDayConfig::global().market("US", "XNYS").unwrap();
    let days = market.business_days_in(date(2023, 1, 1), date(2023, 12, 31));
    // 260 weekdays less 10 weekday closures
    assert_eq!(days.len(), 250);
    assert_eq!(days.first(), Some(&date(2023, 1, 3)));
    assert_eq!(days.last(), Some(&date(2023, 12, 29)));
}
