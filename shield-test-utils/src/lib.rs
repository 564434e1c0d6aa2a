//! SHIELD Test Utilities
//!
//! Shared test infrastructure for the timespec workspace:
//! - Proptest generators for every schedule shape
//! - Fixtures for the reference instant used across scenarios
//! - Custom assertions for parse and schedule results

// Re-export core types for convenience
pub use chrono::{NaiveDate, NaiveDateTime, Weekday};
pub use shield_timespec::{
    parse, ConfigError, HourlySpec, MonthlySpec, ParseError, ScheduleError, Spec, TimespecError,
    TimespecResult,
};

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for schedule values.
    //!
    //! Every generated [`Spec`] is one the parser can produce, so it renders
    //! to a phrase that parses back to itself.

    use super::*;
    use proptest::prelude::*;

    pub fn arb_weekday() -> impl Strategy<Value = Weekday> {
        prop_oneof![
            Just(Weekday::Mon),
            Just(Weekday::Tue),
            Just(Weekday::Wed),
            Just(Weekday::Thu),
            Just(Weekday::Fri),
            Just(Weekday::Sat),
            Just(Weekday::Sun),
        ]
    }

    /// Minutes past midnight, 0:00 through 23:59.
    pub fn arb_time_of_day() -> impl Strategy<Value = u32> {
        0u32..1440
    }

    pub fn arb_hourly_at_minute() -> impl Strategy<Value = Spec> {
        (0u32..60).prop_map(Spec::hourly)
    }

    /// Hourly intervals whose start lies inside the first interval of the day.
    pub fn arb_hourly_every() -> impl Strategy<Value = Spec> {
        prop_oneof![
            (1u32..=23).prop_flat_map(|hours| {
                (Just(hours), 0..hours * 60).prop_map(|(hours, tod)| {
                    Spec::Hourly(HourlySpec::Every {
                        hours: f64::from(hours),
                        time_of_day: tod,
                    })
                })
            }),
            (0u32..30).prop_map(|tod| Spec::Hourly(HourlySpec::Every {
                hours: 0.5,
                time_of_day: tod,
            })),
            (0u32..15).prop_map(|tod| Spec::Hourly(HourlySpec::Every {
                hours: 0.25,
                time_of_day: tod,
            })),
        ]
    }

    pub fn arb_minutely() -> impl Strategy<Value = Spec> {
        (1u32..=1440, arb_time_of_day()).prop_map(|(every, time_of_day)| Spec::Minutely {
            every,
            time_of_day,
        })
    }

    pub fn arb_daily() -> impl Strategy<Value = Spec> {
        arb_time_of_day().prop_map(Spec::daily)
    }

    pub fn arb_weekly() -> impl Strategy<Value = Spec> {
        (arb_time_of_day(), arb_weekday()).prop_map(|(tod, day)| Spec::weekly(tod, day))
    }

    pub fn arb_nth_weekday() -> impl Strategy<Value = Spec> {
        (arb_time_of_day(), arb_weekday(), 1u32..=5).prop_map(|(tod, weekday, week)| {
            Spec::Monthly(MonthlySpec::NthWeekday {
                week,
                weekday,
                time_of_day: tod,
            })
        })
    }

    pub fn arb_day_of_month() -> impl Strategy<Value = Spec> {
        (arb_time_of_day(), 1u32..=31).prop_map(|(tod, day)| {
            Spec::Monthly(MonthlySpec::DayOfMonth {
                day,
                time_of_day: tod,
            })
        })
    }

    /// Daily, weekly, and monthly schedules.
    pub fn arb_calendar_spec() -> impl Strategy<Value = Spec> {
        prop_oneof![
            arb_daily(),
            arb_weekly(),
            arb_nth_weekday(),
            arb_day_of_month(),
        ]
    }

    /// Any schedule the parser can produce.
    pub fn arb_spec() -> impl Strategy<Value = Spec> {
        prop_oneof![
            arb_hourly_at_minute(),
            arb_hourly_every(),
            arb_minutely(),
            arb_calendar_spec(),
        ]
    }

    /// An instant between 1970 and 2100, with seconds.
    pub fn arb_reference_instant() -> impl Strategy<Value = NaiveDateTime> {
        (0i64..4102444800i64).prop_map(|secs| {
            chrono::DateTime::from_timestamp(secs, 0)
                .map(|dt| dt.naive_utc())
                .unwrap_or_default()
        })
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built fixtures for scenario tests.

    use super::*;

    /// Tuesday, 6 August 1991, 11:15:42.
    pub fn reference_instant() -> NaiveDateTime {
        at_seconds(1991, 8, 6, 11, 15, 42)
    }

    /// A whole-minute timestamp.
    #[track_caller]
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        at_seconds(year, month, day, hour, minute, 0)
    }

    #[track_caller]
    pub fn at_seconds(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, second))
            .unwrap_or_else(|| {
                panic!(
                    "invalid timestamp {}-{}-{} {}:{}:{}",
                    year, month, day, hour, minute, second
                )
            })
    }

    /// Minutes past midnight for `hours:minutes`.
    pub fn hhmm(hours: u32, minutes: u32) -> u32 {
        hours * 60 + minutes
    }

    /// One phrase for each schedule shape, with the spec it parses to.
    pub fn sample_phrases() -> Vec<(&'static str, Spec)> {
        vec![
            ("hourly at quarter til", Spec::hourly(45)),
            (
                "every 15 minutes from 0:05",
                Spec::Minutely {
                    every: 15,
                    time_of_day: 5,
                },
            ),
            (
                "every 4 hours from 1:30",
                Spec::Hourly(HourlySpec::Every {
                    hours: 4.0,
                    time_of_day: 90,
                }),
            ),
            ("every day at 4pm", Spec::daily(hhmm(16, 0))),
            (
                "weekly at 5:35pm on saturdays",
                Spec::weekly(hhmm(17, 35), Weekday::Sat),
            ),
            (
                "3rd tuesday at 23:15",
                Spec::Monthly(MonthlySpec::NthWeekday {
                    week: 3,
                    weekday: Weekday::Tue,
                    time_of_day: hhmm(23, 15),
                }),
            ),
            (
                "monthly at 11:01pm on 19th",
                Spec::Monthly(MonthlySpec::DayOfMonth {
                    day: 19,
                    time_of_day: hhmm(23, 1),
                }),
            ),
        ]
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertion helpers for timespec results.

    use super::*;

    /// Assert that `source` parses, returning the spec.
    #[track_caller]
    pub fn assert_parses(source: &str) -> Spec {
        match parse(source) {
            Ok(spec) => spec,
            Err(e) => panic!("Expected {:?} to parse, got: {}", source, e),
        }
    }

    /// Assert that `source` parses to `expected`.
    #[track_caller]
    pub fn assert_parses_to(source: &str, expected: &Spec) {
        let spec = assert_parses(source);
        assert_eq!(&spec, expected, "Wrong spec for {:?}", source);
    }

    /// Assert that `source` is rejected by the parser.
    #[track_caller]
    pub fn assert_parse_error(source: &str) -> ParseError {
        match parse(source) {
            Err(e) => e,
            Ok(spec) => panic!("Expected {:?} to be rejected, got: {:?}", source, spec),
        }
    }

    /// Assert the next occurrence of `spec` after `now`.
    #[track_caller]
    pub fn assert_next(spec: &Spec, now: NaiveDateTime, expected: NaiveDateTime) {
        match spec.next(now) {
            Ok(next) => assert_eq!(next, expected, "Wrong next occurrence for {}", spec),
            Err(e) => panic!("Expected next occurrence for {}, got: {}", spec, e),
        }
    }

    /// Assert that computing the next occurrence fails.
    #[track_caller]
    pub fn assert_schedule_error(spec: &Spec, now: NaiveDateTime) -> ScheduleError {
        match spec.next(now) {
            Err(e) => e,
            Ok(next) => panic!("Expected {} to fail, got: {}", spec, next),
        }
    }

    /// Assert that a TimespecResult is a Config error.
    #[track_caller]
    pub fn assert_config_error<T: std::fmt::Debug>(result: &TimespecResult<T>) {
        match result {
            Err(TimespecError::Config(_)) => {}
            other => panic!("Expected Config error, got: {:?}", other),
        }
    }
}
