//! Recurrence model produced by the parser

use chrono::Weekday;
use serde::Serialize;
use std::fmt;

/// Minutes in one day; every time of day is strictly below this.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Largest hourly interval a schedule may use.
pub const MAX_HOURLY_INTERVAL: f64 = 23.0;

// ============================================================================
// INTERVAL
// ============================================================================

/// Top-level recurrence family of a [`Spec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Interval::Minutely => "minutely",
            Interval::Hourly => "hourly",
            Interval::Daily => "daily",
            Interval::Weekly => "weekly",
            Interval::Monthly => "monthly",
        };
        f.write_str(name)
    }
}

// ============================================================================
// SPEC
// ============================================================================

/// A parsed recurrence.
///
/// Times of day are minutes past local midnight (0-1439).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Spec {
    /// Every `every` minutes, counted from `time_of_day` each day.
    Minutely { every: u32, time_of_day: u32 },
    Hourly(HourlySpec),
    Daily { time_of_day: u32 },
    Weekly { weekday: Weekday, time_of_day: u32 },
    Monthly(MonthlySpec),
}

/// The two hourly shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HourlySpec {
    /// Once an hour, `time_of_hour` minutes past the top of the hour.
    AtMinute { time_of_hour: u32 },
    /// Every `hours` hours (0.25 and 0.5 allowed), counted from `time_of_day`.
    Every { hours: f64, time_of_day: u32 },
}

/// The two monthly shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthlySpec {
    DayOfMonth { day: u32, time_of_day: u32 },
    /// The `week`th `weekday` of the month, e.g. the 3rd tuesday.
    NthWeekday {
        week: u32,
        weekday: Weekday,
        time_of_day: u32,
    },
}

impl Spec {
    /// Once an hour at `time_of_hour` minutes past.
    pub fn hourly(time_of_hour: u32) -> Self {
        Spec::Hourly(HourlySpec::AtMinute { time_of_hour })
    }

    /// Every `hours` hours starting at `time_of_day`.
    ///
    /// Returns `None` unless `hours` is in (0, 23] and the start falls inside
    /// the first interval of the day.
    pub fn hourly_every(hours: f64, time_of_day: u32) -> Option<Self> {
        if !(hours > 0.0 && hours <= MAX_HOURLY_INTERVAL) {
            return None;
        }
        if f64::from(time_of_day) > hours * 60.0 {
            return None;
        }
        Some(Spec::Hourly(HourlySpec::Every { hours, time_of_day }))
    }

    /// Every `every` minutes starting at `time_of_day`.
    pub fn minutely(every: u32, time_of_day: u32) -> Option<Self> {
        if every == 0 || every > MINUTES_PER_DAY || time_of_day >= MINUTES_PER_DAY {
            return None;
        }
        Some(Spec::Minutely { every, time_of_day })
    }

    pub fn daily(time_of_day: u32) -> Self {
        Spec::Daily { time_of_day }
    }

    pub fn weekly(time_of_day: u32, weekday: Weekday) -> Self {
        Spec::Weekly {
            weekday,
            time_of_day,
        }
    }

    /// Monthly on a fixed day of the month (1-31).
    pub fn day_of_month(time_of_day: u32, day: u32) -> Option<Self> {
        if !(1..=31).contains(&day) {
            return None;
        }
        Some(Spec::Monthly(MonthlySpec::DayOfMonth { day, time_of_day }))
    }

    /// Monthly on the `week`th (1-5) `weekday`.
    pub fn nth_weekday(time_of_day: u32, weekday: Weekday, week: u32) -> Option<Self> {
        if !(1..=5).contains(&week) {
            return None;
        }
        Some(Spec::Monthly(MonthlySpec::NthWeekday {
            week,
            weekday,
            time_of_day,
        }))
    }

    pub fn interval(&self) -> Interval {
        match self {
            Spec::Minutely { .. } => Interval::Minutely,
            Spec::Hourly(_) => Interval::Hourly,
            Spec::Daily { .. } => Interval::Daily,
            Spec::Weekly { .. } => Interval::Weekly,
            Spec::Monthly(_) => Interval::Monthly,
        }
    }

    /// Minutes past midnight, for the shapes anchored to a time of day.
    pub fn time_of_day(&self) -> Option<u32> {
        match self {
            Spec::Minutely { time_of_day, .. }
            | Spec::Hourly(HourlySpec::Every { time_of_day, .. })
            | Spec::Daily { time_of_day }
            | Spec::Weekly { time_of_day, .. }
            | Spec::Monthly(MonthlySpec::DayOfMonth { time_of_day, .. })
            | Spec::Monthly(MonthlySpec::NthWeekday { time_of_day, .. }) => Some(*time_of_day),
            Spec::Hourly(HourlySpec::AtMinute { .. }) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_every_bounds() {
        assert!(Spec::hourly_every(4.0, 0).is_some());
        assert!(Spec::hourly_every(4.0, 240).is_some());
        assert!(Spec::hourly_every(4.0, 241).is_none());
        assert!(Spec::hourly_every(0.25, 15).is_some());
        assert!(Spec::hourly_every(0.25, 16).is_none());
        assert!(Spec::hourly_every(23.0, 0).is_some());
        assert!(Spec::hourly_every(24.0, 0).is_none());
        assert!(Spec::hourly_every(0.0, 0).is_none());
        assert!(Spec::hourly_every(-1.0, 0).is_none());
        assert!(Spec::hourly_every(f64::NAN, 0).is_none());
    }

    #[test]
    fn test_monthly_constructors_reject_out_of_range() {
        assert!(Spec::day_of_month(0, 0).is_none());
        assert!(Spec::day_of_month(0, 31).is_some());
        assert!(Spec::day_of_month(0, 32).is_none());
        assert!(Spec::nth_weekday(0, Weekday::Tue, 0).is_none());
        assert!(Spec::nth_weekday(0, Weekday::Tue, 5).is_some());
        assert!(Spec::nth_weekday(0, Weekday::Tue, 6).is_none());
    }

    #[test]
    fn test_minutely_bounds() {
        assert!(Spec::minutely(0, 0).is_none());
        assert!(Spec::minutely(1, 0).is_some());
        assert!(Spec::minutely(1440, 1439).is_some());
        assert!(Spec::minutely(1441, 0).is_none());
        assert!(Spec::minutely(15, 1440).is_none());
    }

    #[test]
    fn test_interval_and_time_of_day() {
        let spec = Spec::weekly(17 * 60 + 35, Weekday::Sun);
        assert_eq!(spec.interval(), Interval::Weekly);
        assert_eq!(spec.time_of_day(), Some(1055));

        let spec = Spec::hourly(45);
        assert_eq!(spec.interval(), Interval::Hourly);
        assert_eq!(spec.time_of_day(), None);

        assert_eq!(Interval::Monthly.to_string(), "monthly");
    }

    #[test]
    fn test_spec_serializes_with_interval_names() {
        let json = serde_json::to_value(Spec::daily(960)).expect("serialize");
        assert_eq!(json, serde_json::json!({ "daily": { "time_of_day": 960 } }));
    }
}
