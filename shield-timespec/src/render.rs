//! Canonical rendering of parsed schedules
//!
//! Every phrase produced here parses back to the same [`Spec`].

use crate::spec::{HourlySpec, MonthlySpec, Spec};
use chrono::Weekday;
use std::fmt;

/// A time of day in minutes past midnight, displayed as `H:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(pub u32);

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// English ordinal suffix for `n` ("st", "nd", "rd", "th").
pub fn ordinal_suffix(n: u32) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spec::Minutely { every, time_of_day } => {
                if *every == 1 {
                    write!(f, "every minute")?;
                } else {
                    write!(f, "every {} minutes", every)?;
                }
                if *time_of_day != 0 {
                    write!(f, " from {}", ClockTime(*time_of_day))?;
                }
                Ok(())
            }
            Spec::Hourly(HourlySpec::AtMinute { time_of_hour }) => {
                write!(f, "hourly at {} after", time_of_hour)
            }
            Spec::Hourly(HourlySpec::Every { hours, time_of_day }) => {
                let start = ClockTime(*time_of_day);
                if *hours == 0.25 {
                    write!(f, "every quarter hour from {}", start)
                } else if *hours == 0.5 {
                    write!(f, "every half hour from {}", start)
                } else if *hours == 1.0 {
                    write!(f, "every hour from {}", start)
                } else {
                    write!(f, "every {} hours from {}", hours, start)
                }
            }
            Spec::Daily { time_of_day } => write!(f, "daily at {}", ClockTime(*time_of_day)),
            Spec::Weekly {
                weekday,
                time_of_day,
            } => write!(
                f,
                "{}s at {}",
                weekday_name(*weekday),
                ClockTime(*time_of_day)
            ),
            Spec::Monthly(MonthlySpec::NthWeekday {
                week,
                weekday,
                time_of_day,
            }) => write!(
                f,
                "{}{} {} at {}",
                week,
                ordinal_suffix(*week),
                weekday_name(*weekday),
                ClockTime(*time_of_day)
            ),
            Spec::Monthly(MonthlySpec::DayOfMonth { day, time_of_day }) => write!(
                f,
                "monthly at {} on {}{}",
                ClockTime(*time_of_day),
                day,
                ordinal_suffix(*day)
            ),
        }
    }
}
