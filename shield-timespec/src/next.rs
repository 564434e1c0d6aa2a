//! Next-occurrence calculation
//!
//! All arithmetic is on local wall-clock time; the reference instant is
//! truncated to the whole minute before any candidate is compared with it.

use crate::error::ScheduleError;
use crate::render::ClockTime;
use crate::spec::{HourlySpec, MonthlySpec, Spec, MAX_HOURLY_INTERVAL, MINUTES_PER_DAY};
use chrono::{Datelike, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Weekday};

/// Candidates tried for a minutely schedule: one full day of one-minute steps.
const MINUTE_STEP_LIMIT: usize = 1441;

/// Candidates tried for an hourly interval: one full day of quarter hours.
const HOURLY_STEP_LIMIT: usize = 97;

/// Days walked looking for a matching calendar day.
const DAY_WALK_LIMIT: usize = 366;

/// Week jumps taken looking for the right week of the month.
const WEEK_JUMP_LIMIT: usize = 53;

impl Spec {
    /// Earliest instant strictly after `now` that satisfies this spec.
    ///
    /// A weekly schedule whose slot is exactly `now` rolls forward a full week.
    pub fn next(&self, now: NaiveDateTime) -> Result<NaiveDateTime, ScheduleError> {
        let now = truncate_to_minute(now);

        let result = match self {
            Spec::Minutely { every, time_of_day } => next_minutely(now, *every, *time_of_day),
            Spec::Hourly(HourlySpec::AtMinute { time_of_hour }) => {
                next_at_minute(now, *time_of_hour)
            }
            Spec::Hourly(HourlySpec::Every { hours, time_of_day }) => {
                next_hourly_every(now, *hours, *time_of_day)
            }
            Spec::Daily { time_of_day } => next_daily(now, *time_of_day),
            Spec::Weekly {
                weekday,
                time_of_day,
            } => next_weekly(now, *weekday, *time_of_day),
            Spec::Monthly(MonthlySpec::NthWeekday {
                week,
                weekday,
                time_of_day,
            }) => next_nth_weekday(now, *week, *weekday, *time_of_day),
            Spec::Monthly(MonthlySpec::DayOfMonth { day, time_of_day }) => {
                next_day_of_month(now, *day, *time_of_day)
            }
        };

        match &result {
            Ok(at) => tracing::trace!(%now, next = %at, "computed next occurrence"),
            Err(err) => tracing::debug!(%now, spec = %self, error = %err, "cannot compute next occurrence"),
        }
        result
    }

    /// The next `count` occurrences after `now`, in order.
    pub fn upcoming(
        &self,
        now: NaiveDateTime,
        count: usize,
    ) -> Result<Vec<NaiveDateTime>, ScheduleError> {
        let mut occurrences = Vec::with_capacity(count);
        let mut cursor = now;
        for _ in 0..count {
            cursor = self.next(cursor)?;
            occurrences.push(cursor);
        }
        Ok(occurrences)
    }
}

// ============================================================================
// PER-INTERVAL RULES
// ============================================================================

fn next_minutely(
    now: NaiveDateTime,
    every: u32,
    time_of_day: u32,
) -> Result<NaiveDateTime, ScheduleError> {
    if every == 0 || every > MINUTES_PER_DAY {
        return Err(ScheduleError::StepOutOfRange { minutes: every });
    }
    let start = today_at(now, time_of_day)?;
    search(
        start,
        TimeDelta::minutes(i64::from(every)),
        MINUTE_STEP_LIMIT,
        "minute",
        |candidate| candidate > now,
    )
}

fn next_at_minute(now: NaiveDateTime, time_of_hour: u32) -> Result<NaiveDateTime, ScheduleError> {
    if time_of_hour >= 60 {
        return Err(ScheduleError::MinuteOutOfRange {
            minutes: time_of_hour,
        });
    }
    let top_of_hour = shift(midnight(now), TimeDelta::hours(i64::from(now.hour())))?;
    let candidate = shift(top_of_hour, TimeDelta::minutes(i64::from(time_of_hour)))?;
    if candidate > now {
        Ok(candidate)
    } else {
        shift(candidate, TimeDelta::hours(1))
    }
}

fn next_hourly_every(
    now: NaiveDateTime,
    hours: f64,
    time_of_day: u32,
) -> Result<NaiveDateTime, ScheduleError> {
    if !(hours > 0.0 && hours <= MAX_HOURLY_INTERVAL) {
        return Err(ScheduleError::IntervalOutOfRange { hours });
    }
    if hours.fract() != 0.0 && hours != 0.5 && hours != 0.25 {
        return Err(ScheduleError::IntervalNotSupported { hours });
    }

    // Exact: hours is a whole number, 0.5, or 0.25.
    let step = (hours * 60.0) as u32;
    if time_of_day >= step {
        return Err(ScheduleError::StartOutsideInterval {
            given: ClockTime(time_of_day),
            hours,
            suggested: ClockTime(time_of_day % step),
        });
    }

    let start = today_at(now, time_of_day)?;
    search(
        start,
        TimeDelta::minutes(i64::from(step)),
        HOURLY_STEP_LIMIT,
        "hour",
        |candidate| candidate > now,
    )
}

fn next_daily(now: NaiveDateTime, time_of_day: u32) -> Result<NaiveDateTime, ScheduleError> {
    let candidate = today_at(now, time_of_day)?;
    if candidate > now {
        Ok(candidate)
    } else {
        shift(candidate, TimeDelta::days(1))
    }
}

fn next_weekly(
    now: NaiveDateTime,
    weekday: Weekday,
    time_of_day: u32,
) -> Result<NaiveDateTime, ScheduleError> {
    let start = today_at(now, time_of_day)?;
    let candidate = search(start, TimeDelta::days(1), 7, "weekday", |candidate| {
        candidate.weekday() == weekday
    })?;
    if candidate <= now {
        shift(candidate, TimeDelta::days(7))
    } else {
        Ok(candidate)
    }
}

fn next_nth_weekday(
    now: NaiveDateTime,
    week: u32,
    weekday: Weekday,
    time_of_day: u32,
) -> Result<NaiveDateTime, ScheduleError> {
    if !(1..=5).contains(&week) {
        return Err(ScheduleError::WeekOutOfRange { week });
    }
    let start = today_at(now, time_of_day)?;
    let first = search(start, TimeDelta::days(1), DAY_WALK_LIMIT, "weekday", |candidate| {
        candidate.weekday() == weekday && candidate > now
    })?;
    search(
        first,
        TimeDelta::days(7),
        WEEK_JUMP_LIMIT,
        "week of the month",
        |candidate| week_of_month(candidate) == week,
    )
}

fn next_day_of_month(
    now: NaiveDateTime,
    day: u32,
    time_of_day: u32,
) -> Result<NaiveDateTime, ScheduleError> {
    if !(1..=31).contains(&day) {
        return Err(ScheduleError::DayOfMonthOutOfRange { day });
    }
    let start = today_at(now, time_of_day)?;
    search(
        start,
        TimeDelta::days(1),
        DAY_WALK_LIMIT,
        "day of the month",
        |candidate| candidate.day() == day && candidate > now,
    )
}

// ============================================================================
// HELPERS
// ============================================================================

/// Step from `start` until `accept` holds, trying at most `limit` candidates.
fn search(
    start: NaiveDateTime,
    step: TimeDelta,
    limit: usize,
    what: &'static str,
    accept: impl Fn(NaiveDateTime) -> bool,
) -> Result<NaiveDateTime, ScheduleError> {
    let mut candidate = start;
    for _ in 0..limit {
        if accept(candidate) {
            return Ok(candidate);
        }
        candidate = shift(candidate, step)?;
    }
    Err(ScheduleError::Unreachable { what, limit })
}

/// 1-based week of the month: days 1-7 are week 1, 8-14 week 2, and so on.
fn week_of_month(at: NaiveDateTime) -> u32 {
    (at.day() - 1) / 7 + 1
}

fn truncate_to_minute(at: NaiveDateTime) -> NaiveDateTime {
    at.with_second(0)
        .and_then(|dt| dt.with_nanosecond(0))
        .unwrap_or(at)
}

fn midnight(at: NaiveDateTime) -> NaiveDateTime {
    at.date().and_time(NaiveTime::MIN)
}

fn today_at(now: NaiveDateTime, time_of_day: u32) -> Result<NaiveDateTime, ScheduleError> {
    if time_of_day >= MINUTES_PER_DAY {
        return Err(ScheduleError::TimeOfDayOutOfRange {
            minutes: time_of_day,
        });
    }
    shift(midnight(now), TimeDelta::minutes(i64::from(time_of_day)))
}

fn shift(at: NaiveDateTime, delta: TimeDelta) -> Result<NaiveDateTime, ScheduleError> {
    at.checked_add_signed(delta)
        .ok_or(ScheduleError::DateOverflow)
}

// ============================================================================
// TESTS
// ============================================================================
