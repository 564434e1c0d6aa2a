//! Error types for timespec operations

use crate::render::ClockTime;
use thiserror::Error;

/// Syntax error raised while parsing a schedule phrase.
///
/// Every parse failure is the same kind of error; `position` is the byte
/// offset of the token the parser stopped on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Parse error at position {position}: {message}")]
pub struct ParseError {
    pub message: String,
    pub position: usize,
}

/// Errors raised while computing the next occurrence of a spec.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScheduleError {
    #[error("Time of day {minutes} is outside 0-1439 minutes past midnight")]
    TimeOfDayOutOfRange { minutes: u32 },

    #[error("Minute offset {minutes} is inconceivably large for an hourly schedule")]
    MinuteOutOfRange { minutes: u32 },

    #[error("Step of {minutes} minutes is outside (0, 1440]")]
    StepOutOfRange { minutes: u32 },

    #[error("Interval of {hours} hours is outside (0, 23]")]
    IntervalOutOfRange { hours: f64 },

    #[error("Interval of {hours} hours is not a whole number of hours, a half hour, or a quarter hour")]
    IntervalNotSupported { hours: f64 },

    #[error("Start time {given} is not within the first {hours}-hour interval of the day; did you mean {suggested}?")]
    StartOutsideInterval {
        given: ClockTime,
        hours: f64,
        suggested: ClockTime,
    },

    #[error("Week {week} is not a valid week of the month (1-5)")]
    WeekOutOfRange { week: u32 },

    #[error("Day {day} is not a valid day of the month (1-31)")]
    DayOfMonthOutOfRange { day: u32 },

    #[error("Cannot calculate the next {what}: no match within {limit} steps")]
    Unreachable { what: &'static str, limit: usize },

    #[error("Next occurrence falls outside the supported calendar range")]
    DateOverflow,
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Master error type for all timespec errors.
#[derive(Debug, Clone, Error)]
pub enum TimespecError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for timespec operations.
pub type TimespecResult<T> = Result<T, TimespecError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError {
            message: "Expected time of day".to_string(),
            position: 6,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("position 6"));
        assert!(msg.contains("Expected time of day"));
    }

    #[test]
    fn test_schedule_error_display_suggests_correction() {
        let err = ScheduleError::StartOutsideInterval {
            given: ClockTime(40),
            hours: 0.5,
            suggested: ClockTime(10),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("0:40"));
        assert!(msg.contains("did you mean 0:10?"));
    }

    #[test]
    fn test_schedule_error_display_week_out_of_range() {
        let err = ScheduleError::WeekOutOfRange { week: 6 };
        let msg = format!("{}", err);
        assert!(msg.contains("Week 6"));
        assert!(msg.contains("1-5"));
    }

    #[test]
    fn test_schedule_error_display_unreachable() {
        let err = ScheduleError::Unreachable {
            what: "minute",
            limit: 1441,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Cannot calculate the next minute"));
        assert!(msg.contains("1441"));
    }

    #[test]
    fn test_config_error_display_invalid_value() {
        let err = ConfigError::InvalidValue {
            field: "occurrences".to_string(),
            value: "0".to_string(),
            reason: "must be positive".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("occurrences"));
        assert!(msg.contains("must be positive"));
    }

    #[test]
    fn test_timespec_error_from_variants() {
        let parse = TimespecError::from(ParseError {
            message: "boom".to_string(),
            position: 0,
        });
        assert!(matches!(parse, TimespecError::Parse(_)));

        let schedule = TimespecError::from(ScheduleError::DayOfMonthOutOfRange { day: 32 });
        assert!(matches!(schedule, TimespecError::Schedule(_)));

        let config = TimespecError::from(ConfigError::InvalidValue {
            field: "retention_days".to_string(),
            value: "-1".to_string(),
            reason: "must be non-negative".to_string(),
        });
        assert!(matches!(config, TimespecError::Config(_)));
    }
}
