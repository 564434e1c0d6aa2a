//! End-to-end scenarios: phrase → Spec → next / render / keep_n

use shield_test_utils::assertions::*;
use shield_test_utils::fixtures::*;
use shield_timespec::{
    parse, round_trip, HourlySpec, PreviewConfig, ScheduleError, Spec, TimespecResult,
};

#[test]
fn test_sample_phrases_render_canonically() {
    let expected = [
        "hourly at 45 after",
        "every 15 minutes from 0:05",
        "every 4 hours from 1:30",
        "daily at 16:00",
        "saturdays at 17:35",
        "3rd tuesday at 23:15",
        "monthly at 23:01 on 19th",
    ];
    for ((phrase, _), canonical) in sample_phrases().into_iter().zip(expected) {
        assert_eq!(round_trip(phrase).as_deref(), Ok(canonical), "{:?}", phrase);
    }
}

#[test]
fn test_sample_phrases_next_after_reference() {
    let expected = [
        at(1991, 8, 6, 11, 45),
        at(1991, 8, 6, 11, 20),
        at(1991, 8, 6, 13, 30),
        at(1991, 8, 6, 16, 0),
        at(1991, 8, 10, 17, 35),
        at(1991, 8, 20, 23, 15),
        at(1991, 8, 19, 23, 1),
    ];
    for ((_, spec), next) in sample_phrases().into_iter().zip(expected) {
        assert_next(&spec, reference_instant(), next);
    }
}

#[test]
fn test_midnight_and_noon() {
    let midnight = assert_parses("daily at 12am");
    assert_eq!(midnight.time_of_day(), Some(0));
    assert_next(&midnight, reference_instant(), at(1991, 8, 7, 0, 0));

    let noon = assert_parses("daily at 12pm");
    assert_eq!(noon.time_of_day(), Some(720));
    assert_next(&noon, reference_instant(), at(1991, 8, 6, 12, 0));
}

#[test]
fn test_weekly_rollover() {
    let exact = assert_parses("tuesday at 11:15");
    assert_next(&exact, reference_instant(), at(1991, 8, 13, 11, 15));

    let later = assert_parses("tuesday at 11:16");
    assert_next(&later, reference_instant(), at(1991, 8, 6, 11, 16));
}

#[test]
fn test_hourly_interval_correction_is_reported_not_applied() {
    let spec = Spec::Hourly(HourlySpec::Every {
        hours: 0.5,
        time_of_day: 40,
    });
    let err = assert_schedule_error(&spec, reference_instant());
    assert!(matches!(err, ScheduleError::StartOutsideInterval { .. }));
    assert!(err.to_string().contains("did you mean 0:10?"));
    assert_eq!(spec.time_of_day(), Some(40));
}

#[test]
fn test_bare_hourly_offset_checked_at_next() {
    let spec = assert_parses("hourly at 75");
    let err = assert_schedule_error(&spec, reference_instant());
    assert_eq!(err, ScheduleError::MinuteOutOfRange { minutes: 75 });
}

#[test]
fn test_rejected_phrases() {
    for phrase in [
        "",
        "daily",
        "daily at 25:00",
        "weekly at 4pm",
        "6th friday at 1am",
        "monthly at 1am on 32nd",
        "every 90 seconds",
        "every day at 4pm please",
        "hourly at 75 til",
    ] {
        let err = assert_parse_error(phrase);
        assert!(!err.message.is_empty(), "{:?}", phrase);
        assert!(err.position <= phrase.len(), "{:?}", phrase);
    }
}

#[test]
fn test_retention_from_phrases() {
    assert_eq!(assert_parses("every day at 4pm").keep_n(7), 7);
    assert_eq!(assert_parses("sundays at 2am").keep_n(21), 3);
    assert_eq!(assert_parses("monthly at 2am on 1st").keep_n(90), 3);
    assert_eq!(assert_parses("hourly at 30").keep_n(2), 48);
    assert_eq!(assert_parses("every 4 hours").keep_n(2), 12);
    assert_eq!(assert_parses("every 15 minutes").keep_n(1), 96);
}

#[test]
fn test_upcoming_nth_weekday_across_months() {
    let spec = assert_parses("5th friday at 2am");
    let upcoming = spec
        .upcoming(reference_instant(), 3)
        .expect("5th fridays exist");
    assert_eq!(
        upcoming,
        vec![
            at(1991, 8, 30, 2, 0),
            at(1991, 11, 29, 2, 0),
            at(1992, 1, 31, 2, 0),
        ]
    );
}

#[test]
fn test_preview_config_validation() {
    let result: TimespecResult<()> = PreviewConfig {
        occurrences: 0,
        retention_days: 30,
    }
    .validate();
    assert_config_error(&result);
}

#[test]
fn test_from_str() {
    let spec: Spec = "Every Quarter Hour from 0:05".parse().expect("valid phrase");
    assert_eq!(spec.to_string(), "every quarter hour from 0:05");
    assert_eq!(parse("every quarter hour from 0:05"), Ok(spec));
}
