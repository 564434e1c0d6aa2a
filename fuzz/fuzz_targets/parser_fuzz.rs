//! Fuzz test for the schedule phrase parser
//!
//! Any input must either be rejected with a positioned error, or parse to a
//! spec that renders to a phrase parsing back to the same spec and whose next
//! occurrence can be computed without panicking.
//!
//! Run with: cargo +nightly fuzz run parser_fuzz -- -max_total_time=60

#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use shield_timespec::parse;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        match parse(input) {
            Ok(spec) => {
                let canonical = spec.to_string();
                assert_eq!(
                    parse(&canonical).as_ref(),
                    Ok(&spec),
                    "Canonical phrase {:?} should parse back",
                    canonical
                );

                if let Some(now) = NaiveDate::from_ymd_opt(1991, 8, 6)
                    .and_then(|d| d.and_hms_opt(11, 15, 42))
                {
                    if let Ok(next) = spec.next(now) {
                        assert!(next > now, "Next occurrence should be after now");
                    }
                }
                let _ = spec.keep_n(30);
            }
            Err(err) => {
                assert!(!err.message.is_empty(), "Parse errors should carry a message");
                assert!(err.position <= input.len(), "Error position should be in bounds");
            }
        }
    }
});
