//! Retention arithmetic
//!
//! How many generations of a backup to keep so that a window of `days` days
//! is covered, given how often the schedule fires. All division truncates and
//! multiplication saturates, so every window yields a count.

use crate::spec::{HourlySpec, Spec, MINUTES_PER_DAY};

/// Returned by [`Spec::keep_n`] when the schedule's step makes the count
/// meaningless (a zero or negative interval).
pub const KEEP_UNDEFINED: i64 = -1;

impl Spec {
    /// Number of occurrences that fall within `days` days.
    pub fn keep_n(&self, days: i64) -> i64 {
        match self {
            Spec::Minutely { every, .. } => {
                if *every == 0 {
                    return KEEP_UNDEFINED;
                }
                days.saturating_mul(i64::from(MINUTES_PER_DAY)) / i64::from(*every)
            }
            Spec::Hourly(HourlySpec::AtMinute { .. }) => days.saturating_mul(24),
            Spec::Hourly(HourlySpec::Every { hours, .. }) => {
                if !(*hours > 0.0) {
                    return KEEP_UNDEFINED;
                }
                (days.saturating_mul(24) as f64 / hours) as i64
            }
            Spec::Daily { .. } => days,
            Spec::Weekly { .. } => days / 7,
            Spec::Monthly(_) => days / 30,
        }
    }
}
