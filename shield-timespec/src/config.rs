//! Preview configuration for diagnostics tooling

use crate::error::{ConfigError, TimespecResult};

/// Hard ceiling on how many occurrences a preview may request.
pub const MAX_PREVIEW_OCCURRENCES: usize = 1000;

/// Longest retention window a preview may size, one century.
pub const MAX_RETENTION_DAYS: i64 = 36_500;

/// How far ahead to preview a schedule and which retention window to size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Number of upcoming occurrences to list.
    pub occurrences: usize,
    /// Retention window, in days, passed to [`Spec::keep_n`](crate::Spec::keep_n).
    pub retention_days: i64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            occurrences: 5,
            retention_days: 30,
        }
    }
}

impl PreviewConfig {
    /// Load from `SHIELD_TIMESPEC_PREVIEW_OCCURRENCES` and
    /// `SHIELD_TIMESPEC_RETENTION_DAYS`, keeping defaults for unset or
    /// unparseable values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            occurrences: lookup("SHIELD_TIMESPEC_PREVIEW_OCCURRENCES")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.occurrences),
            retention_days: lookup("SHIELD_TIMESPEC_RETENTION_DAYS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.retention_days),
        }
    }

    pub fn validate(&self) -> TimespecResult<()> {
        if self.occurrences == 0 {
            return Err(ConfigError::InvalidValue {
                field: "occurrences".to_string(),
                value: self.occurrences.to_string(),
                reason: "occurrences must be greater than 0".to_string(),
            }
            .into());
        }

        if self.occurrences > MAX_PREVIEW_OCCURRENCES {
            return Err(ConfigError::InvalidValue {
                field: "occurrences".to_string(),
                value: self.occurrences.to_string(),
                reason: format!("occurrences must be at most {}", MAX_PREVIEW_OCCURRENCES),
            }
            .into());
        }

        if self.retention_days < 0 {
            return Err(ConfigError::InvalidValue {
                field: "retention_days".to_string(),
                value: self.retention_days.to_string(),
                reason: "retention_days must be non-negative".to_string(),
            }
            .into());
        }

        if self.retention_days > MAX_RETENTION_DAYS {
            return Err(ConfigError::InvalidValue {
                field: "retention_days".to_string(),
                value: self.retention_days.to_string(),
                reason: format!("retention_days must be at most {}", MAX_RETENTION_DAYS),
            }
            .into());
        }

        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
