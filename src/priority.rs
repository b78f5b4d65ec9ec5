use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, Result};

/// Horizons at or above this many seconds map to [`Priority::Low`].
const LOW_HORIZON_SECS: u64 = 300;

/// Horizons at or above this many seconds (and below the low boundary)
/// map to [`Priority::Medium`].
const MEDIUM_HORIZON_SECS: u64 = 60;

/// How quickly the caller wants a transaction confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Confirmation within five minutes or more.
    Low,
    /// Confirmation within one to five minutes.
    Medium,
    /// Confirmation within the next minute.
    High,
}

impl Priority {
    /// Maps a target confirmation horizon in seconds to a priority bucket.
    ///
    /// # Example
    /// ```
    /// use fee_estimator::Priority;
    ///
    /// assert_eq!(Priority::for_horizon(600), Priority::Low);
    /// assert_eq!(Priority::for_horizon(120), Priority::Medium);
    /// assert_eq!(Priority::for_horizon(30), Priority::High);
    /// ```
    pub fn for_horizon(horizon_secs: u64) -> Self {
        if horizon_secs >= LOW_HORIZON_SECS {
            Priority::Low
        } else if horizon_secs >= MEDIUM_HORIZON_SECS {
            Priority::Medium
        } else {
            Priority::High
        }
    }
}

/// Percentile into the window's ascending fee rates, per priority bucket.
///
/// The defaults sit deliberately low in the distribution: the estimator
/// prices transactions the user wants *included*, and a rate above the
/// cheapest tenth of recently included transactions is usually enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percentiles {
    /// Percentile used for [`Priority::Low`].
    pub low: u8,

    /// Percentile used for [`Priority::Medium`].
    pub medium: u8,

    /// Percentile used for [`Priority::High`].
    pub high: u8,
}

impl Percentiles {
    /// Creates a percentile configuration.
    ///
    /// Each value must be at most 100.
    pub fn new(low: u8, medium: u8, high: u8) -> Result<Self> {
        for (name, value) in [("low", low), ("medium", medium), ("high", high)] {
            if value > 100 {
                return Err(EstimatorError::invalid_config(format!(
                    "{name} percentile must be at most 100, got {value}"
                )));
            }
        }
        Ok(Self { low, medium, high })
    }

    /// The percentile configured for `priority`.
    pub fn for_priority(self, priority: Priority) -> u8 {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
        }
    }
}

impl Default for Percentiles {
    /// The documented defaults: low 10th, medium 20th, high 30th.
    fn default() -> Self {
        Self {
            low: 10,
            medium: 20,
            high: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_boundaries() {
        assert_eq!(Priority::for_horizon(0), Priority::High);
        assert_eq!(Priority::for_horizon(59), Priority::High);
        assert_eq!(Priority::for_horizon(60), Priority::Medium);
        assert_eq!(Priority::for_horizon(299), Priority::Medium);
        assert_eq!(Priority::for_horizon(300), Priority::Low);
        assert_eq!(Priority::for_horizon(u64::MAX), Priority::Low);
    }

    #[test]
    fn test_default_percentiles() {
        let percentiles = Percentiles::default();
        assert_eq!(percentiles.for_priority(Priority::Low), 10);
        assert_eq!(percentiles.for_priority(Priority::Medium), 20);
        assert_eq!(percentiles.for_priority(Priority::High), 30);
    }

    #[test]
    fn test_percentile_above_100_rejected() {
        assert!(Percentiles::new(10, 101, 30).is_err());
        assert!(Percentiles::new(100, 100, 100).is_ok());
    }
}
