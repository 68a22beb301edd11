//! Error types for the helios-curve crate.

/// Error type for all fallible operations in the helios-curve crate.
///
/// This enum covers validation failures for the requested duration and the
/// method-specific rate parameters, plus the (practically unreachable) case
/// of date arithmetic leaving chrono's representable range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// Returned when the requested duration is shorter than one day.
    #[error("invalid duration: {days} days (must be >= 1)")]
    InvalidDuration {
        /// The invalid duration that was provided.
        days: u32,
    },

    /// Returned when a total or per-day rate is non-finite or negative.
    #[error("invalid parameters: {reason}")]
    InvalidParameters {
        /// Human-readable description of the offending parameter.
        reason: String,
    },

    /// Returned when `start_date + (day - 1)` cannot be represented.
    #[error("date out of range at day {day}")]
    DateOutOfRange {
        /// The 1-based day index at which date arithmetic overflowed.
        day: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_duration() {
        let err = CurveError::InvalidDuration { days: 0 };
        assert_eq!(err.to_string(), "invalid duration: 0 days (must be >= 1)");
    }

    #[test]
    fn error_invalid_parameters() {
        let err = CurveError::InvalidParameters {
            reason: "peak_units_per_day must be finite and >= 0, got NaN".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid parameters: peak_units_per_day must be finite and >= 0, got NaN"
        );
    }

    #[test]
    fn error_date_out_of_range() {
        let err = CurveError::DateOutOfRange { day: 14 };
        assert_eq!(err.to_string(), "date out of range at day 14");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CurveError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CurveError>();
    }

    #[test]
    fn error_is_clone() {
        let err = CurveError::InvalidDuration { days: 0 };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
