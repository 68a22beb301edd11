//! Production method variants and rate validation.

use crate::error::CurveError;

/// Distribution method used to allocate a total across a duration.
///
/// Each variant carries exactly the rate parameters its calculation needs,
/// so a missing parameter is unrepresentable; [`validate`](Self::validate)
/// rejects non-finite and negative rates up front instead of letting NaNs
/// propagate into the allocation table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProductionMethod {
    /// A flat rate every day, clamped so the running total never overshoots.
    Constant {
        /// Target units produced per day.
        units_per_day: f64,
    },

    /// Linear increase from a starting rate to an ending rate.
    RampUp {
        /// Rate on the first day.
        start_units_per_day: f64,
        /// Rate on the last day.
        end_units_per_day: f64,
    },

    /// Linear decrease from a starting rate to an ending rate.
    RampDown {
        /// Rate on the first day.
        start_units_per_day: f64,
        /// Rate on the last day.
        end_units_per_day: f64,
    },

    /// Ramp up to a peak rate, hold it, then ramp back down.
    SCurve {
        /// Rate held during the steady phase.
        peak_units_per_day: f64,
    },
}

impl ProductionMethod {
    /// Validates every rate carried by this variant.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidParameters`] if any rate is NaN,
    /// infinite, or negative.
    pub fn validate(&self) -> Result<(), CurveError> {
        match *self {
            Self::Constant { units_per_day } => check_rate("units_per_day", units_per_day),
            Self::RampUp {
                start_units_per_day,
                end_units_per_day,
            }
            | Self::RampDown {
                start_units_per_day,
                end_units_per_day,
            } => {
                check_rate("start_units_per_day", start_units_per_day)?;
                check_rate("end_units_per_day", end_units_per_day)
            }
            Self::SCurve { peak_units_per_day } => {
                check_rate("peak_units_per_day", peak_units_per_day)
            }
        }
    }
}

fn check_rate(name: &str, value: f64) -> Result<(), CurveError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CurveError::InvalidParameters {
            reason: format!("{name} must be finite and >= 0, got {value}"),
        });
    }
    Ok(())
}
