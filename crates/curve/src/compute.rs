//! Curve computation: allocates a total across a duration, day by day.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::allocation::DailyAllocation;
use crate::error::CurveError;
use crate::method::ProductionMethod;
use crate::scurve::PhasePlan;

/// Rounds a value to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes the day-by-day production target curve.
///
/// Produces exactly `duration_days` allocations ordered by `day` ascending,
/// with `date = start_date + (day - 1)` days. Every intermediate day's value
/// is rounded to 2 decimals before being emitted and before being added to
/// the running total; the final day is force-overridden to
/// `total_units - sum(previous days)`, so the sequence sums to the requested
/// total regardless of accumulated rounding drift. The running total
/// deliberately accumulates the rounded values — the final day corrects both
/// the mathematical remainder and the drift.
///
/// # Errors
///
/// Returns [`CurveError::InvalidDuration`] if `duration_days < 1`,
/// [`CurveError::InvalidParameters`] if `total_units` or any method rate is
/// non-finite or negative, and [`CurveError::DateOutOfRange`] if the date
/// sequence leaves chrono's representable range.
pub fn compute(
    method: ProductionMethod,
    total_units: f64,
    duration_days: u32,
    start_date: NaiveDate,
) -> Result<Vec<DailyAllocation>, CurveError> {
    if duration_days < 1 {
        return Err(CurveError::InvalidDuration {
            days: duration_days,
        });
    }
    if !total_units.is_finite() || total_units < 0.0 {
        return Err(CurveError::InvalidParameters {
            reason: format!("total_units must be finite and >= 0, got {total_units}"),
        });
    }
    method.validate()?;

    debug!(?method, total_units, duration_days, "computing daily targets");

    let rates = leading_rates(method, total_units, duration_days);
    let mut allocations = Vec::with_capacity(duration_days as usize);
    let mut allocated = 0.0;

    for (i, rate) in rates.into_iter().enumerate() {
        let day = i as u32 + 1;
        let target = round2(rate);
        allocated += target;
        allocations.push(DailyAllocation::new(day, date_for(start_date, day)?, target));
    }

    // The last day absorbs the remainder, whatever the method produced.
    let last_target = round2(total_units - allocated);
    allocations.push(DailyAllocation::new(
        duration_days,
        date_for(start_date, duration_days)?,
        last_target,
    ));

    Ok(allocations)
}

/// Returns the unrounded per-day rates for every day except the last.
fn leading_rates(method: ProductionMethod, total_units: f64, duration_days: u32) -> Vec<f64> {
    let leading = (duration_days - 1) as usize;
    match method {
        ProductionMethod::Constant { units_per_day } => {
            let mut remaining = total_units;
            let mut rates = Vec::with_capacity(leading);
            for _ in 0..leading {
                rates.push(units_per_day.min(remaining).max(0.0));
                remaining -= units_per_day;
            }
            rates
        }
        ProductionMethod::RampUp {
            start_units_per_day,
            end_units_per_day,
        }
        | ProductionMethod::RampDown {
            start_units_per_day,
            end_units_per_day,
        } => {
            if leading == 0 {
                return Vec::new();
            }
            let step =
                (end_units_per_day - start_units_per_day) / f64::from(duration_days - 1);
            (0..leading)
                .map(|i| start_units_per_day + step * i as f64)
                .collect()
        }
        ProductionMethod::SCurve { peak_units_per_day } => {
            let mut rates = PhasePlan::new(duration_days).rates(peak_units_per_day);
            rates.truncate(leading);
            rates
        }
    }
}

fn date_for(start_date: NaiveDate, day: u32) -> Result<NaiveDate, CurveError> {
    start_date
        .checked_add_days(Days::new(u64::from(day - 1)))
        .ok_or(CurveError::DateOutOfRange { day })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn round2_behavior() {
        assert!((round2(10.004) - 10.0).abs() < f64::EPSILON);
        assert!((round2(10.006) - 10.01).abs() < f64::EPSILON);
        assert!((round2(-0.004) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_duration_rejected() {
        let method = ProductionMethod::Constant { units_per_day: 10.0 };
        assert_eq!(
            compute(method, 100.0, 0, date(2024, 1, 1)).unwrap_err(),
            CurveError::InvalidDuration { days: 0 }
        );
    }

    #[test]
    fn negative_total_rejected() {
        let method = ProductionMethod::Constant { units_per_day: 10.0 };
        assert!(matches!(
            compute(method, -1.0, 5, date(2024, 1, 1)).unwrap_err(),
            CurveError::InvalidParameters { .. }
        ));
    }

    #[test]
    fn nan_total_rejected() {
        let method = ProductionMethod::Constant { units_per_day: 10.0 };
        assert!(compute(method, f64::NAN, 5, date(2024, 1, 1)).is_err());
    }

    #[test]
    fn nan_rate_rejected_before_computing() {
        let method = ProductionMethod::SCurve {
            peak_units_per_day: f64::NAN,
        };
        assert!(matches!(
            compute(method, 100.0, 5, date(2024, 1, 1)).unwrap_err(),
            CurveError::InvalidParameters { .. }
        ));
    }

    #[test]
    fn single_day_gets_full_total() {
        let method = ProductionMethod::RampUp {
            start_units_per_day: 10.0,
            end_units_per_day: 50.0,
        };
        let allocations = compute(method, 123.45, 1, date(2024, 1, 1)).unwrap();
        assert_eq!(allocations.len(), 1);
        assert_eq!(allocations[0].day(), 1);
        assert!((allocations[0].target_units() - 123.45).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_total_allocates_zeros() {
        let method = ProductionMethod::Constant { units_per_day: 10.0 };
        let allocations = compute(method, 0.0, 4, date(2024, 1, 1)).unwrap();
        for alloc in allocations {
            assert!((alloc.target_units() - 0.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn dates_cross_month_boundary() {
        let method = ProductionMethod::Constant { units_per_day: 10.0 };
        let allocations = compute(method, 30.0, 3, date(2024, 1, 31)).unwrap();
        assert_eq!(allocations[0].date(), date(2024, 1, 31));
        assert_eq!(allocations[1].date(), date(2024, 2, 1));
        assert_eq!(allocations[2].date(), date(2024, 2, 2));
    }

    #[test]
    fn leap_day_included() {
        let method = ProductionMethod::Constant { units_per_day: 10.0 };
        let allocations = compute(method, 20.0, 2, date(2024, 2, 28)).unwrap();
        assert_eq!(allocations[1].date(), date(2024, 2, 29));
    }
}
