//! S-curve phase planning and interpolation.

/// Fraction of the peak rate at the start of ramp-up and the end of ramp-down.
const SHOULDER_FRACTION: f64 = 0.3;
/// Share of the duration spent ramping up.
const RAMP_UP_SHARE: f64 = 0.3;
/// Share of the duration spent at the peak rate.
const STEADY_SHARE: f64 = 0.4;

/// The three-phase split of an s-curve duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PhasePlan {
    ramp_up_days: u32,
    steady_days: u32,
    ramp_down_days: u32,
}

impl PhasePlan {
    /// Splits `duration_days` into ramp-up, steady, and ramp-down phases.
    ///
    /// Ramp-up takes `ceil(0.3 d)` days and steady `ceil(0.4 d)`. For short
    /// durations the steady phase is truncated to the days left after
    /// ramp-up, and ramp-down takes whatever remains, so the three phases
    /// tile the duration exactly for any `duration_days >= 1`.
    pub(crate) fn new(duration_days: u32) -> Self {
        let d = f64::from(duration_days);
        let ramp_up_days = ((RAMP_UP_SHARE * d).ceil() as u32).min(duration_days);
        let steady_days = ((STEADY_SHARE * d).ceil() as u32).min(duration_days - ramp_up_days);
        let ramp_down_days = duration_days - ramp_up_days - steady_days;
        Self {
            ramp_up_days,
            steady_days,
            ramp_down_days,
        }
    }

    /// Returns the unrounded per-day rates for the full duration.
    ///
    /// Ramp-up interpolates from `0.3 * peak` to `peak`, steady holds
    /// `peak`, and ramp-down interpolates from `peak` back to `0.3 * peak`.
    /// Each phase's interpolation denominator is `phase_days - 1`, guarded
    /// to `1` when a phase has exactly one day.
    pub(crate) fn rates(self, peak: f64) -> Vec<f64> {
        let shoulder = SHOULDER_FRACTION * peak;
        let total = (self.ramp_up_days + self.steady_days + self.ramp_down_days) as usize;
        let mut rates = Vec::with_capacity(total);

        let denom = f64::from(self.ramp_up_days.saturating_sub(1).max(1));
        for i in 0..self.ramp_up_days {
            rates.push(shoulder + (peak - shoulder) * f64::from(i) / denom);
        }

        for _ in 0..self.steady_days {
            rates.push(peak);
        }

        let denom = f64::from(self.ramp_down_days.saturating_sub(1).max(1));
        for i in 0..self.ramp_down_days {
            rates.push(peak - (peak - shoulder) * f64::from(i) / denom);
        }

        rates
    }

    #[cfg(test)]
    pub(crate) fn lengths(self) -> (u32, u32, u32) {
        (self.ramp_up_days, self.steady_days, self.ramp_down_days)
    }
}
