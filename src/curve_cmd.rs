//! Curve command: compute a day-by-day production target table.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use tracing::{info, info_span};

use helios_curve::{ProductionMethod, compute};

use crate::cli::{CurveArgs, MethodName};
use crate::config::HeliosConfig;

/// Run the curve computation pipeline.
pub fn run(args: CurveArgs) -> Result<()> {
    let _cmd = info_span!("curve").entered();

    let config = HeliosConfig::load(args.config.as_deref())?;

    let start = NaiveDate::parse_from_str(&args.start, "%Y-%m-%d")
        .with_context(|| format!("invalid start date: {} (expected YYYY-MM-DD)", args.start))?;

    let method = build_method(&args, &config)?;

    info!(?method, total = args.total, days = args.days, "computing curve");
    let allocations = compute(method, args.total, args.days, start)?;

    let json =
        serde_json::to_string_pretty(&allocations).context("failed to serialize allocations")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "allocation table written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Builds the production method from CLI flags, falling back to config
/// defaults for any rate the flags leave unset.
fn build_method(args: &CurveArgs, config: &HeliosConfig) -> Result<ProductionMethod> {
    let defaults = &config.curve;
    match args.method {
        MethodName::Constant => {
            let units_per_day = args
                .units_per_day
                .or(defaults.units_per_day)
                .ok_or_else(|| anyhow!("constant method requires --units-per-day"))?;
            Ok(ProductionMethod::Constant { units_per_day })
        }
        MethodName::RampUp => {
            let (start, end) = ramp_rates(args, config)?;
            Ok(ProductionMethod::RampUp {
                start_units_per_day: start,
                end_units_per_day: end,
            })
        }
        MethodName::RampDown => {
            let (start, end) = ramp_rates(args, config)?;
            Ok(ProductionMethod::RampDown {
                start_units_per_day: start,
                end_units_per_day: end,
            })
        }
        MethodName::SCurve => {
            let peak_units_per_day = args
                .peak_rate
                .or(defaults.peak_rate)
                .ok_or_else(|| anyhow!("s-curve method requires --peak-rate"))?;
            Ok(ProductionMethod::SCurve { peak_units_per_day })
        }
    }
}

fn ramp_rates(args: &CurveArgs, config: &HeliosConfig) -> Result<(f64, f64)> {
    let start = args
        .start_rate
        .or(config.curve.start_rate)
        .ok_or_else(|| anyhow!("ramp methods require --start-rate"))?;
    let end = args
        .end_rate
        .or(config.curve.end_rate)
        .ok_or_else(|| anyhow!("ramp methods require --end-rate"))?;
    Ok((start, end))
}
