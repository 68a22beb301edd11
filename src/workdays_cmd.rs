//! Workdays command: count working days in an inclusive date range.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span, warn};

use helios_workdays::{WorkdayPolicy, count_working_days};

use crate::cli::{PolicyName, WorkdaysArgs};
use crate::config::HeliosConfig;

/// Run the working-day count.
pub fn run(args: WorkdaysArgs) -> Result<()> {
    let _cmd = info_span!("workdays").entered();

    let config = HeliosConfig::load(args.config.as_deref())?;

    let start = parse_date("start", &args.start)?;
    let end = parse_date("end", &args.end)?;
    if end < start {
        // The library contract returns 0 for reversed ranges; surface the
        // likely operator mistake instead of silently printing 0.
        warn!(%start, %end, "end date precedes start date");
    }

    let policy = build_policy(&args, &config);

    let count = count_working_days(start, end, policy);
    info!(%start, %end, ?policy, count, "working days counted");
    println!("{count}");

    Ok(())
}

fn parse_date(name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("invalid {name} date: {value} (expected YYYY-MM-DD)"))
}

/// Builds the policy from CLI flags; config supplies weekend defaults for
/// the custom policy when the flags are absent.
fn build_policy(args: &WorkdaysArgs, config: &HeliosConfig) -> WorkdayPolicy {
    match args.policy {
        PolicyName::AllDays => WorkdayPolicy::AllDays,
        PolicyName::WeekdaysOnly => WorkdayPolicy::WeekdaysOnly,
        PolicyName::Custom => WorkdayPolicy::Custom {
            include_saturday: args.include_saturday || config.workdays.include_saturday,
            include_sunday: args.include_sunday || config.workdays.include_sunday,
        },
    }
}
