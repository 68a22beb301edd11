use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Helios production target planner.
#[derive(Parser)]
#[command(
    name = "helios",
    version,
    about = "Production target curves and working-day calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute a day-by-day production target curve.
    Curve(CurveArgs),
    /// Count working days in an inclusive date range.
    Workdays(WorkdaysArgs),
}

/// Distribution method selector for the `curve` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodName {
    /// Flat rate every day.
    Constant,
    /// Linear increase from a start rate to an end rate.
    RampUp,
    /// Linear decrease from a start rate to an end rate.
    RampDown,
    /// Ramp up to a peak, hold, ramp back down.
    SCurve,
}

/// Working-day policy selector for the `workdays` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyName {
    /// Every calendar day counts.
    AllDays,
    /// Monday through Friday only.
    WeekdaysOnly,
    /// Weekdays plus explicitly included weekend days.
    Custom,
}

/// Arguments for the `curve` subcommand.
#[derive(clap::Args)]
pub struct CurveArgs {
    /// Path to TOML configuration file with default rates.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Distribution method.
    #[arg(short, long)]
    pub method: MethodName,

    /// Total units to allocate across the duration.
    #[arg(short, long)]
    pub total: f64,

    /// Duration in days.
    #[arg(short, long)]
    pub days: u32,

    /// Start date (YYYY-MM-DD).
    #[arg(short, long)]
    pub start: String,

    /// Units per day (constant method).
    #[arg(long)]
    pub units_per_day: Option<f64>,

    /// Rate on the first day (ramp methods).
    #[arg(long)]
    pub start_rate: Option<f64>,

    /// Rate on the last day (ramp methods).
    #[arg(long)]
    pub end_rate: Option<f64>,

    /// Peak rate (s-curve method).
    #[arg(long)]
    pub peak_rate: Option<f64>,

    /// Write the allocation JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `workdays` subcommand.
#[derive(clap::Args)]
pub struct WorkdaysArgs {
    /// Path to TOML configuration file with weekend defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start date (YYYY-MM-DD).
    #[arg(short, long)]
    pub start: String,

    /// End date (YYYY-MM-DD), inclusive.
    #[arg(short, long)]
    pub end: String,

    /// Working-day policy.
    #[arg(short, long, default_value = "weekdays-only")]
    pub policy: PolicyName,

    /// Count Saturdays as working days (custom policy).
    #[arg(long)]
    pub include_saturday: bool,

    /// Count Sundays as working days (custom policy).
    #[arg(long)]
    pub include_sunday: bool,
}
