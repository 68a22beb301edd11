//! # helios-workdays
//!
//! Working-day counting over real calendar ranges.
//!
//! Given an inclusive date range and a [`WorkdayPolicy`], this crate counts
//! or lists the days that qualify as working days. The contract is lenient:
//! a reversed range yields `0` (or an empty list) rather than an error.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use helios_workdays::{WorkdayPolicy, count_working_days};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(); // Monday
//! let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(); // Sunday
//! assert_eq!(count_working_days(start, end, WorkdayPolicy::WeekdaysOnly), 5);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `policy` | Weekday qualification policies |
//! | `count` | Range walking, counting, and listing |

mod count;
mod policy;

pub use count::{count_working_days, is_working_day, working_days};
pub use policy::WorkdayPolicy;
