//! # helios-curve
//!
//! Closed-form daily production-target curves.
//!
//! Given a total unit count, a duration in days, a start date, and a
//! distribution method, [`compute`] produces an ordered sequence of per-day
//! target allocations that sums exactly to the total: every intermediate day
//! is rounded to 2 decimals, and the final day absorbs the remainder.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use helios_curve::{compute, ProductionMethod};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let method = ProductionMethod::Constant { units_per_day: 100.0 };
//! let allocations = compute(method, 250.0, 3, start).unwrap();
//! // Targets: [100.0, 100.0, 50.0] — the last day absorbs the remainder.
//! assert_eq!(allocations.len(), 3);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `method` | Distribution method variants and rate validation |
//! | `allocation` | Per-day allocation value type |
//! | `compute` | The allocation algorithm |
//! | `scurve` | S-curve phase planning |
//! | `error` | Error types |

mod allocation;
mod compute;
mod error;
mod method;
mod scurve;

pub use allocation::DailyAllocation;
pub use compute::compute;
pub use error::CurveError;
pub use method::ProductionMethod;
