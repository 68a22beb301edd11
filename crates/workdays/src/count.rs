//! Working-day counting over inclusive date ranges.

use chrono::{Datelike, NaiveDate};

use crate::policy::WorkdayPolicy;

/// Returns whether a single date is a working day under `policy`.
pub fn is_working_day(date: NaiveDate, policy: WorkdayPolicy) -> bool {
    policy.includes(date.weekday())
}

/// Counts the working days in the inclusive range `[start, end]`.
///
/// Walks each calendar day from `start` to `end` and counts those that
/// qualify under `policy`. A reversed range (`end < start`) returns `0` —
/// this is a lenient contract, not an error, so callers that need to
/// distinguish "no valid range" from "zero working days" must validate the
/// range themselves.
///
/// Complexity is O(days in range); intended for project-scale ranges, weeks
/// to a few years.
pub fn count_working_days(start: NaiveDate, end: NaiveDate, policy: WorkdayPolicy) -> u64 {
    let mut count = 0;
    let mut current = start;
    while current <= end {
        if is_working_day(current, policy) {
            count += 1;
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    count
}

/// Lists the working days in the inclusive range `[start, end]`.
///
/// Same walk and leniency as [`count_working_days`]; the two agree by
/// construction (`working_days(..).len() == count_working_days(..)`).
pub fn working_days(start: NaiveDate, end: NaiveDate, policy: WorkdayPolicy) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        if is_working_day(current, policy) {
            dates.push(current);
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_weekday() {
        // Wednesday.
        let wed = date(2024, 1, 3);
        assert_eq!(count_working_days(wed, wed, WorkdayPolicy::WeekdaysOnly), 1);
    }

    #[test]
    fn single_weekend_day() {
        // Saturday.
        let sat = date(2024, 1, 6);
        assert_eq!(count_working_days(sat, sat, WorkdayPolicy::WeekdaysOnly), 0);
        assert_eq!(count_working_days(sat, sat, WorkdayPolicy::AllDays), 1);
    }

    #[test]
    fn reversed_range_is_zero() {
        assert_eq!(
            count_working_days(date(2024, 1, 7), date(2024, 1, 1), WorkdayPolicy::AllDays),
            0
        );
        assert!(working_days(date(2024, 1, 7), date(2024, 1, 1), WorkdayPolicy::AllDays)
            .is_empty());
    }

    #[test]
    fn is_working_day_matches_policy() {
        let sun = date(2024, 1, 7);
        assert!(!is_working_day(sun, WorkdayPolicy::WeekdaysOnly));
        assert!(is_working_day(
            sun,
            WorkdayPolicy::Custom {
                include_saturday: false,
                include_sunday: true,
            }
        ));
    }

    #[test]
    fn listing_agrees_with_count() {
        let start = date(2024, 1, 1);
        let end = date(2024, 3, 31);
        for policy in [
            WorkdayPolicy::AllDays,
            WorkdayPolicy::WeekdaysOnly,
            WorkdayPolicy::Custom {
                include_saturday: true,
                include_sunday: false,
            },
        ] {
            let listed = working_days(start, end, policy);
            assert_eq!(listed.len() as u64, count_working_days(start, end, policy));
        }
    }
}
