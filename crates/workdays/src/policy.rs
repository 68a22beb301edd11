//! Working-day policies.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Which days of the week count as working days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkdayPolicy {
    /// Every calendar day counts.
    AllDays,
    /// Monday through Friday count; Saturday and Sunday do not.
    WeekdaysOnly,
    /// Monday through Friday always count; weekend days opt in individually.
    Custom {
        /// Whether Saturdays count as working days.
        include_saturday: bool,
        /// Whether Sundays count as working days.
        include_sunday: bool,
    },
}

impl WorkdayPolicy {
    /// Returns whether the given weekday qualifies under this policy.
    pub fn includes(self, weekday: Weekday) -> bool {
        match self {
            Self::AllDays => true,
            Self::WeekdaysOnly => !matches!(weekday, Weekday::Sat | Weekday::Sun),
            Self::Custom {
                include_saturday,
                include_sunday,
            } => match weekday {
                Weekday::Sat => include_saturday,
                Weekday::Sun => include_sunday,
                _ => true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday::*;

    const ALL_WEEKDAYS: [Weekday; 7] = [Mon, Tue, Wed, Thu, Fri, Sat, Sun];

    #[test]
    fn all_days_includes_everything() {
        for wd in ALL_WEEKDAYS {
            assert!(WorkdayPolicy::AllDays.includes(wd));
        }
    }

    #[test]
    fn weekdays_only_excludes_weekend() {
        let policy = WorkdayPolicy::WeekdaysOnly;
        assert!(policy.includes(Mon));
        assert!(policy.includes(Fri));
        assert!(!policy.includes(Sat));
        assert!(!policy.includes(Sun));
    }

    #[test]
    fn custom_weekends_opt_in_independently() {
        let saturdays = WorkdayPolicy::Custom {
            include_saturday: true,
            include_sunday: false,
        };
        assert!(saturdays.includes(Sat));
        assert!(!saturdays.includes(Sun));

        let sundays = WorkdayPolicy::Custom {
            include_saturday: false,
            include_sunday: true,
        };
        assert!(!sundays.includes(Sat));
        assert!(sundays.includes(Sun));
    }

    #[test]
    fn custom_always_includes_weekdays() {
        let policy = WorkdayPolicy::Custom {
            include_saturday: false,
            include_sunday: false,
        };
        for wd in [Mon, Tue, Wed, Thu, Fri] {
            assert!(policy.includes(wd));
        }
    }

    #[test]
    fn custom_with_both_matches_all_days() {
        let policy = WorkdayPolicy::Custom {
            include_saturday: true,
            include_sunday: true,
        };
        for wd in ALL_WEEKDAYS {
            assert_eq!(policy.includes(wd), WorkdayPolicy::AllDays.includes(wd));
        }
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<WorkdayPolicy>();
    }
}
