//! Recurrence: how often a program runs once it is in season.

use serde::{Deserialize, Serialize};

use crate::time::Day;

/// Recurrence kind as stored by the controller.
///
/// The controller writes Italian tags; English aliases are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecurrenceKind {
    #[default]
    #[serde(rename = "giornaliero", alias = "daily")]
    Daily,
    #[serde(rename = "giorni_alterni", alias = "alternate_days", alias = "alternate")]
    AlternateDays,
    #[serde(rename = "personalizzata", alias = "custom")]
    Custom,
}

/// A resolved recurrence, with the custom interval folded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    Daily,
    AlternateDays,
    /// Every `n` days, `n >= 1`.
    EveryDays(u32),
}

impl Recurrence {
    /// Combine the wire kind with the raw `interval_days` value.
    ///
    /// Intervals below one are treated as one.
    #[must_use]
    pub fn resolve(kind: RecurrenceKind, interval_days: i64) -> Self {
        match kind {
            RecurrenceKind::Daily => Self::Daily,
            RecurrenceKind::AlternateDays => Self::AlternateDays,
            RecurrenceKind::Custom => {
                let days = u32::try_from(interval_days.max(1)).unwrap_or(u32::MAX);
                Self::EveryDays(days)
            }
        }
    }

    /// Minimum number of days between two runs.
    #[must_use]
    pub fn min_gap_days(self) -> u32 {
        match self {
            Self::Daily => 1,
            Self::AlternateDays => 2,
            Self::EveryDays(days) => days,
        }
    }

    /// Whether a program last run on `last_run` is due on `today`.
    ///
    /// A program that never ran is always due.
    #[must_use]
    pub fn is_due(self, last_run: Option<Day>, today: Day) -> bool {
        let Some(last_run) = last_run else {
            return true;
        };
        let elapsed = (today - last_run).num_days();
        elapsed >= i64::from(self.min_gap_days())
    }

    /// Human-readable recurrence text for a program card.
    #[must_use]
    pub fn text(self) -> String {
        match self {
            Self::Daily => "every day".to_string(),
            Self::AlternateDays => "alternate days".to_string(),
            Self::EveryDays(1) => "every 1 day".to_string(),
            Self::EveryDays(days) => format!("every {days} days"),
        }
    }
}

impl std::fmt::Display for Recurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> Day {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn should_format_daily() {
        assert_eq!(Recurrence::Daily.text(), "every day");
    }

    #[test]
    fn should_format_alternate_days() {
        assert_eq!(Recurrence::AlternateDays.text(), "alternate days");
    }

    #[test]
    fn should_use_singular_noun_for_one_day_interval() {
        assert_eq!(Recurrence::EveryDays(1).text(), "every 1 day");
    }

    #[test]
    fn should_use_plural_noun_for_longer_interval() {
        assert_eq!(Recurrence::EveryDays(3).text(), "every 3 days");
    }

    #[test]
    fn should_clamp_non_positive_custom_interval_to_one() {
        assert_eq!(
            Recurrence::resolve(RecurrenceKind::Custom, 0),
            Recurrence::EveryDays(1)
        );
        assert_eq!(
            Recurrence::resolve(RecurrenceKind::Custom, -4),
            Recurrence::EveryDays(1)
        );
    }

    #[test]
    fn should_ignore_interval_for_fixed_kinds() {
        assert_eq!(
            Recurrence::resolve(RecurrenceKind::AlternateDays, 9),
            Recurrence::AlternateDays
        );
    }

    #[test]
    fn should_parse_controller_and_english_tags() {
        let kind: RecurrenceKind = serde_json::from_str("\"giorni_alterni\"").unwrap();
        assert_eq!(kind, RecurrenceKind::AlternateDays);
        let kind: RecurrenceKind = serde_json::from_str("\"custom\"").unwrap();
        assert_eq!(kind, RecurrenceKind::Custom);
    }

    #[test]
    fn should_reject_unknown_tag() {
        assert!(serde_json::from_str::<RecurrenceKind>("\"weekly\"").is_err());
    }

    #[test]
    fn should_be_due_when_never_run() {
        assert!(Recurrence::AlternateDays.is_due(None, day(2024, 6, 1)));
    }

    #[test]
    fn should_not_be_due_daily_when_already_run_today() {
        let today = day(2024, 6, 1);
        assert!(!Recurrence::Daily.is_due(Some(today), today));
        assert!(Recurrence::Daily.is_due(Some(day(2024, 5, 31)), today));
    }

    #[test]
    fn should_wait_two_days_for_alternate_recurrence() {
        let today = day(2024, 6, 3);
        assert!(!Recurrence::AlternateDays.is_due(Some(day(2024, 6, 2)), today));
        assert!(Recurrence::AlternateDays.is_due(Some(day(2024, 6, 1)), today));
    }

    #[test]
    fn should_count_days_across_year_boundary() {
        let today = day(2025, 1, 2);
        assert!(Recurrence::EveryDays(3).is_due(Some(day(2024, 12, 30)), today));
        assert!(!Recurrence::EveryDays(4).is_due(Some(day(2024, 12, 30)), today));
    }
}
