//! Program: a scheduled irrigation run definition.
//!
//! A program waters its [`Step`]s in order, starting at its activation time,
//! on days allowed by its [`Recurrence`], in the months it lists. The
//! controller owns programs; the dashboard only reads them and derives
//! display data.

mod book;
mod recurrence;
mod step;

pub use book::ProgramBook;
pub use recurrence::{Recurrence, RecurrenceKind};
pub use step::Step;

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{ProgramId, ZoneId};
use crate::month::Month;
use crate::time::{self, Day};
use crate::wire::null_as_default;

/// A program as stored in the controller's `program.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Backfilled from the map key by [`ProgramBook`] when absent.
    #[serde(default)]
    pub id: ProgramId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// `HH:MM`, empty when the program has no start time.
    #[serde(default, deserialize_with = "null_as_default")]
    pub activation_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recurrence: RecurrenceKind,
    #[serde(default = "default_interval_days")]
    pub interval_days: i64,
    /// `YYYY-MM-DD` of the last completed run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run_date: Option<String>,
    /// Month names, as written by the controller.
    #[serde(default, deserialize_with = "null_as_default")]
    pub months: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<Step>,
    #[serde(default = "default_automatic_enabled")]
    pub automatic_enabled: bool,
}

fn default_interval_days() -> i64 {
    1
}

fn default_automatic_enabled() -> bool {
    true
}

impl Program {
    /// Create a builder for constructing a [`Program`].
    #[must_use]
    pub fn builder() -> ProgramBuilder {
        ProgramBuilder::default()
    }

    #[must_use]
    pub fn recurrence(&self) -> Recurrence {
        Recurrence::resolve(self.recurrence, self.interval_days)
    }

    /// Months whose names the controller listed and this crate recognises.
    #[must_use]
    pub fn active_months(&self) -> BTreeSet<Month> {
        self.months
            .iter()
            .filter_map(|name| Month::from_name(name))
            .collect()
    }

    #[must_use]
    pub fn is_active_in(&self, month: Month) -> bool {
        self.months
            .iter()
            .any(|name| Month::from_name(name) == Some(month))
    }

    /// Parsed activation time, `None` when the program has none.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ActivationTime`] for a malformed value.
    pub fn activation(&self) -> Result<Option<NaiveTime>, ValidationError> {
        if self.activation_time.trim().is_empty() {
            return Ok(None);
        }
        time::parse_activation_time(&self.activation_time).map(Some)
    }

    /// Parsed last run date, `None` when the program never ran.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RunDate`] for a malformed value.
    pub fn last_run(&self) -> Result<Option<Day>, ValidationError> {
        self.last_run_date
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(time::parse_run_date)
            .transpose()
    }

    /// Whether the recurrence allows a run on `today`.
    ///
    /// An unreadable last run date counts as never run, as the controller does.
    #[must_use]
    pub fn is_due_on(&self, today: Day) -> bool {
        let last_run = self.last_run().ok().flatten();
        self.recurrence().is_due(last_run, today)
    }

    /// Whether `today` falls in one of the program's months.
    #[must_use]
    pub fn is_in_season(&self, today: Day) -> bool {
        Month::from_number(today.month()).is_some_and(|month| self.is_active_in(month))
    }

    /// Steps the controller will actually run: those naming a zone.
    pub fn runnable_steps(&self) -> impl Iterator<Item = (ZoneId, u32)> + '_ {
        self.steps
            .iter()
            .filter_map(|step| step.zone_id.map(|zone| (zone, step.duration)))
    }

    /// Total watering minutes across the runnable steps.
    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.runnable_steps().map(|(_, minutes)| minutes).sum()
    }

    /// Two programs conflict when they share an activation time and at
    /// least one month; the controller would start both at once.
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        let time = self.activation_time.trim();
        if time.is_empty() || time != other.activation_time.trim() {
            return false;
        }
        let ours = self.active_months();
        other
            .active_months()
            .iter()
            .any(|month| ours.contains(month))
    }
}

/// Step-by-step builder for [`Program`].
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    id: Option<ProgramId>,
    name: Option<String>,
    activation_time: Option<String>,
    recurrence: RecurrenceKind,
    interval_days: Option<i64>,
    last_run_date: Option<String>,
    months: Vec<String>,
    steps: Vec<Step>,
    automatic_enabled: Option<bool>,
}

impl ProgramBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<ProgramId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn activation_time(mut self, time: impl Into<String>) -> Self {
        self.activation_time = Some(time.into());
        self
    }

    #[must_use]
    pub fn recurrence(mut self, kind: RecurrenceKind) -> Self {
        self.recurrence = kind;
        self
    }

    #[must_use]
    pub fn interval_days(mut self, days: i64) -> Self {
        self.interval_days = Some(days);
        self
    }

    #[must_use]
    pub fn last_run_date(mut self, date: impl Into<String>) -> Self {
        self.last_run_date = Some(date.into());
        self
    }

    #[must_use]
    pub fn month(mut self, month: Month) -> Self {
        self.months.push(month.wire_name().to_string());
        self
    }

    #[must_use]
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    #[must_use]
    pub fn automatic_enabled(mut self, enabled: bool) -> Self {
        self.automatic_enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn build(self) -> Program {
        Program {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            activation_time: self.activation_time.unwrap_or_default(),
            recurrence: self.recurrence,
            interval_days: self.interval_days.unwrap_or_else(default_interval_days),
            last_run_date: self.last_run_date,
            months: self.months,
            steps: self.steps,
            automatic_enabled: self.automatic_enabled.unwrap_or(true),
        }
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
    fn should_default_missing_fields_from_controller_json() {
        let program: Program = serde_json::from_str(r#"{"name": "Orto"}"#).unwrap();
        assert!(program.id.is_empty());
        assert_eq!(program.recurrence, RecurrenceKind::Daily);
        assert_eq!(program.interval_days, 1);
        assert!(program.automatic_enabled);
        assert!(program.steps.is_empty());
        assert!(program.last_run_date.is_none());
    }

    #[test]
    fn should_keep_automatic_flag_when_present() {
        let program: Program =
            serde_json::from_str(r#"{"name": "Orto", "automatic_enabled": false}"#).unwrap();
        assert!(!program.automatic_enabled);
    }

    #[test]
    fn should_parse_full_controller_program() {
        let json = r#"{
            "id": "1",
            "name": "Giardino mattina",
            "activation_time": "06:00",
            "recurrence": "personalizzata",
            "interval_days": 3,
            "last_run_date": "2024-06-01",
            "months": ["Maggio", "Giugno"],
            "steps": [{"zone_id": 0, "duration": 10}, {"zone_id": 2, "duration": 5}]
        }"#;
        let program: Program = serde_json::from_str(json).unwrap();
        assert_eq!(program.recurrence(), Recurrence::EveryDays(3));
        assert_eq!(program.total_minutes(), 15);
        assert_eq!(program.steps[1].zone_id, Some(ZoneId::new(2)));
        assert_eq!(
            program.active_months().into_iter().collect::<Vec<_>>(),
            [Month::May, Month::June]
        );
        assert_eq!(program.last_run().unwrap(), Some(day(2024, 6, 1)));
    }

    #[test]
    fn should_read_null_fields_as_empty() {
        let json = r#"{
            "name": null,
            "activation_time": null,
            "recurrence": null,
            "months": null,
            "steps": null
        }"#;
        let program: Program = serde_json::from_str(json).unwrap();
        assert_eq!(program.name, "");
        assert_eq!(program.activation().unwrap(), None);
        assert_eq!(program.recurrence, RecurrenceKind::Daily);
        assert!(program.months.is_empty());
        assert!(program.steps.is_empty());
    }

    #[test]
    fn should_skip_steps_without_zone_in_totals() {
        let json = r#"{
            "name": "Orto",
            "steps": [{"duration": 5}, {"zone_id": 1, "duration": 12}]
        }"#;
        let program: Program = serde_json::from_str(json).unwrap();
        assert_eq!(program.steps.len(), 2);
        assert_eq!(program.total_minutes(), 12);
        assert_eq!(
            program.runnable_steps().collect::<Vec<_>>(),
            [(ZoneId::new(1), 12)]
        );
    }

    #[test]
    fn should_treat_blank_activation_time_as_none() {
        let program = Program::builder().name("p").build();
        assert_eq!(program.activation().unwrap(), None);
    }

    #[test]
    fn should_report_malformed_last_run_date() {
        let program = Program::builder().last_run_date("yesterday").build();
        assert!(program.last_run().is_err());
    }

    #[test]
    fn should_be_due_when_last_run_date_is_unreadable() {
        let program = Program::builder().last_run_date("yesterday").build();
        assert!(program.is_due_on(day(2024, 6, 1)));
    }

    #[test]
    fn should_be_in_season_only_for_listed_months() {
        let program = Program::builder().month(Month::July).build();
        assert!(program.is_in_season(day(2024, 7, 15)));
        assert!(!program.is_in_season(day(2024, 8, 15)));
    }

    #[test]
    fn should_conflict_when_time_and_a_month_overlap() {
        let a = Program::builder()
            .activation_time("06:00")
            .month(Month::May)
            .month(Month::June)
            .build();
        let b = Program::builder()
            .activation_time("06:00")
            .month(Month::June)
            .build();
        assert!(a.conflicts_with(&b));
    }

    #[test]
    fn should_not_conflict_when_months_are_disjoint_or_time_differs() {
        let a = Program::builder()
            .activation_time("06:00")
            .month(Month::May)
            .build();
        let other_month = Program::builder()
            .activation_time("06:00")
            .month(Month::June)
            .build();
        let other_time = Program::builder()
            .activation_time("07:00")
            .month(Month::May)
            .build();
        assert!(!a.conflicts_with(&other_month));
        assert!(!a.conflicts_with(&other_time));
    }

    #[test]
    fn should_not_conflict_without_activation_time() {
        let a = Program::builder().month(Month::May).build();
        let b = Program::builder().month(Month::May).build();
        assert!(!a.conflicts_with(&b));
    }
}
