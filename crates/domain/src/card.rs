//! Program card: everything a dashboard shows for one program.
//!
//! Cards are derived from controller data once per load. Run-state styling
//! is not part of the card; it changes on every poll and comes from
//! [`RunState::activity_for`](crate::run_state::RunState::activity_for).

use crate::id::{ProgramId, ZoneId};
use crate::month::Month;
use crate::program::{Program, ProgramBook};
use crate::time::Day;
use crate::zone::ZoneDirectory;

/// Data shared by every card in one render.
#[derive(Debug, Clone, Copy)]
pub struct CardContext<'a> {
    pub zones: &'a ZoneDirectory,
    pub book: &'a ProgramBook,
    pub today: Day,
}

/// One entry of the twelve-month activity grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCell {
    pub month: Month,
    pub active: bool,
}

impl MonthCell {
    #[must_use]
    pub fn class(self) -> &'static str {
        if self.active { "month active" } else { "month inactive" }
    }
}

/// Twelve cells in calendar order, each active iff `program` lists the month.
#[must_use]
pub fn month_grid(program: &Program) -> [MonthCell; 12] {
    let active = program.active_months();
    Month::ALL.map(|month| MonthCell {
        month,
        active: active.contains(&month),
    })
}

/// One step rendered as a zone/duration tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTag {
    pub zone_id: ZoneId,
    pub zone_name: String,
    pub minutes: u32,
}

impl StepTag {
    #[must_use]
    pub fn duration_text(&self) -> String {
        format!("{} min", self.minutes)
    }
}

/// Display model for a single program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramCard {
    pub id: ProgramId,
    pub name: String,
    pub activation_time: String,
    pub recurrence_text: String,
    pub months: [MonthCell; 12],
    pub steps: Vec<StepTag>,
    pub total_minutes: u32,
    pub automatic_enabled: bool,
    pub last_run_text: String,
    pub in_season: bool,
    pub due_today: bool,
    /// Name of another program starting at the same time in a shared month.
    pub conflict_with: Option<String>,
}

impl ProgramCard {
    #[must_use]
    pub fn build(program: &Program, ctx: &CardContext<'_>) -> Self {
        let steps: Vec<StepTag> = program
            .runnable_steps()
            .map(|(zone_id, minutes)| StepTag {
                zone_id,
                zone_name: ctx.zones.name_of(zone_id),
                minutes,
            })
            .collect();

        let last_run_text = match program.last_run_date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => date.to_string(),
            _ => "never".to_string(),
        };

        Self {
            id: program.id.clone(),
            name: display_name(program),
            activation_time: program.activation_time.trim().to_string(),
            recurrence_text: program.recurrence().text(),
            months: month_grid(program),
            total_minutes: program.total_minutes(),
            steps,
            automatic_enabled: program.automatic_enabled,
            last_run_text,
            in_season: program.is_in_season(ctx.today),
            due_today: program.is_due_on(ctx.today),
            conflict_with: ctx
                .book
                .conflict_for(program)
                .map(display_name),
        }
    }

    /// Build a card for every program in `ctx.book`, in book order.
    #[must_use]
    pub fn build_all(ctx: &CardContext<'_>) -> Vec<Self> {
        ctx.book
            .iter()
            .map(|program| Self::build(program, ctx))
            .collect()
    }

    /// One-line schedule summary, e.g. `"06:30 · 3 steps · 45 min"`.
    #[must_use]
    pub fn schedule_summary(&self) -> String {
        let start = if self.activation_time.is_empty() {
            "no start time"
        } else {
            self.activation_time.as_str()
        };
        let steps = match self.steps.len() {
            1 => "1 step".to_string(),
            n => format!("{n} steps"),
        };
        format!("{start} · {steps} · {} min", self.total_minutes)
    }

    /// Whether the controller would start this program automatically today,
    /// given the global automation switch.
    #[must_use]
    pub fn scheduled_today(&self, automation_enabled: bool) -> bool {
        self.scheduled_today_with(automation_enabled, self.automatic_enabled)
    }

    /// [`Self::scheduled_today`] with the program's own switch supplied by
    /// the caller, for views that flip it before the next load.
    #[must_use]
    pub fn scheduled_today_with(&self, automation_enabled: bool, program_enabled: bool) -> bool {
        automation_enabled
            && program_enabled
            && self.in_season
            && self.due_today
            && !self.activation_time.is_empty()
    }
}

fn display_name(program: &Program) -> String {
    let name = program.name.trim();
    if name.is_empty() {
        format!("Program {}", program.id)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::{RecurrenceKind, Step};
    use crate::zone::Zone;
    use chrono::NaiveDate;

    fn zones() -> ZoneDirectory {
        ZoneDirectory::from_zones(&[
            Zone::new(ZoneId::new(0), "Giardino"),
            Zone::new(ZoneId::new(1), "Terrazzo"),
        ])
    }

    fn june_first() -> Day {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn card_for(program: &Program) -> ProgramCard {
        let zones = zones();
        let book = ProgramBook::new(vec![program.clone()]);
        let ctx = CardContext {
            zones: &zones,
            book: &book,
            today: june_first(),
        };
        ProgramCard::build(program, &ctx)
    }

    #[test]
    fn should_render_exactly_twelve_months_marking_listed_ones() {
        let program = Program::builder()
            .month(Month::June)
            .month(Month::July)
            .build();
        let grid = month_grid(&program);
        assert_eq!(grid.len(), 12);
        let active: Vec<Month> = grid.iter().filter(|c| c.active).map(|c| c.month).collect();
        assert_eq!(active, [Month::June, Month::July]);
        assert_eq!(grid[0].month, Month::January);
        assert_eq!(grid[11].month, Month::December);
    }

    #[test]
    fn should_render_all_months_inactive_for_empty_list() {
        let grid = month_grid(&Program::builder().build());
        assert!(grid.iter().all(|cell| !cell.active));
        assert_eq!(grid[3].class(), "month inactive");
    }

    #[test]
    fn should_ignore_unknown_month_names_in_grid() {
        let mut program = Program::builder().month(Month::May).build();
        program.months.push("Smarch".to_string());
        let active = month_grid(&program).iter().filter(|c| c.active).count();
        assert_eq!(active, 1);
    }

    #[test]
    fn should_tag_steps_with_zone_names_and_minutes() {
        let program = Program::builder()
            .step(Step::new(ZoneId::new(1), 10))
            .step(Step::new(ZoneId::new(5), 3))
            .build();
        let card = card_for(&program);
        assert_eq!(card.steps[0].zone_name, "Terrazzo");
        assert_eq!(card.steps[0].duration_text(), "10 min");
        assert_eq!(card.steps[1].zone_name, "Zone 6");
        assert_eq!(card.total_minutes, 13);
    }

    #[test]
    fn should_leave_out_steps_without_zone() {
        let mut program = Program::builder()
            .step(Step::new(ZoneId::new(1), 10))
            .build();
        program.steps.push(Step {
            zone_id: None,
            duration: 7,
        });
        let card = card_for(&program);
        assert_eq!(card.steps.len(), 1);
        assert_eq!(card.total_minutes, 10);
        assert_eq!(card.schedule_summary(), "no start time · 1 step · 10 min");
    }

    #[test]
    fn should_fill_recurrence_and_last_run_text() {
        let program = Program::builder()
            .recurrence(RecurrenceKind::Custom)
            .interval_days(4)
            .build();
        let card = card_for(&program);
        assert_eq!(card.recurrence_text, "every 4 days");
        assert_eq!(card.last_run_text, "never");
    }

    #[test]
    fn should_reflect_program_automation_flag() {
        let program = Program::builder().automatic_enabled(false).build();
        assert!(!card_for(&program).automatic_enabled);
    }

    #[test]
    fn should_summarise_schedule() {
        let program = Program::builder()
            .activation_time("06:30")
            .step(Step::new(ZoneId::new(0), 20))
            .build();
        assert_eq!(card_for(&program).schedule_summary(), "06:30 · 1 step · 20 min");

        let unscheduled = Program::builder().build();
        assert_eq!(
            card_for(&unscheduled).schedule_summary(),
            "no start time · 0 steps · 0 min"
        );
    }

    #[test]
    fn should_fall_back_to_id_for_unnamed_program() {
        let program = Program::builder().id("4").name("  ").build();
        assert_eq!(card_for(&program).name, "Program 4");
    }

    #[test]
    fn should_report_scheduled_today_only_when_every_condition_holds() {
        let program = Program::builder()
            .activation_time("06:00")
            .month(Month::June)
            .build();
        let card = card_for(&program);
        assert!(card.in_season);
        assert!(card.due_today);
        assert!(card.scheduled_today(true));
        assert!(!card.scheduled_today(false));

        let ran_today = Program::builder()
            .activation_time("06:00")
            .month(Month::June)
            .last_run_date("2024-06-01")
            .build();
        assert!(!card_for(&ran_today).scheduled_today(true));
    }

    #[test]
    fn should_follow_supplied_program_switch_over_loaded_flag() {
        let program = Program::builder()
            .activation_time("06:00")
            .month(Month::June)
            .automatic_enabled(false)
            .build();
        let card = card_for(&program);
        assert!(!card.scheduled_today(true));
        assert!(card.scheduled_today_with(true, true));
        assert!(!card.scheduled_today_with(false, true));
    }

    #[test]
    fn should_name_conflicting_program() {
        let zones = zones();
        let a = Program::builder()
            .id("1")
            .name("Morning")
            .activation_time("06:00")
            .month(Month::June)
            .build();
        let b = Program::builder()
            .id("2")
            .name("Also morning")
            .activation_time("06:00")
            .month(Month::June)
            .build();
        let book = ProgramBook::new(vec![a, b]);
        let ctx = CardContext {
            zones: &zones,
            book: &book,
            today: june_first(),
        };
        let cards = ProgramCard::build_all(&ctx);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].conflict_with.as_deref(), Some("Also morning"));
        assert_eq!(cards[1].conflict_with.as_deref(), Some("Morning"));
    }
}
