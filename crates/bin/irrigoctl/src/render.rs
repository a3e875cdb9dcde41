//! Plain-text rendering of dashboard data.

use std::fmt::Write;

use irrigo_app::services::loader::DashboardData;
use irrigo_domain::card::{MonthCell, ProgramCard};
use irrigo_domain::program::ProgramBook;
use irrigo_domain::run_state::{CardActivity, RunState};
use irrigo_domain::settings::UserSettings;
use irrigo_domain::time::Day;

/// The whole dashboard: global switch, then one block per program.
#[must_use]
pub fn status(data: &DashboardData, today: Day) -> String {
    let automation = data.settings.automatic_programs_enabled;
    let mut out = format!(
        "Automatic programs: {}\n{}\n",
        on_off(automation),
        run_state(&data.run_state, &data.programs)
    );
    let cards = data.cards(today);
    if cards.is_empty() {
        out.push_str("\nNo programs configured.\n");
    }
    for card in &cards {
        out.push('\n');
        out.push_str(&card_block(
            card,
            data.run_state.activity_for(&card.id),
            automation,
        ));
    }
    out
}

/// One program card as a few indented lines.
#[must_use]
pub fn card_block(card: &ProgramCard, activity: CardActivity, automation: bool) -> String {
    let mut out = format!(
        "[{}] {} ({})  auto: {}\n",
        card.id,
        card.name,
        activity.status_class(),
        on_off(card.automatic_enabled)
    );
    let _ = writeln!(
        out,
        "    {} | {}",
        card.schedule_summary(),
        card.recurrence_text
    );
    let _ = writeln!(out, "    months: {}", month_strip(&card.months));
    if !card.steps.is_empty() {
        let steps: Vec<String> = card
            .steps
            .iter()
            .map(|tag| format!("{} {}", tag.zone_name, tag.duration_text()))
            .collect();
        let _ = writeln!(out, "    zones: {}", steps.join(", "));
    }

    let mut badges = vec![format!("last run: {}", card.last_run_text)];
    if !card.in_season {
        badges.push("out of season".to_string());
    }
    if card.scheduled_today(automation) {
        badges.push("due today".to_string());
    }
    if let Some(other) = &card.conflict_with {
        badges.push(format!("same start as {other}"));
    }
    let _ = writeln!(out, "    {}", badges.join(" | "));
    out
}

/// Twelve three-letter slots; inactive months are dashed out.
#[must_use]
pub fn month_strip(months: &[MonthCell; 12]) -> String {
    months
        .iter()
        .map(|cell| {
            if cell.active {
                cell.month.short_label()
            } else {
                "---"
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `idle`, or the running program's name and id.
#[must_use]
pub fn run_state(state: &RunState, book: &ProgramBook) -> String {
    match state.active_program() {
        None => "Controller idle".to_string(),
        Some(id) => match book.get(id).map(|p| p.name.trim()).filter(|n| !n.is_empty()) {
            Some(name) => format!("Running: {name} [{id}]"),
            None => format!("Running: program {id}"),
        },
    }
}

/// Zone table from the user settings.
#[must_use]
pub fn zones(settings: &UserSettings) -> String {
    if settings.zones.is_empty() {
        return "No zones configured.\n".to_string();
    }
    let mut out = String::new();
    for zone in &settings.zones {
        let pin = zone
            .pin
            .map_or_else(|| "-".to_string(), |pin| pin.to_string());
        let hidden = if zone.is_visible() { "" } else { "  (hidden)" };
        let _ = writeln!(
            out,
            "{:>3}  {:<20} pin {pin}{hidden}",
            zone.id,
            zone.display_name()
        );
    }
    out
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
