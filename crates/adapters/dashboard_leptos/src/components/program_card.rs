//! One program card with its controls.

use irrigo_app::ports::Control;
use irrigo_app::services::actions::FollowUp;
use irrigo_domain::card::ProgramCard;
use irrigo_domain::run_state::RunState;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AutomationSwitch, MonthGrid};
use crate::storage::LocalStorageEditTarget;
use crate::view::Actions;

#[derive(Debug, Clone, Copy)]
enum CardAction {
    Start,
    Stop,
    Delete,
    Edit,
    Automatic(bool),
}

/// A program card. Running styling and start/stop enablement follow
/// `run_state`; everything else is fixed until the next load.
#[component]
pub fn ProgramCardView(
    card: ProgramCard,
    #[prop(into)] run_state: Signal<RunState>,
    actions: Actions,
    /// Receives what to do after a successful action.
    #[prop(into)]
    on_follow_up: Callback<FollowUp>,
) -> impl IntoView {
    let view_state = *actions.view();
    let id = card.id.clone();

    let activity = {
        let id = id.clone();
        Memo::new(move |_| run_state.with(|state| state.activity_for(&id)))
    };

    let act = {
        let id = id.clone();
        move |action: CardAction| {
            let actions = actions.clone();
            let id = id.clone();
            spawn_local(async move {
                let outcome = match action {
                    CardAction::Start => actions.start(&id).await,
                    CardAction::Stop => actions.stop(&id).await,
                    CardAction::Delete => actions.delete(&id).await,
                    CardAction::Edit => actions.edit(&LocalStorageEditTarget, &id),
                    CardAction::Automatic(enable) => {
                        actions.toggle_program_automatic(&id, enable).await
                    }
                };
                if let Ok(follow_up) = outcome {
                    on_follow_up.run(follow_up);
                }
            });
        }
    };

    let start_control = Control::Start(id.clone());
    let stop_control = Control::Stop(id.clone());
    let delete_control = Control::Delete(id.clone());
    let automatic_control = Control::ProgramAutomatic(id.clone());

    let loaded_automatic = card.automatic_enabled;
    let automatic = {
        let id = id.clone();
        Signal::derive(move || view_state.program_automatic(&id, loaded_automatic))
    };

    let due_badge = {
        let card = card.clone();
        move || {
            card.scheduled_today_with(view_state.global_automatic(), automatic.get())
                .then(|| view! { <span class="badge badge-due">"due today"</span> })
        }
    };

    let steps = card
        .steps
        .iter()
        .map(|tag| {
            view! {
                <span class="step-tag">
                    <span class="zone">{tag.zone_name.clone()}</span>
                    <span class="duration">{tag.duration_text()}</span>
                </span>
            }
        })
        .collect_view();

    let season_badge = if card.in_season {
        view! { <span class="badge badge-season">"in season"</span> }.into_any()
    } else {
        view! { <span class="badge badge-off-season">"out of season"</span> }.into_any()
    };
    let conflict_badge = card.conflict_with.clone().map(|other| {
        view! { <span class="badge badge-conflict">{format!("same start as {other}")}</span> }
    });

    view! {
        <article class=move || format!("program-card {}", activity.get().status_class())>
            <header>
                <h2>{card.name.clone()}</h2>
                <span class="schedule">{card.schedule_summary()}</span>
            </header>
            <p class="recurrence">{card.recurrence_text.clone()}</p>
            <MonthGrid months=card.months/>
            <div class="steps">{steps}</div>
            <div class="badges">
                <span class="badge">{format!("last run: {}", card.last_run_text)}</span>
                {season_badge}
                {due_badge}
                {conflict_badge}
            </div>
            <AutomationSwitch
                label="Automatic"
                checked=automatic
                disabled=Signal::derive(move || view_state.is_pending(&automatic_control))
                on_toggle={
                    let act = act.clone();
                    move |enable| act(CardAction::Automatic(enable))
                }
            />
            <footer class="actions">
                <button
                    class="btn btn-start"
                    disabled=move || {
                        !activity.get().start_enabled || view_state.is_pending(&start_control)
                    }
                    on:click={
                        let act = act.clone();
                        move |_| act(CardAction::Start)
                    }
                >
                    "Start"
                </button>
                <button
                    class="btn btn-stop"
                    disabled=move || {
                        !activity.get().stop_enabled || view_state.is_pending(&stop_control)
                    }
                    on:click={
                        let act = act.clone();
                        move |_| act(CardAction::Stop)
                    }
                >
                    "Stop"
                </button>
                <button
                    class="btn btn-edit"
                    on:click={
                        let act = act.clone();
                        move |_| act(CardAction::Edit)
                    }
                >
                    "Edit"
                </button>
                <button
                    class="btn btn-delete"
                    disabled=move || view_state.is_pending(&delete_control)
                    on:click=move |_| act(CardAction::Delete)
                >
                    "Delete"
                </button>
            </footer>
        </article>
    }
}
