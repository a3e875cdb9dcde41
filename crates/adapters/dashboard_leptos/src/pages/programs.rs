use std::ops::ControlFlow;

use irrigo_app::ports::{Control, ControllerApi};
use irrigo_app::services::actions::{ActionDispatcher, FollowUp};
use irrigo_app::services::loader::DashboardLoader;
use irrigo_app::services::poller::{DEFAULT_POLL_INTERVAL, StatePoller};
use irrigo_domain::run_state::RunState;
use leptos::ev;
use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::BrowserController;
use crate::components::{AutomationSwitch, LoadFailed, Loading, ProgramCardView, use_toasts};
use crate::timer::GlooSleeper;
use crate::view::SignalView;

/// Program list: global switch, one card per program, live run state.
#[component]
pub fn Programs() -> impl IntoView {
    let api = BrowserController::same_origin();
    let view_state = SignalView::new(use_toasts());
    let actions = ActionDispatcher::new(api.clone(), view_state);

    let (reload_trigger, set_reload_trigger) = signal(0);
    let run_state = RwSignal::new(RunState::idle());

    let data = {
        let api = api.clone();
        LocalResource::new(move || {
            reload_trigger.track();
            let loader = DashboardLoader::new(api.clone());
            async move { loader.load().await }
        })
    };

    Effect::new(move |_| {
        if let Some(Ok(loaded)) = data.read().as_ref() {
            view_state.sync(loaded);
            run_state.set(loaded.run_state.clone());
        }
    });

    start_polling(api.clone(), run_state);

    let on_follow_up = {
        let api = api.clone();
        Callback::new(move |follow_up: FollowUp| match follow_up {
            FollowUp::RefreshState => {
                let api = api.clone();
                spawn_local(async move {
                    match api.fetch_run_state().await {
                        Ok(state) => run_state.set(state),
                        Err(err) => logging::warn!("run-state refresh failed: {err}"),
                    }
                });
            }
            FollowUp::Reload => set_reload_trigger.update(|v| *v += 1),
            FollowUp::Navigate(page) => navigate(page),
            FollowUp::Nothing => {}
        })
    };

    let on_global_toggle = {
        let actions = actions.clone();
        move |enable: bool| {
            let actions = actions.clone();
            spawn_local(async move {
                if let Ok(follow_up) = actions.toggle_global_automatic(enable).await {
                    on_follow_up.run(follow_up);
                }
            });
        }
    };

    let retry = move || set_reload_trigger.update(|v| *v += 1);

    view! {
        <div class="programs-page">
            <header class="page-header">
                <h1>"Irrigation programs"</h1>
                <AutomationSwitch
                    label="Automatic programs"
                    checked=Signal::derive(move || view_state.global_automatic())
                    disabled=Signal::derive(move || {
                        view_state.is_pending(&Control::GlobalAutomatic)
                    })
                    on_toggle=on_global_toggle
                />
            </header>
            <Suspense fallback=move || view! { <Loading message="Loading programs\u{2026}"/> }>
                {move || {
                    data.read().as_ref().map(|result| match result {
                        Ok(loaded) => {
                            let cards = loaded.cards(irrigo_domain::time::today());
                            if cards.is_empty() {
                                view! { <p class="empty">"No programs configured."</p> }.into_any()
                            } else {
                                view! {
                                    <div class="program-list">
                                        {cards
                                            .into_iter()
                                            .map(|card| {
                                                view! {
                                                    <ProgramCardView
                                                        card
                                                        run_state
                                                        actions=actions.clone()
                                                        on_follow_up
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                                .into_any()
                            }
                        }
                        Err(err) => {
                            logging::error!("{err}");
                            view! { <LoadFailed error=err.clone() on_retry=retry/> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Poll the run state for as long as the page is shown.
fn start_polling(api: BrowserController, run_state: RwSignal<RunState>) {
    let poller = StatePoller::new(api, GlooSleeper, DEFAULT_POLL_INTERVAL);
    let (handle, task) = poller.start(move |result| {
        match result {
            Ok(state) => run_state.set(state),
            Err(err) => logging::warn!("run-state poll failed: {err}"),
        }
        ControlFlow::Continue(())
    });
    spawn_local(task);

    let on_hide = handle.clone();
    let listener = window_event_listener(ev::pagehide, move |_| on_hide.cancel());
    on_cleanup(move || {
        handle.cancel();
        listener.remove();
    });
}

fn navigate(page: &str) {
    if let Some(window) = web_sys::window()
        && let Err(err) = window.location().set_href(page)
    {
        logging::error!("navigation to {page} failed: {err:?}");
    }
}
