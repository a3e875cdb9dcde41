//! Reactive `DashboardView`: pending controls and switch positions live in
//! signals the components read.

use std::collections::{HashMap, HashSet};

use irrigo_app::ports::{AutomationScope, Control, DashboardView, Notice, NoticeLevel};
use irrigo_app::services::actions::ActionDispatcher;
use irrigo_app::services::loader::DashboardData;
use irrigo_domain::id::ProgramId;
use leptos::logging;
use leptos::prelude::*;

use crate::api::BrowserController;
use crate::components::ToastProvider;

/// Action dispatcher as wired in the browser.
pub type Actions = ActionDispatcher<BrowserController, SignalView>;

#[derive(Clone, Copy)]
pub struct SignalView {
    pending: RwSignal<HashSet<Control>>,
    /// Switch positions set by actions; cards fall back to loaded data.
    program_automatic: RwSignal<HashMap<ProgramId, bool>>,
    global_automatic: RwSignal<bool>,
    toasts: ToastProvider,
}

impl SignalView {
    #[must_use]
    pub fn new(toasts: ToastProvider) -> Self {
        Self {
            pending: RwSignal::new(HashSet::new()),
            program_automatic: RwSignal::new(HashMap::new()),
            global_automatic: RwSignal::new(false),
            toasts,
        }
    }

    /// Forget action overrides and take the switch positions from `data`.
    pub fn sync(&self, data: &DashboardData) {
        self.program_automatic.update(HashMap::clear);
        self.global_automatic
            .set(data.settings.automatic_programs_enabled);
    }

    pub fn is_pending(&self, control: &Control) -> bool {
        self.pending.with(|set| set.contains(control))
    }

    /// Switch position for `program`, `loaded` unless an action moved it.
    pub fn program_automatic(&self, program: &ProgramId, loaded: bool) -> bool {
        self.program_automatic
            .with(|positions| positions.get(program).copied().unwrap_or(loaded))
    }

    pub fn global_automatic(&self) -> bool {
        self.global_automatic.get()
    }
}

impl DashboardView for SignalView {
    fn set_pending(&self, control: &Control, pending: bool) {
        self.pending.update(|set| {
            if pending {
                set.insert(control.clone());
            } else {
                set.remove(control);
            }
        });
    }

    fn show_automatic(&self, scope: &AutomationScope, enabled: bool) {
        match scope {
            AutomationScope::Program(id) => self.program_automatic.update(|positions| {
                positions.insert(id.clone(), enabled);
            }),
            AutomationScope::Global => self.global_automatic.set(enabled),
        }
    }

    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => logging::log!("{}", notice.text),
            NoticeLevel::Error => logging::error!("{}", notice.text),
        }
        self.toasts.push(notice);
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}
