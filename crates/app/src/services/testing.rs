//! In-memory port implementations shared by the service tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::{Future, ready};
use std::time::Duration;

use irrigo_domain::command::{Command, CommandReply};
use irrigo_domain::id::ProgramId;
use irrigo_domain::program::ProgramBook;
use irrigo_domain::run_state::RunState;
use irrigo_domain::settings::UserSettings;

use crate::ports::{
    ApiError, AutomationScope, Control, ControllerApi, DashboardView, EditTarget, EditTargetError,
    Notice, Sleeper,
};

pub(crate) struct FakeController {
    pub settings: Result<UserSettings, ApiError>,
    pub programs: Result<ProgramBook, ApiError>,
    pub run_states: RefCell<VecDeque<Result<RunState, ApiError>>>,
    pub reply: Result<CommandReply, ApiError>,
    pub sent: RefCell<Vec<Command>>,
    pub fetches: RefCell<Vec<&'static str>>,
}

impl Default for FakeController {
    fn default() -> Self {
        Self {
            settings: Ok(UserSettings::default()),
            programs: Ok(ProgramBook::default()),
            run_states: RefCell::new(VecDeque::new()),
            reply: Ok(CommandReply::ok()),
            sent: RefCell::new(Vec::new()),
            fetches: RefCell::new(Vec::new()),
        }
    }
}

impl FakeController {
    pub fn replying(reply: Result<CommandReply, ApiError>) -> Self {
        Self {
            reply,
            ..Self::default()
        }
    }

    pub fn with_run_states(states: impl IntoIterator<Item = Result<RunState, ApiError>>) -> Self {
        Self {
            run_states: RefCell::new(states.into_iter().collect()),
            ..Self::default()
        }
    }
}

pub(crate) fn http_500(endpoint: &str) -> ApiError {
    ApiError::Status {
        endpoint: endpoint.to_string(),
        status: 500,
        message: "internal error".to_string(),
    }
}

impl ControllerApi for FakeController {
    fn fetch_settings(&self) -> impl Future<Output = Result<UserSettings, ApiError>> {
        self.fetches.borrow_mut().push("settings");
        ready(self.settings.clone())
    }

    fn fetch_programs(&self) -> impl Future<Output = Result<ProgramBook, ApiError>> {
        self.fetches.borrow_mut().push("programs");
        ready(self.programs.clone())
    }

    fn fetch_run_state(&self) -> impl Future<Output = Result<RunState, ApiError>> {
        self.fetches.borrow_mut().push("run_state");
        let next = self
            .run_states
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(RunState::idle()));
        ready(next)
    }

    fn send(&self, command: &Command) -> impl Future<Output = Result<CommandReply, ApiError>> {
        self.sent.borrow_mut().push(command.clone());
        ready(self.reply.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ViewEvent {
    Pending(Control, bool),
    Automatic(AutomationScope, bool),
    Notified(Notice),
    Confirmed(String),
}

pub(crate) struct RecordingView {
    pub events: RefCell<Vec<ViewEvent>>,
    pub confirm_answer: Cell<bool>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            confirm_answer: Cell::new(true),
        }
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Notified(notice) => Some(notice.clone()),
                _ => None,
            })
            .collect()
    }
}

impl DashboardView for RecordingView {
    fn set_pending(&self, control: &Control, pending: bool) {
        self.events
            .borrow_mut()
            .push(ViewEvent::Pending(control.clone(), pending));
    }

    fn show_automatic(&self, scope: &AutomationScope, enabled: bool) {
        self.events
            .borrow_mut()
            .push(ViewEvent::Automatic(scope.clone(), enabled));
    }

    fn notify(&self, notice: Notice) {
        self.events.borrow_mut().push(ViewEvent::Notified(notice));
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.events
            .borrow_mut()
            .push(ViewEvent::Confirmed(prompt.to_string()));
        self.confirm_answer.get()
    }
}

#[derive(Default)]
pub(crate) struct MemoryEditTarget {
    pub stored: RefCell<Option<ProgramId>>,
    pub broken: bool,
}

impl EditTarget for MemoryEditTarget {
    fn remember(&self, program: &ProgramId) -> Result<(), EditTargetError> {
        if self.broken {
            return Err(EditTargetError("storage disabled".to_string()));
        }
        *self.stored.borrow_mut() = Some(program.clone());
        Ok(())
    }

    fn recall(&self) -> Option<ProgramId> {
        self.stored.borrow().clone()
    }
}

#[derive(Default)]
pub(crate) struct RecordingSleeper {
    pub slept: RefCell<Vec<Duration>>,
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        self.slept.borrow_mut().push(duration);
        tokio::task::yield_now()
    }
}
