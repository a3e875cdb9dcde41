//! View port: the parts of the dashboard an action patches directly.
//!
//! Actions update the view before the controller answers and undo the
//! change if it refuses. Everything else (cards, run-state styling) is
//! re-derived from fresh data and never goes through this port.

use irrigo_domain::id::ProgramId;

/// A control that can be disabled while its request is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Control {
    Start(ProgramId),
    Stop(ProgramId),
    Delete(ProgramId),
    ProgramAutomatic(ProgramId),
    GlobalAutomatic,
}

/// Which automation switch a toggle targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AutomationScope {
    Program(ProgramId),
    Global,
}

impl AutomationScope {
    #[must_use]
    pub fn control(&self) -> Control {
        match self {
            Self::Program(id) => Control::ProgramAutomatic(id.clone()),
            Self::Global => Control::GlobalAutomatic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient, non-blocking notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Dashboard surface the action dispatcher drives.
pub trait DashboardView {
    /// Disable (`pending = true`) or re-enable a control.
    fn set_pending(&self, control: &Control, pending: bool);

    /// Show an automation switch in the given position.
    fn show_automatic(&self, scope: &AutomationScope, enabled: bool);

    /// Display a notification without blocking.
    fn notify(&self, notice: Notice);

    /// Ask the user to confirm a destructive action.
    fn confirm(&self, prompt: &str) -> bool;
}
