//! Run state: which program, if any, the controller is executing.

use serde::{Deserialize, Serialize};

use crate::id::ProgramId;

/// Body of `GET /get_program_state`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    #[serde(default)]
    pub program_running: bool,
    #[serde(default)]
    pub current_program_id: Option<ProgramId>,
}

impl RunState {
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn running(id: impl Into<ProgramId>) -> Self {
        Self {
            program_running: true,
            current_program_id: Some(id.into()),
        }
    }

    /// Whether `program` is the one executing right now.
    #[must_use]
    pub fn is_running(&self, program: &ProgramId) -> bool {
        self.program_running && self.current_program_id.as_ref() == Some(program)
    }

    /// The executing program, if the controller reports one.
    #[must_use]
    pub fn active_program(&self) -> Option<&ProgramId> {
        self.current_program_id
            .as_ref()
            .filter(|_| self.program_running)
    }

    /// Styling and control enablement for one program card.
    #[must_use]
    pub fn activity_for(&self, program: &ProgramId) -> CardActivity {
        let running = self.is_running(program);
        CardActivity {
            running,
            start_enabled: !self.program_running,
            stop_enabled: running,
        }
    }
}

/// Per-card state recomputed on every poll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardActivity {
    /// The card's program is executing.
    pub running: bool,
    /// No program at all is executing.
    pub start_enabled: bool,
    /// Only the executing program can be stopped from its card.
    pub stop_enabled: bool,
}

impl CardActivity {
    /// CSS-style status tag for the card.
    #[must_use]
    pub fn status_class(self) -> &'static str {
        if self.running { "active" } else { "inactive" }
    }
}
