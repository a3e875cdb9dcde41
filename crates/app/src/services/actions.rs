//! Action dispatcher: user-triggered control commands.
//!
//! Every action follows the same shape: patch the view first, send one
//! request, then either ask the caller for a follow-up (state refresh or
//! full reload) or undo the patch and tell the user. Nothing is retried.

use irrigo_domain::command::Command;
use irrigo_domain::id::ProgramId;

use crate::ports::{
    ApiError, AutomationScope, Control, ControllerApi, DashboardView, EditTarget, EditTargetError,
    Notice,
};

/// Page the edit action navigates to, relative to the controller root.
pub const EDIT_PAGE: &str = "modify_program.html";

/// What the caller should do once an action succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Fetch the run state now instead of waiting for the next poll.
    RefreshState,
    /// Reload settings, programs, and run state.
    Reload,
    /// Leave the dashboard for another page.
    Navigate(&'static str),
    /// The optimistic patch already shows the outcome.
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The user declined the confirmation; no request was sent.
    #[error("cancelled by user")]
    Cancelled,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    EditTarget(#[from] EditTargetError),
}

/// Sends control commands on behalf of a dashboard view.
#[derive(Debug, Clone)]
pub struct ActionDispatcher<A, V> {
    api: A,
    view: V,
}

impl<A: ControllerApi, V: DashboardView> ActionDispatcher<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Start `program` manually.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Api`] when the controller refuses or is
    /// unreachable; the start control is re-enabled first.
    #[tracing::instrument(skip(self))]
    pub async fn start(&self, program: &ProgramId) -> Result<FollowUp, ActionError> {
        self.dispatch(
            Control::Start(program.clone()),
            Command::StartProgram {
                program_id: program.clone(),
            },
            "start the program",
        )
        .await?;
        self.view.notify(Notice::success("Program started"));
        Ok(FollowUp::RefreshState)
    }

    /// Stop the running program. `program` is the card whose stop control
    /// was used; the controller stops whatever is running.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Api`] when the controller refuses or is
    /// unreachable; the stop control is re-enabled first.
    #[tracing::instrument(skip(self))]
    pub async fn stop(&self, program: &ProgramId) -> Result<FollowUp, ActionError> {
        self.dispatch(
            Control::Stop(program.clone()),
            Command::StopProgram,
            "stop the program",
        )
        .await?;
        self.view.notify(Notice::success("Program stopped"));
        Ok(FollowUp::RefreshState)
    }

    /// Delete `program` after the user confirms.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Cancelled`] without contacting the controller
    /// when the user declines, or [`ActionError::Api`] when the request fails.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, program: &ProgramId) -> Result<FollowUp, ActionError> {
        if !self
            .view
            .confirm("Delete this program? This cannot be undone.")
        {
            tracing::debug!("delete declined");
            return Err(ActionError::Cancelled);
        }
        self.dispatch(
            Control::Delete(program.clone()),
            Command::DeleteProgram { id: program.clone() },
            "delete the program",
        )
        .await?;
        self.view.notify(Notice::success("Program deleted"));
        Ok(FollowUp::Reload)
    }

    /// Flip one program's automatic scheduling.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Api`] when the request fails; the switch is
    /// put back first.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_program_automatic(
        &self,
        program: &ProgramId,
        enable: bool,
    ) -> Result<FollowUp, ActionError> {
        self.toggle(
            AutomationScope::Program(program.clone()),
            Command::ToggleProgramAutomatic {
                program_id: program.clone(),
                enable,
            },
            enable,
        )
        .await
    }

    /// Flip the global automatic-programs switch.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Api`] when the request fails; the switch is
    /// put back first.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_global_automatic(&self, enable: bool) -> Result<FollowUp, ActionError> {
        self.toggle(
            AutomationScope::Global,
            Command::ToggleAutomaticPrograms { enable },
            enable,
        )
        .await
    }

    /// Remember `program` for the edit page and ask the caller to go there.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::EditTarget`] when the id cannot be stored.
    pub fn edit<E: EditTarget>(
        &self,
        store: &E,
        program: &ProgramId,
    ) -> Result<FollowUp, ActionError> {
        if let Err(err) = store.remember(program) {
            tracing::warn!(error = %err, %program, "edit target not stored");
            self.view.notify(Notice::error(err.to_string()));
            return Err(err.into());
        }
        Ok(FollowUp::Navigate(EDIT_PAGE))
    }

    async fn toggle(
        &self,
        scope: AutomationScope,
        command: Command,
        enable: bool,
    ) -> Result<FollowUp, ActionError> {
        self.view.show_automatic(&scope, enable);
        if let Err(err) = self
            .dispatch(scope.control(), command, "change automatic scheduling")
            .await
        {
            self.view.show_automatic(&scope, !enable);
            return Err(err);
        }
        let text = if enable {
            "Automatic scheduling enabled"
        } else {
            "Automatic scheduling disabled"
        };
        self.view.notify(Notice::success(text));
        Ok(FollowUp::Nothing)
    }

    async fn dispatch(
        &self,
        control: Control,
        command: Command,
        what: &str,
    ) -> Result<(), ActionError> {
        self.view.set_pending(&control, true);
        tracing::debug!(%command, "sending command");
        let result = self.api.execute(command).await;
        self.view.set_pending(&control, false);

        result.map_err(|err| {
            tracing::error!(error = %err, "command failed");
            self.view
                .notify(Notice::error(format!("Could not {what}: {err}")));
            ActionError::Api(err)
        })
    }
}
