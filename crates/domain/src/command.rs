//! Commands: control requests the dashboard POSTs to the controller.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::ValidationError;
use crate::id::ProgramId;

/// A control request and its JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    StartProgram { program_id: ProgramId },
    StopProgram,
    DeleteProgram { id: ProgramId },
    ToggleProgramAutomatic { program_id: ProgramId, enable: bool },
    ToggleAutomaticPrograms { enable: bool },
}

impl Command {
    /// Endpoint path on the controller.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::StartProgram { .. } => "/start_program",
            Self::StopProgram => "/stop_program",
            Self::DeleteProgram { .. } => "/delete_program",
            Self::ToggleProgramAutomatic { .. } => "/toggle_program_automatic",
            Self::ToggleAutomaticPrograms { .. } => "/toggle_automatic_programs",
        }
    }

    /// JSON request body.
    #[must_use]
    pub fn body(&self) -> Value {
        match self {
            Self::StartProgram { program_id } => json!({ "program_id": program_id }),
            Self::StopProgram => json!({}),
            Self::DeleteProgram { id } => json!({ "id": id }),
            Self::ToggleProgramAutomatic { program_id, enable } => {
                json!({ "program_id": program_id, "enable": enable })
            }
            Self::ToggleAutomaticPrograms { enable } => json!({ "enable": enable }),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartProgram { program_id } => write!(f, "start_program({program_id})"),
            Self::StopProgram => f.write_str("stop_program"),
            Self::DeleteProgram { id } => write!(f, "delete_program({id})"),
            Self::ToggleProgramAutomatic { program_id, enable } => {
                write!(f, "toggle_program_automatic({program_id}, {enable})")
            }
            Self::ToggleAutomaticPrograms { enable } => {
                write!(f, "toggle_automatic_programs({enable})")
            }
        }
    }
}

/// Controller reply to every command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandReply {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }

    /// The controller's explanation for a refused command, with a generic
    /// fallback when it sent none.
    ///
    /// # Errors
    ///
    /// Returns the refusal message when `success` is false.
    pub fn into_result(self) -> Result<(), String> {
        if self.success {
            return Ok(());
        }
        Err(self
            .error
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| "the controller rejected the request".to_string()))
    }
}

/// Parse the `enable` flag of a toggle command from user input.
///
/// # Errors
///
/// Returns [`ValidationError::Switch`] for anything but `on`/`off`,
/// `true`/`false`, `yes`/`no`, or `1`/`0`.
pub fn parse_switch(value: &str) -> Result<bool, ValidationError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(ValidationError::Switch(value.to_string())),
    }
}
