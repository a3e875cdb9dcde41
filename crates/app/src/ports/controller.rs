//! Controller port: the irrigation controller's HTTP surface.

use std::future::Future;
use std::rc::Rc;

use irrigo_domain::command::{Command, CommandReply};
use irrigo_domain::program::ProgramBook;
use irrigo_domain::run_state::RunState;
use irrigo_domain::settings::UserSettings;

/// `GET` path of the user settings document.
pub const SETTINGS_PATH: &str = "/data/user_settings.json";
/// `GET` path of the program book.
pub const PROGRAMS_PATH: &str = "/data/program.json";
/// `GET` path of the run state.
pub const RUN_STATE_PATH: &str = "/get_program_state";

/// Failure talking to the controller.
///
/// `Clone` so it can sit in reactive state on the browser side.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },

    /// The controller answered with a non-2xx status.
    #[error("{endpoint} answered HTTP {status}: {message}")]
    Status {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// The body was not the JSON we expected.
    #[error("unexpected response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },

    /// The controller replied `success: false`.
    #[error("{0}")]
    Rejected(String),
}

/// Reads controller data and sends control commands.
///
/// Futures are deliberately not `Send`: the browser implementation is built
/// on `gloo-net`, whose futures are bound to the JS event loop.
pub trait ControllerApi {
    /// `GET /data/user_settings.json`.
    fn fetch_settings(&self) -> impl Future<Output = Result<UserSettings, ApiError>>;

    /// `GET /data/program.json`.
    fn fetch_programs(&self) -> impl Future<Output = Result<ProgramBook, ApiError>>;

    /// `GET /get_program_state`.
    fn fetch_run_state(&self) -> impl Future<Output = Result<RunState, ApiError>>;

    /// `POST` the command's body to its path and decode the reply.
    fn send(&self, command: &Command) -> impl Future<Output = Result<CommandReply, ApiError>>;

    /// Send `command` and treat a `success: false` reply as an error.
    fn execute(&self, command: Command) -> impl Future<Output = Result<(), ApiError>> {
        async move {
            let reply = self.send(&command).await?;
            reply.into_result().map_err(ApiError::Rejected)
        }
    }
}

impl<T: ControllerApi> ControllerApi for Rc<T> {
    fn fetch_settings(&self) -> impl Future<Output = Result<UserSettings, ApiError>> {
        (**self).fetch_settings()
    }

    fn fetch_programs(&self) -> impl Future<Output = Result<ProgramBook, ApiError>> {
        (**self).fetch_programs()
    }

    fn fetch_run_state(&self) -> impl Future<Output = Result<RunState, ApiError>> {
        (**self).fetch_run_state()
    }

    fn send(&self, command: &Command) -> impl Future<Output = Result<CommandReply, ApiError>> {
        (**self).send(command)
    }
}
