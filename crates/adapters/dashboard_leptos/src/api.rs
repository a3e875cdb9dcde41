//! `ControllerApi` over `gloo-net`, for pages served by the controller itself.

use std::future::Future;

use gloo_net::http::{Request, Response};
use irrigo_app::ports::controller::{PROGRAMS_PATH, RUN_STATE_PATH, SETTINGS_PATH};
use irrigo_app::ports::{ApiError, ControllerApi};
use irrigo_domain::command::{Command, CommandReply};
use irrigo_domain::program::ProgramBook;
use irrigo_domain::run_state::RunState;
use irrigo_domain::settings::UserSettings;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// JSON error body the controller sends on some non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Browser-side controller client. Paths are relative to `base_url`, which
/// is empty when the page is served by the controller.
#[derive(Debug, Clone, Default)]
pub struct BrowserController {
    base_url: String,
}

impl BrowserController {
    /// Talk to the origin that served the page.
    #[must_use]
    pub fn same_origin() -> Self {
        Self::default()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|err| transport(path, &err))?;
        decode(path, check_response(path, resp).await?).await
    }

    async fn post_command(&self, command: &Command) -> Result<CommandReply, ApiError> {
        let path = command.path();
        let resp = Request::post(&self.url(path))
            .json(&command.body())
            .map_err(|err| transport(path, &err))?
            .send()
            .await
            .map_err(|err| transport(path, &err))?;
        decode(path, check_response(path, resp).await?).await
    }
}

fn transport(path: &str, err: &gloo_net::Error) -> ApiError {
    ApiError::Transport {
        endpoint: path.to_string(),
        reason: err.to_string(),
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(path: &str, resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) if !resp.status_text().is_empty() => resp.status_text(),
        Err(_) => format!("HTTP {status}"),
    };
    Err(ApiError::Status {
        endpoint: path.to_string(),
        status,
        message,
    })
}

async fn decode<T: DeserializeOwned>(path: &str, resp: Response) -> Result<T, ApiError> {
    let text = resp.text().await.map_err(|err| transport(path, &err))?;
    serde_json::from_str(&text).map_err(|err| ApiError::Decode {
        endpoint: path.to_string(),
        reason: err.to_string(),
    })
}

impl ControllerApi for BrowserController {
    fn fetch_settings(&self) -> impl Future<Output = Result<UserSettings, ApiError>> {
        self.get_json(SETTINGS_PATH)
    }

    fn fetch_programs(&self) -> impl Future<Output = Result<ProgramBook, ApiError>> {
        self.get_json(PROGRAMS_PATH)
    }

    fn fetch_run_state(&self) -> impl Future<Output = Result<RunState, ApiError>> {
        self.get_json(RUN_STATE_PATH)
    }

    fn send(&self, command: &Command) -> impl Future<Output = Result<CommandReply, ApiError>> {
        self.post_command(command)
    }
}
