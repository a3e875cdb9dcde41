//! `ControllerApi` over `reqwest`.

use std::future::Future;

use irrigo_app::ports::controller::{PROGRAMS_PATH, RUN_STATE_PATH, SETTINGS_PATH};
use irrigo_app::ports::{ApiError, ControllerApi};
use irrigo_domain::command::{Command, CommandReply};
use irrigo_domain::program::ProgramBook;
use irrigo_domain::run_state::RunState;
use irrigo_domain::settings::UserSettings;
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ControllerConfig;
use crate::error::HttpAdapterError;

/// JSON error body the controller sends alongside some non-2xx statuses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Talks to one controller. Cheap to clone; clones share a connection pool.
#[derive(Debug, Clone)]
pub struct HttpController {
    client: Client,
    base_url: String,
}

impl HttpController {
    /// Build a controller client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpAdapterError`] when the URL is not http(s) or the
    /// client cannot be built.
    pub fn from_config(config: &ControllerConfig) -> Result<Self, HttpAdapterError> {
        let url = Url::parse(&config.base_url).map_err(|err| HttpAdapterError::InvalidUrl {
            url: config.base_url.clone(),
            reason: err.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(HttpAdapterError::UnsupportedScheme(config.base_url.clone()));
        }
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(HttpAdapterError::Client)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::trace!(path, "GET");
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|err| transport(path, &err))?;
        decode(path, check_response(path, resp).await?).await
    }

    async fn post_command(&self, command: &Command) -> Result<CommandReply, ApiError> {
        let path = command.path();
        tracing::debug!(path, %command, "POST");
        let resp = self
            .client
            .post(self.url(path))
            .json(&command.body())
            .send()
            .await
            .map_err(|err| transport(path, &err))?;
        decode(path, check_response(path, resp).await?).await
    }
}

fn transport(path: &str, err: &reqwest::Error) -> ApiError {
    ApiError::Transport {
        endpoint: path.to_string(),
        reason: err.to_string(),
    }
}

/// Check the HTTP status and turn a non-2xx response into an error.
async fn check_response(path: &str, resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    tracing::warn!(path, status = status.as_u16(), %message, "controller returned error status");
    Err(ApiError::Status {
        endpoint: path.to_string(),
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(path: &str, resp: Response) -> Result<T, ApiError> {
    let bytes = resp.bytes().await.map_err(|err| transport(path, &err))?;
    serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode {
        endpoint: path.to_string(),
        reason: err.to_string(),
    })
}

impl ControllerApi for HttpController {
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
