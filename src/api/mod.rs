use crate::models::{FormPayload, SubmitResponse};
use async_trait::async_trait;
use thiserror::Error;

/// Apps Script web app that receives idea submissions.
pub const DEFAULT_SUBMIT_URL: &str = "https://script.google.com/macros/s/AKfycbz8lFohctA11bsEGaTunCzZfIz5GQGn3nC_aEuHKn7s55r2ymzUTae3b7dj2fEvtMlH1A/exec";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    Network,
    Http,
    Parse,
    Encode,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn encode(e: serde_json::Error) -> Self {
        Self {
            kind: ApiErrorKind::Encode,
            message: e.to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub submit_url: String,
}

impl EnvConfig {
    /// Reads `window.ENV.SUBMIT_URL` (or `window.ENV.submit_url`), falling
    /// back to the hosted Apps Script URL.
    pub fn from_window() -> Self {
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    for key in ["SUBMIT_URL", "submit_url"] {
                        if let Ok(url) = js_sys::Reflect::get(&env, &key.into()) {
                            if let Some(url_str) = url.as_string().filter(|s| !s.trim().is_empty())
                            {
                                return Self { submit_url: url_str };
                            }
                        }
                    }
                }
            }
        }

        Self::default()
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            submit_url: DEFAULT_SUBMIT_URL.to_string(),
        }
    }
}

/// Where a finished payload goes. One call per attempt; implementations must
/// not retry.
#[async_trait(?Send)]
pub trait SubmissionTransport {
    async fn send(&self, payload: &FormPayload) -> ApiResult<SubmitResponse>;
}

#[derive(Clone, Debug)]
pub struct HttpTransport {
    pub(crate) endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::from_window().submit_url)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl SubmissionTransport for HttpTransport {
    async fn send(&self, payload: &FormPayload) -> ApiResult<SubmitResponse> {
        let body = serde_json::to_string(payload).map_err(ApiError::encode)?;

        // Apps Script rejects CORS preflights; a text/plain body keeps this a
        // simple request.
        let res = reqwest::Client::new()
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(body)
            .send()
            .await
            .map_err(ApiError::network)?;

        let status = res.status();
        let body = res.text().await.map_err(ApiError::network)?;
        read_reply(status, body)
    }
}

/// Failures arrive in the JSON body, sometimes with a non-2xx status. The
/// status only matters when the body is not a reply at all.
fn read_reply(status: reqwest::StatusCode, body: String) -> ApiResult<SubmitResponse> {
    let parsed: Result<SubmitResponse, _> = serde_json::from_str(&body);
    match parsed {
        Ok(reply) => Ok(reply),
        Err(_) if !status.is_success() => {
            Err(ApiError::http(status, body, "Submission request failed"))
        }
        Err(e) => Err(ApiError::parse(e)),
    }
}
