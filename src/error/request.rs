use serde::Serialize;
use thiserror::Error;

/// Failure of a single in-flight request.
///
/// These never abort a run; they are recorded on the request's stat.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum RequestError {
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("redirect failed: {0}")]
    Redirect(String),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("request failed: {0}")]
    Transport(String),
}

impl RequestError {
    #[must_use]
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            RequestError::Timeout(message)
        } else if err.is_connect() {
            RequestError::Connect(message)
        } else if err.is_redirect() {
            RequestError::Redirect(message)
        } else if err.is_body() || err.is_decode() {
            RequestError::Body(message)
        } else {
            RequestError::Transport(message)
        }
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, RequestError::Timeout(_))
    }
}
