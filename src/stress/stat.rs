use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::{Method, Request, StatusCode, Url, Version};
use serde::Serialize;

use crate::error::RequestError;

/// Measurement of one executed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestStat {
    pub start_time: DateTime<Utc>,
    /// Time from send until response headers (or the failure).
    pub duration: Duration,
    /// `None` when no response was received.
    pub status_code: Option<u16>,
    pub error: Option<RequestError>,
    pub bytes_transferred: u64,
}

impl RequestStat {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// One list of stats per target, in target order. Each list is in
/// completion order.
pub type ResultMatrix = Vec<Vec<RequestStat>>;

/// What was sent, recorded before the request is consumed by the client.
#[derive(Debug, Clone)]
pub struct RequestSnapshot {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body_len: Option<usize>,
}

impl RequestSnapshot {
    #[must_use]
    pub fn capture(request: &Request) -> Self {
        Self {
            method: request.method().clone(),
            url: request.url().clone(),
            headers: request.headers().clone(),
            body_len: request
                .body()
                .and_then(|body| body.as_bytes())
                .map(<[u8]>::len),
        }
    }
}

/// A response kept in full for verbose output.
#[derive(Debug, Clone)]
pub struct CapturedResponse {
    pub status: StatusCode,
    pub version: Version,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}
