use std::time::Instant;

use chrono::Utc;
use futures_util::StreamExt;
use reqwest::{Client, Request, Response};
use tracing::debug;

use crate::error::RequestError;
use crate::stress::{CapturedResponse, RequestStat};

/// Outcome of sending one request.
#[derive(Debug)]
pub struct Executed {
    pub stat: RequestStat,
    /// Present when the response was captured for verbose output.
    pub response: Option<CapturedResponse>,
}

/// Sends `request` and measures it.
///
/// Elapsed time runs from send until the response headers arrive. The body
/// is drained afterwards so the connection can be reused; with
/// `capture_response` it is also kept for verbose reporting. Transport
/// failures are recorded on the stat rather than returned.
pub async fn execute_request(client: &Client, request: Request, capture_response: bool) -> Executed {
    let start_time = Utc::now();
    let started = Instant::now();

    match client.execute(request).await {
        Ok(response) => {
            let elapsed = started.elapsed();
            let status = response.status();
            let captured_head =
                capture_response.then(|| (response.version(), response.headers().clone()));

            let (bytes_transferred, body, error) =
                match drain_response_body(response, capture_response).await {
                    Ok((bytes, body)) => (bytes, body, None),
                    Err(err) => {
                        debug!("Failed to read response body: {}", err);
                        (0, Vec::new(), Some(RequestError::from_reqwest(&err)))
                    }
                };

            let captured = captured_head.map(|(version, headers)| CapturedResponse {
                status,
                version,
                headers,
                body,
            });
            Executed {
                stat: RequestStat {
                    start_time,
                    duration: elapsed,
                    status_code: Some(status.as_u16()),
                    error,
                    bytes_transferred,
                },
                response: captured,
            }
        }
        Err(err) => {
            let elapsed = started.elapsed();
            debug!("Request failed: {}", err);
            Executed {
                stat: RequestStat {
                    start_time,
                    duration: elapsed,
                    status_code: None,
                    error: Some(RequestError::from_reqwest(&err)),
                    bytes_transferred: 0,
                },
                response: None,
            }
        }
    }
}

async fn drain_response_body(
    response: Response,
    keep: bool,
) -> Result<(u64, Vec<u8>), reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    let mut body = Vec::new();
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
        if keep {
            body.extend_from_slice(&bytes);
        }
    }
    Ok((total_bytes, body))
}
