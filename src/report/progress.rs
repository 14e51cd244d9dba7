use reqwest::header::HeaderMap;

use crate::stress::{CapturedResponse, RequestSnapshot, RequestStat};

use super::format::format_duration;

/// Longest response body shown in a verbose block.
const MAX_BODY_PREVIEW: usize = 4_096;

/// One line describing how a request ended.
///
/// Successful requests show status, latency and body size; failed ones show
/// the status (if any arrived) and the error.
#[must_use]
pub fn stat_line(stat: &RequestStat) -> String {
    let elapsed = format_duration(stat.duration);
    match (&stat.error, stat.status_code) {
        (None, Some(status)) => format!(
            "{} {} {} bytes",
            status, elapsed, stat.bytes_transferred
        ),
        (None, None) => format!("--- {}", elapsed),
        (Some(err), Some(status)) => format!("{} {} {}", status, elapsed, err),
        (Some(err), None) => format!("ERR {} {}", elapsed, err),
    }
}

/// Request and response detail printed under a progress line.
#[must_use]
pub fn verbose_block(request: &RequestSnapshot, response: Option<&CapturedResponse>) -> String {
    let mut lines = vec![format!("> {} {}", request.method, request.url)];
    push_headers(&mut lines, '>', &request.headers);
    if let Some(len) = request.body_len {
        lines.push(format!("> [{} byte body]", len));
    }

    if let Some(response) = response {
        lines.push(format!("< {:?} {}", response.version, response.status));
        push_headers(&mut lines, '<', &response.headers);
        if !response.body.is_empty() {
            let shown = response.body.len().min(MAX_BODY_PREVIEW);
            let preview = response.body.get(..shown).unwrap_or_default();
            lines.push(String::from_utf8_lossy(preview).into_owned());
            if shown < response.body.len() {
                lines.push(format!(
                    "< [{} more bytes]",
                    response.body.len().saturating_sub(shown)
                ));
            }
        }
    }

    let mut block = lines.join("\n");
    block.push_str("\n\n");
    block
}

fn push_headers(lines: &mut Vec<String>, marker: char, headers: &HeaderMap) {
    for (name, value) in headers {
        let value = value.to_str().unwrap_or("<binary>");
        lines.push(format!("{} {}: {}", marker, name, value));
    }
}
