use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::metrics::LatencyHistogram;
use crate::stress::RequestStat;

use super::format::format_micros;

/// Aggregate view of one target's stats.
///
/// Latencies are in microseconds and cover every request that produced a
/// stat, failed or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetSummary {
    pub url: String,
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub timeout_requests: u64,
    pub min_latency_us: u64,
    pub avg_latency_us: u64,
    pub max_latency_us: u64,
    pub p50_latency_us: u64,
    pub p90_latency_us: u64,
    pub p99_latency_us: u64,
    /// Responses per status code; requests without a response are absent.
    pub status_counts: BTreeMap<u16, u64>,
    pub bytes_transferred: u64,
}

/// Summarizes `stats` for the target at `url`.
///
/// # Errors
///
/// Returns an error if the latency histogram cannot be built.
pub fn summarize_target(url: &str, stats: &[RequestStat]) -> Result<TargetSummary, String> {
    let mut histogram = LatencyHistogram::new()?;
    let mut successful_requests: u64 = 0;
    let mut failed_requests: u64 = 0;
    let mut timeout_requests: u64 = 0;
    let mut min_latency_us = u64::MAX;
    let mut max_latency_us: u64 = 0;
    let mut latency_sum_us: u128 = 0;
    let mut status_counts = BTreeMap::new();
    let mut bytes_transferred: u64 = 0;

    for stat in stats {
        let latency_us = duration_micros(stat.duration);
        histogram.record(latency_us)?;
        min_latency_us = min_latency_us.min(latency_us);
        max_latency_us = max_latency_us.max(latency_us);
        latency_sum_us = latency_sum_us.saturating_add(u128::from(latency_us));
        bytes_transferred = bytes_transferred.saturating_add(stat.bytes_transferred);

        if let Some(status) = stat.status_code {
            let count = status_counts.entry(status).or_insert(0_u64);
            *count = count.saturating_add(1);
        }
        match &stat.error {
            None => successful_requests = successful_requests.saturating_add(1),
            Some(err) => {
                failed_requests = failed_requests.saturating_add(1);
                if err.is_timeout() {
                    timeout_requests = timeout_requests.saturating_add(1);
                }
            }
        }
    }

    let total_requests = u64::try_from(stats.len()).unwrap_or(u64::MAX);
    let avg_latency_us = latency_sum_us
        .checked_div(u128::from(total_requests))
        .and_then(|avg| u64::try_from(avg).ok())
        .unwrap_or(0);
    if total_requests == 0 {
        min_latency_us = 0;
    }
    let (p50_latency_us, p90_latency_us, p99_latency_us) = histogram.percentiles();

    Ok(TargetSummary {
        url: url.to_owned(),
        total_requests,
        successful_requests,
        failed_requests,
        timeout_requests,
        min_latency_us,
        avg_latency_us,
        max_latency_us,
        p50_latency_us,
        p90_latency_us,
        p99_latency_us,
        status_counts,
        bytes_transferred,
    })
}

/// Lines printed for a target after the run.
#[must_use]
pub fn summary_lines(summary: &TargetSummary) -> Vec<String> {
    let mut lines = vec![
        format!("Results for {}:", summary.url),
        format!("  Total Requests: {}", summary.total_requests),
        format!(
            "  Successful: {} ({}.{:02}%)",
            summary.successful_requests,
            success_rate_x100(summary) / 100,
            success_rate_x100(summary) % 100
        ),
        format!("  Failed: {}", summary.failed_requests),
        format!("  Timeouts: {}", summary.timeout_requests),
        format!(
            "  Min/Avg/Max Latency: {} / {} / {}",
            format_micros(summary.min_latency_us),
            format_micros(summary.avg_latency_us),
            format_micros(summary.max_latency_us)
        ),
        format!(
            "  P50/P90/P99 Latency: {} / {} / {}",
            format_micros(summary.p50_latency_us),
            format_micros(summary.p90_latency_us),
            format_micros(summary.p99_latency_us)
        ),
        format!("  Bytes Transferred: {}", summary.bytes_transferred),
    ];
    if !summary.status_counts.is_empty() {
        let statuses: Vec<String> = summary
            .status_counts
            .iter()
            .map(|(status, count)| format!("{}: {}", status, count))
            .collect();
        lines.push(format!("  Status Codes: {}", statuses.join(", ")));
    }
    lines
}

fn success_rate_x100(summary: &TargetSummary) -> u64 {
    let scaled = u128::from(summary.successful_requests)
        .saturating_mul(10_000)
        .checked_div(u128::from(summary.total_requests))
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

fn duration_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}
