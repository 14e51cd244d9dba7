use std::path::Path;

use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::{AppError, AppResult, ConfigError};
use crate::stress::ResultMatrix;

use super::summary::TargetSummary;

/// Writes every target's summary and raw stats as one JSON document.
///
/// # Errors
///
/// Returns an error if the payload cannot be serialized or the file cannot
/// be written.
pub async fn export_json(
    path: &Path,
    summaries: &[TargetSummary],
    results: &ResultMatrix,
) -> AppResult<()> {
    let targets: Vec<serde_json::Value> = summaries
        .iter()
        .zip(results)
        .map(|(summary, stats)| {
            serde_json::json!({
                "summary": summary,
                "requests": stats
            })
        })
        .collect();
    let payload = serde_json::json!({ "targets": targets });
    let json = serde_json::to_vec_pretty(&payload)?;

    write_file(path, &json).await.map_err(|err| {
        AppError::config(ConfigError::WriteExport {
            path: path.to_path_buf(),
            source: err,
        })
    })
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<(), std::io::Error> {
    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Utc;

    use super::*;
    use crate::report::summarize_target;
    use crate::stress::RequestStat;

    #[test]
    fn export_writes_summary_and_requests() -> Result<(), String> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| format!("Failed to build runtime: {}", err))?;
        let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
        let path = dir.path().join("run.json");

        let stats = vec![RequestStat {
            start_time: Utc::now(),
            duration: Duration::from_millis(5),
            status_code: Some(200),
            error: None,
            bytes_transferred: 2,
        }];
        let summary = summarize_target("http://localhost", &stats)?;
        let results = vec![stats];

        runtime
            .block_on(export_json(&path, &[summary], &results))
            .map_err(|err| format!("Export failed: {}", err))?;

        let raw = std::fs::read_to_string(&path).map_err(|err| format!("read failed: {}", err))?;
        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|err| format!("Invalid JSON: {}", err))?;
        let total = value
            .pointer("/targets/0/summary/total_requests")
            .and_then(serde_json::Value::as_u64);
        if total != Some(1) {
            return Err(format!("Unexpected total: {:?}", total));
        }
        let status = value
            .pointer("/targets/0/requests/0/status_code")
            .and_then(serde_json::Value::as_u64);
        if status != Some(200) {
            return Err(format!("Unexpected status: {:?}", status));
        }
        Ok(())
    }
}
