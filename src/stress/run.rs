use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult, ValidationError};
use crate::http::build_client;

use super::pool::{Progress, WorkerPool};
use super::queue::RequestQueue;
use super::sink::OutputSink;
use super::stat::{RequestStat, ResultMatrix};
use super::target::RunConfig;
use super::validate::validate_config;

/// Runs every target of `config` concurrently and returns their stats.
///
/// All requests for all targets are built before anything is sent, so a
/// configuration or build problem fails the run without network traffic.
/// Progress text goes to `sink`; per-request failures are recorded in the
/// returned matrix and do not fail the run.
///
/// # Errors
///
/// Returns an error when `sink` is missing, the configuration is invalid,
/// any request cannot be built, a client cannot be created, or a worker
/// task panics.
pub async fn run_stress(config: &RunConfig, sink: Option<OutputSink>) -> AppResult<ResultMatrix> {
    let Some(sink) = sink else {
        return Err(AppError::validation(ValidationError::MissingSink));
    };
    validate_config(config)?;

    let mut pools = Vec::with_capacity(config.targets.len());
    for target in &config.targets {
        let queue = RequestQueue::fill(target)?;
        let client = build_client(target)?;
        pools.push(WorkerPool {
            queue,
            client,
            concurrency: target.concurrency,
            progress: Progress {
                sink: sink.clone(),
                quiet: config.quiet,
                verbose: config.verbose,
            },
        });
    }

    let target_count = config.targets.len();
    if target_count == 1 {
        sink.emit_line(&format!("Stress testing {} target:", target_count));
    } else {
        sink.emit_line(&format!("Stress testing {} targets:", target_count));
    }
    info!("Starting stress run against {} target(s)", target_count);

    let (done_tx, done_rx) = mpsc::channel::<TargetOutcome>(target_count);
    let mut handles = Vec::with_capacity(target_count);
    for (index, (pool, target)) in pools.into_iter().zip(&config.targets).enumerate() {
        let start_line = format!(
            "- Running {} tests at {}, {} at a time",
            target.count, target.url, target.concurrency
        );
        let sink = sink.clone();
        let done_tx = done_tx.clone();
        handles.push(tokio::spawn(async move {
            sink.emit_line(&start_line);
            let result = pool.run().await;
            drop(done_tx.send((index, result)).await);
        }));
    }
    drop(done_tx);

    collect_results(done_rx, handles, target_count).await
}

pub(super) type TargetOutcome = (usize, AppResult<Vec<RequestStat>>);

/// Gathers per-target outcomes into input order.
///
/// The first failing target aborts every other target task before the error
/// is returned, so nothing keeps sending once the caller has the error.
pub(super) async fn collect_results(
    mut done_rx: mpsc::Receiver<TargetOutcome>,
    handles: Vec<JoinHandle<()>>,
    target_count: usize,
) -> AppResult<ResultMatrix> {
    let mut slots: Vec<Option<Vec<RequestStat>>> = vec![None; target_count];
    while let Some((index, result)) = done_rx.recv().await {
        let stats = match result {
            Ok(stats) => stats,
            Err(err) => {
                warn!("Target {} failed, aborting remaining targets: {}", index, err);
                for handle in &handles {
                    handle.abort();
                }
                return Err(err);
            }
        };
        debug!("Target {} finished with {} stats", index, stats.len());
        if let Some(slot) = slots.get_mut(index) {
            *slot = Some(stats);
        }
    }
    for handle in handles {
        handle.await?;
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(AppError::TargetIncomplete { index }))
        .collect()
}
