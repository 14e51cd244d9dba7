use std::sync::Arc;

use reqwest::Client;
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::AppResult;
use crate::http::execute_request;
use crate::report::progress::{stat_line, verbose_block};

use super::queue::RequestQueue;
use super::sink::OutputSink;
use super::stat::{CapturedResponse, RequestSnapshot, RequestStat};

/// How workers report each finished request.
#[derive(Debug, Clone)]
pub(super) struct Progress {
    pub(super) sink: OutputSink,
    pub(super) quiet: bool,
    pub(super) verbose: bool,
}

impl Progress {
    const fn captures_exchange(&self) -> bool {
        self.verbose && !self.quiet
    }

    fn report(
        &self,
        stat: &RequestStat,
        request: Option<&RequestSnapshot>,
        response: Option<&CapturedResponse>,
    ) {
        if self.quiet {
            return;
        }
        let mut text = stat_line(stat);
        text.push('\n');
        if self.verbose
            && let Some(request) = request
        {
            text.push_str(&verbose_block(request, response));
        }
        self.sink.emit(&text);
    }
}

/// Drains one target's queue with a fixed number of workers.
pub(super) struct WorkerPool {
    pub(super) queue: RequestQueue,
    pub(super) client: Client,
    pub(super) concurrency: usize,
    pub(super) progress: Progress,
}

impl WorkerPool {
    /// Runs until every worker has stopped and every request has a stat.
    ///
    /// Stats come back in completion order.
    pub(super) async fn run(self) -> AppResult<Vec<RequestStat>> {
        let expected = self.queue.len();
        let queue = Arc::new(self.queue);
        let (stats_tx, mut stats_rx) = mpsc::channel::<RequestStat>(expected.max(1));

        let mut workers = Vec::with_capacity(self.concurrency);
        for _ in 0..self.concurrency {
            workers.push(tokio::spawn(run_worker(
                Arc::clone(&queue),
                self.client.clone(),
                self.progress.clone(),
                stats_tx.clone(),
            )));
        }
        drop(stats_tx);

        let mut stats = Vec::with_capacity(expected);
        while let Some(stat) = stats_rx.recv().await {
            stats.push(stat);
        }
        for worker in workers {
            worker.await?;
        }

        debug!(
            "Finished {} of {} requests against {}",
            stats.len(),
            expected,
            queue.url_label()
        );
        Ok(stats)
    }
}

async fn run_worker(
    queue: Arc<RequestQueue>,
    client: Client,
    progress: Progress,
    stats_tx: mpsc::Sender<RequestStat>,
) {
    let capture = progress.captures_exchange();
    while let Some(request) = queue.pop() {
        let snapshot = capture.then(|| RequestSnapshot::capture(&request));
        let executed = execute_request(&client, request, capture).await;
        progress.report(
            &executed.stat,
            snapshot.as_ref(),
            executed.response.as_ref(),
        );
        if stats_tx.send(executed.stat).await.is_err() {
            break;
        }
    }
}
