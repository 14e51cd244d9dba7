use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use rand::thread_rng;
use reqwest::Request;

use crate::error::BuildError;
use crate::http::RequestPlan;

use super::target::Target;

/// A target's pre-built requests.
///
/// The queue is filled completely when it is created and offers no way to
/// add more afterwards, so once workers start it only drains. Each request
/// is handed out exactly once.
#[derive(Debug)]
pub struct RequestQueue {
    url_label: String,
    requests: Mutex<VecDeque<Request>>,
}

impl RequestQueue {
    /// Builds exactly `target.count` requests.
    ///
    /// # Errors
    ///
    /// Returns the first build failure; no partial queue is produced.
    pub fn fill(target: &Target) -> Result<Self, BuildError> {
        let plan = RequestPlan::prepare(target)?;
        let mut rng = thread_rng();
        let mut requests = VecDeque::with_capacity(target.count);
        for _ in 0..target.count {
            requests.push_back(plan.materialize(&mut rng)?);
        }
        Ok(Self {
            url_label: plan.url_label().to_owned(),
            requests: Mutex::new(requests),
        })
    }

    /// Takes the next request, `None` once the queue is drained.
    pub fn pop(&self) -> Option<Request> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The URL (or URL pattern) the requests were built from.
    #[must_use]
    pub fn url_label(&self) -> &str {
        &self.url_label
    }
}
