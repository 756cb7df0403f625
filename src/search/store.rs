//! Shared result collection for the worker pool.
//!
//! Workers share no state with each other except this store; all mutation
//! goes through the single `append` operation.

use std::sync::Mutex;

use crate::domain::JobResult;

/// Concurrency-safe, append-only collection of completed job results.
///
/// Lives for one sweep run: created before the pool starts, drained with
/// `snapshot` after the completion barrier, then discarded. Append order is
/// arbitrary (whatever the workers raced to) and carries no meaning beyond
/// stable-sort tie-breaking downstream.
#[derive(Debug, Default)]
pub struct ResultStore {
    results: Mutex<Vec<JobResult>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one result. Returns the number of results stored so far, which
    /// the pool uses for progress lines.
    pub fn append(&self, result: JobResult) -> usize {
        let mut results = self.results.lock().unwrap_or_else(|p| p.into_inner());
        results.push(result);
        results.len()
    }

    /// Consume the store and return everything appended, in append order.
    pub fn snapshot(self) -> Vec<JobResult> {
        self.results.into_inner().unwrap_or_else(|p| p.into_inner())
    }
}
