use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use serde::Serialize;
use tokio::sync::Semaphore;

use crate::core::{LookupError, LookupResult, classify};
use crate::lookup::Resolver;

/// In-flight resolutions when no limit is given.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Anything that turns one raw query into a result.
///
/// The runner depends on this rather than on [`Resolver`] so batches can be
/// driven by stubs.
#[async_trait]
pub trait QueryResolver: Send + Sync {
    async fn resolve(&self, query: &str) -> LookupResult;
}

#[async_trait]
impl QueryResolver for Resolver {
    async fn resolve(&self, query: &str) -> LookupResult {
        self.classify_and_resolve(query).await
    }
}

/// One query of a batch with its result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    /// Position of the query in the input.
    pub index: usize,
    /// The query as given.
    pub query: String,
    #[serde(flatten)]
    pub result: LookupResult,
}

/// Every entry of a finished batch, in completion order.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub entries: Vec<BatchEntry>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries carrying an error.
    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|e| !e.result.is_success()).count()
    }

    /// Entries sorted back into input order.
    pub fn into_input_order(mut self) -> Vec<BatchEntry> {
        self.entries.sort_by_key(|e| e.index);
        self.entries
    }
}

/// Resolves a list of queries with bounded parallelism.
#[derive(Clone)]
pub struct BulkRunner {
    resolver: Arc<dyn QueryResolver>,
    concurrency: usize,
}

impl BulkRunner {
    pub fn new(resolver: Arc<dyn QueryResolver>) -> Self {
        Self {
            resolver,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Cap on simultaneous resolutions. Zero is treated as one.
    pub fn with_concurrency(mut self, limit: usize) -> Self {
        self.concurrency = limit.max(1);
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Resolve every query. The result holds exactly one entry per input
    /// position; duplicates are resolved independently.
    pub async fn run<I, S>(&self, queries: I) -> BatchResult
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let started_at = Utc::now();
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut pending = FuturesUnordered::new();

        for (index, query) in queries.into_iter().map(Into::into).enumerate() {
            let resolver = Arc::clone(&self.resolver);
            let semaphore = Arc::clone(&semaphore);
            let task_query = query.clone();

            let handle = tokio::spawn(async move {
                // The semaphore is never closed, so acquiring only waits.
                let _permit = semaphore.acquire_owned().await.ok();
                resolver.resolve(&task_query).await
            });
            pending.push(async move { (index, query, handle.await) });
        }

        tracing::debug!(
            queries = pending.len(),
            concurrency = self.concurrency,
            "batch started"
        );

        let mut entries = Vec::with_capacity(pending.len());
        while let Some((index, query, joined)) = pending.next().await {
            let result = joined.unwrap_or_else(|e| {
                tracing::warn!(index, %query, error = %e, "batch task failed");
                LookupResult::failure(
                    classify(&query),
                    LookupError::task_failed(format!("resolution task failed: {e}")),
                )
            });
            entries.push(BatchEntry {
                index,
                query,
                result,
            });
        }

        let batch = BatchResult {
            started_at,
            finished_at: Utc::now(),
            entries,
        };
        tracing::debug!(
            entries = batch.len(),
            failures = batch.failures(),
            "batch finished"
        );
        batch
    }
}

/// Resolve `queries` with at most `limit` in flight.
pub async fn run_batch<I, S>(resolver: Arc<dyn QueryResolver>, queries: I, limit: usize) -> BatchResult
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    BulkRunner::new(resolver)
        .with_concurrency(limit)
        .run(queries)
        .await
}
