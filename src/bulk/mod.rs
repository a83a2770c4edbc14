//! Bounded-concurrency batch resolution.
//!
//! A batch fans every query out to its own tokio task, with a semaphore
//! capping how many resolve at once. Failures stay with their query: a
//! malformed entry yields an error result and a panicking task yields a
//! [`TaskFailed`](crate::core::ErrorKind::TaskFailed) result, while the rest
//! of the batch carries on.
//!
//! ```no_run
//! use std::sync::Arc;
//! use sonda::bulk::run_batch;
//! use sonda::lookup::{LookupConfig, Resolver};
//!
//! # async fn run() -> Result<(), sonda::core::SondaError> {
//! let resolver = Arc::new(Resolver::new(LookupConfig::default())?);
//! let batch = run_batch(resolver, ["111.444.777-35", "01001-000"], 5).await;
//! assert_eq!(batch.len(), 2);
//! # Ok(())
//! # }
//! ```

mod runner;

pub use runner::{
    BatchEntry, BatchResult, BulkRunner, DEFAULT_CONCURRENCY, QueryResolver, run_batch,
};
