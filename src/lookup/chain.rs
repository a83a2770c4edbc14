//! Ordered provider fallback.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use super::config::ProviderEndpoint;
use super::fetch::{Fetch, FetchError};
use crate::core::LookupError;

/// Outcome of asking one provider.
enum Attempt<T> {
    /// Normalized data; stop here.
    Hit(T),
    /// Transport failure, timeout, non-200 or undecodable body.
    Failed(FetchError),
    /// HTTP 200, but the body says there is nothing for this key.
    Empty,
}

/// Tries providers in list order until one yields data.
///
/// No retries within a provider. Individual failures are logged at debug
/// level and only reported, all together, once the list is exhausted.
#[derive(Clone)]
pub(crate) struct ProviderChain {
    fetcher: Arc<dyn Fetch>,
    providers: Vec<ProviderEndpoint>,
    timeout: Duration,
}

impl ProviderChain {
    pub(crate) fn new(
        fetcher: Arc<dyn Fetch>,
        providers: Vec<ProviderEndpoint>,
        timeout: Duration,
    ) -> Self {
        Self {
            fetcher,
            providers,
            timeout,
        }
    }

    /// Ask each provider in turn, returning the first normalized hit.
    ///
    /// `normalize` returns `None` when a 200 response carries no data for the
    /// key, which moves on to the next provider. `what` labels the lookup in
    /// logs and in the final error.
    pub(crate) async fn first_hit<T, F>(
        &self,
        what: &str,
        vars: &[(&str, &str)],
        normalize: F,
    ) -> Result<T, LookupError>
    where
        F: Fn(&Value, &ProviderEndpoint) -> Option<T>,
    {
        let mut failures = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            let url = provider.url(vars);
            let attempt =
                match tokio::time::timeout(self.timeout, self.fetcher.get_json(&url)).await {
                    Err(_) => Attempt::Failed(FetchError::Timeout),
                    Ok(Err(e)) => Attempt::Failed(e),
                    Ok(Ok(body)) => normalize(&body, provider).map_or(Attempt::Empty, Attempt::Hit),
                };

            match attempt {
                Attempt::Hit(value) => {
                    tracing::debug!(provider = %provider.name, what, "provider answered");
                    return Ok(value);
                }
                Attempt::Failed(e) => {
                    tracing::debug!(provider = %provider.name, %url, reason = %e, "provider attempt failed");
                    failures.push(format!("{}: {e}", provider.name));
                }
                Attempt::Empty => {
                    tracing::debug!(provider = %provider.name, %url, "provider returned no data");
                    failures.push(format!("{}: no data", provider.name));
                }
            }
        }

        tracing::warn!(what, attempts = failures.len(), "all providers exhausted");
        Err(LookupError::lookup_unavailable(format!(
            "{what} lookup failed on every provider ({})",
            failures.join("; ")
        )))
    }
}
