//! DNS probes over DNS-over-HTTPS JSON resolvers.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use super::chain::ProviderChain;
use super::config::ProviderEndpoint;
use super::fetch::Fetch;
use crate::core::{DnsRecords, DomainRecord, LookupError};

/// Record types the probes ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    A,
    Mx,
    Ns,
}

impl RecordType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Mx => "MX",
            Self::Ns => "NS",
        }
    }
}

/// Resolves records through the configured DoH providers.
#[derive(Clone)]
pub struct DnsClient {
    chain: ProviderChain,
}

impl DnsClient {
    pub fn new(fetcher: Arc<dyn Fetch>, providers: Vec<ProviderEndpoint>, timeout: Duration) -> Self {
        Self {
            chain: ProviderChain::new(fetcher, providers, timeout),
        }
    }

    /// `data` fields of the answer section. An answer without records
    /// (NXDOMAIN, no such type) is an empty list, not a failure.
    pub async fn records(&self, name: &str, rtype: RecordType) -> Result<Vec<String>, LookupError> {
        self.chain
            .first_hit(
                &format!("DNS {}", rtype.as_str()),
                &[("name", name), ("type", rtype.as_str())],
                |data, _| answers(data),
            )
            .await
    }

    /// MX hosts for a mail domain.
    pub async fn mx(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        self.records(domain, RecordType::Mx).await
    }

    /// A, MX and NS for a domain, each queried independently.
    ///
    /// A record type whose providers are all exhausted is left empty. The
    /// probe fails only if none of the three could be resolved.
    pub async fn probe_domain(&self, domain: &str) -> Result<DomainRecord, LookupError> {
        let a = self.records(domain, RecordType::A).await;
        let mx = self.records(domain, RecordType::Mx).await;
        let ns = self.records(domain, RecordType::Ns).await;

        if let (Err(e), Err(_), Err(_)) = (&a, &mx, &ns) {
            return Err(LookupError::lookup_unavailable(format!(
                "no DNS data for {domain}: {}",
                e.message
            )));
        }

        let online = a.as_ref().ok().map(|records| !records.is_empty());
        Ok(DomainRecord {
            domain: domain.to_string(),
            online,
            dns: DnsRecords {
                a: a.unwrap_or_default(),
                mx: mx.unwrap_or_default(),
                ns: ns.unwrap_or_default(),
            },
        })
    }
}

/// Extract `Answer[].data`. `None` when the body is not a resolver response.
fn answers(data: &Value) -> Option<Vec<String>> {
    if !data.is_object() {
        return None;
    }
    Some(
        data.get("Answer")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|r| r.get("data").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
    )
}
