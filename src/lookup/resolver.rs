//! The dispatcher: classify a query and route it to the right validator,
//! decomposer or remote client.

use std::sync::Arc;

use super::cep::CepClient;
use super::cnpj::CnpjClient;
use super::config::LookupConfig;
use super::dns::DnsClient;
use super::fetch::{Fetch, HttpFetcher};
use crate::core::{
    DomainRecord, EmailRecord, IdentifierKind, LookupError, LookupResult, SondaError, classify,
};
use crate::decompose::{decompose_email, decompose_phone, decompose_plate, normalize_domain};
use crate::taxid::validate_cpf;

/// How many MX hosts an e-mail record keeps.
const MAX_MAIL_SERVERS: usize = 3;

/// Resolves any supported identifier into a [`LookupResult`].
///
/// Cheap to clone; clients share one fetcher. Never returns an error for a
/// bad query: every failure is carried inside the result.
#[derive(Clone)]
pub struct Resolver {
    cnpj: CnpjClient,
    cep: CepClient,
    dns: DnsClient,
}

impl Resolver {
    /// Build a resolver over a `reqwest`-backed fetcher.
    pub fn new(config: LookupConfig) -> Result<Self, SondaError> {
        config.validate()?;
        let fetcher = Arc::new(HttpFetcher::new(&config)?);
        Self::with_fetcher(config, fetcher)
    }

    /// Build a resolver over any [`Fetch`] implementation.
    pub fn with_fetcher(config: LookupConfig, fetcher: Arc<dyn Fetch>) -> Result<Self, SondaError> {
        config.validate()?;
        let LookupConfig {
            timeout,
            cnpj_providers,
            cep_providers,
            dns_providers,
            ..
        } = config;

        Ok(Self {
            cnpj: CnpjClient::new(Arc::clone(&fetcher), cnpj_providers, timeout),
            cep: CepClient::new(Arc::clone(&fetcher), cep_providers, timeout),
            dns: DnsClient::new(fetcher, dns_providers, timeout),
        })
    }

    /// Classify `raw` and resolve it as whatever it turned out to be.
    pub async fn classify_and_resolve(&self, raw: &str) -> LookupResult {
        let kind = classify(raw);
        tracing::trace!(query = raw, %kind, "classified");
        self.resolve_as(kind, raw).await
    }

    /// Resolve `raw` as `kind`, skipping classification.
    pub async fn resolve_as(&self, kind: IdentifierKind, raw: &str) -> LookupResult {
        let query = raw.trim();
        match kind {
            IdentifierKind::Cpf => LookupResult::from_result(kind, validate_cpf(query)),
            IdentifierKind::Cnpj => LookupResult::from_result(kind, self.cnpj.lookup(query).await),
            IdentifierKind::Cep => LookupResult::from_result(kind, self.cep.lookup(query).await),
            IdentifierKind::Phone => LookupResult::from_result(kind, decompose_phone(query)),
            IdentifierKind::Email => LookupResult::from_result(kind, self.email(query).await),
            IdentifierKind::Domain => LookupResult::from_result(kind, self.domain(query).await),
            IdentifierKind::Plate => LookupResult::from_result(kind, decompose_plate(query)),
            IdentifierKind::Unknown => LookupResult::failure(
                kind,
                LookupError::unclassifiable(format!("could not identify '{query}'")),
            ),
        }
    }

    async fn email(&self, raw: &str) -> Result<EmailRecord, LookupError> {
        let mut record = decompose_email(raw)?;
        match self.dns.mx(&record.domain).await {
            Ok(servers) => {
                record.domain_has_mx = Some(!servers.is_empty());
                record.mail_servers = servers.into_iter().take(MAX_MAIL_SERVERS).collect();
            }
            Err(e) => {
                tracing::debug!(domain = %record.domain, reason = %e, "MX probe failed");
            }
        }
        Ok(record)
    }

    async fn domain(&self, raw: &str) -> Result<DomainRecord, LookupError> {
        let domain = normalize_domain(raw)?;
        self.dns.probe_domain(&domain).await
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver").finish_non_exhaustive()
    }
}
