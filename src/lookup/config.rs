//! Lookup configuration and the default provider lists.

use std::borrow::Cow;
use std::time::Duration;

use crate::core::SondaError;

/// Per-attempt timeout applied to every provider request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A remote provider: a display name and a URL template with `{placeholder}` slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoint {
    /// Short name used in logs and in the `provider` field of records.
    pub name: Cow<'static, str>,
    /// URL template, e.g. `https://viacep.com.br/ws/{cep}/json/`.
    pub template: Cow<'static, str>,
}

impl ProviderEndpoint {
    /// Endpoint from static strings, usable in `static` tables.
    pub const fn fixed(name: &'static str, template: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            template: Cow::Borrowed(template),
        }
    }

    /// Endpoint from owned strings (e.g. a mock server URI in tests).
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            template: Cow::Owned(template.into()),
        }
    }

    /// Fill the template's `{key}` slots.
    pub fn url(&self, vars: &[(&str, &str)]) -> String {
        vars.iter()
            .fold(self.template.to_string(), |url, (key, value)| {
                url.replace(&format!("{{{key}}}"), value)
            })
    }
}

/// CNPJ registries, tried in order. Placeholder: `{cnpj}`.
pub static CNPJ_PROVIDERS: &[ProviderEndpoint] = &[
    ProviderEndpoint::fixed("receitaws", "https://receitaws.com.br/v1/cnpj/{cnpj}"),
    ProviderEndpoint::fixed("brasilapi", "https://brasilapi.com.br/api/cnpj/v1/{cnpj}"),
    ProviderEndpoint::fixed("cnpj.ws", "https://publica.cnpj.ws/cnpj/{cnpj}"),
];

/// CEP registries, tried in order. Placeholder: `{cep}`.
pub static CEP_PROVIDERS: &[ProviderEndpoint] = &[
    ProviderEndpoint::fixed("viacep", "https://viacep.com.br/ws/{cep}/json/"),
    ProviderEndpoint::fixed("brasilapi", "https://brasilapi.com.br/api/cep/v1/{cep}"),
    ProviderEndpoint::fixed("opencep", "https://opencep.com/v1/{cep}"),
];

/// DNS-over-HTTPS JSON resolvers, tried in order. Placeholders: `{name}`, `{type}`.
pub static DNS_PROVIDERS: &[ProviderEndpoint] = &[
    ProviderEndpoint::fixed("google", "https://dns.google/resolve?name={name}&type={type}"),
    ProviderEndpoint::fixed(
        "cloudflare",
        "https://cloudflare-dns.com/dns-query?name={name}&type={type}&ct=application/dns-json",
    ),
];

/// Settings for the remote lookup clients.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Timeout for a single provider attempt.
    pub timeout: Duration,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// CNPJ registries, tried in order.
    pub cnpj_providers: Vec<ProviderEndpoint>,
    /// CEP registries, tried in order.
    pub cep_providers: Vec<ProviderEndpoint>,
    /// DNS-over-HTTPS resolvers, tried in order.
    pub dns_providers: Vec<ProviderEndpoint>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("sonda/", env!("CARGO_PKG_VERSION")).to_string(),
            cnpj_providers: CNPJ_PROVIDERS.to_vec(),
            cep_providers: CEP_PROVIDERS.to_vec(),
            dns_providers: DNS_PROVIDERS.to_vec(),
        }
    }
}

impl LookupConfig {
    /// Set the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Replace the CNPJ registry list.
    pub fn with_cnpj_providers(mut self, providers: Vec<ProviderEndpoint>) -> Self {
        self.cnpj_providers = providers;
        self
    }

    /// Replace the CEP registry list.
    pub fn with_cep_providers(mut self, providers: Vec<ProviderEndpoint>) -> Self {
        self.cep_providers = providers;
        self
    }

    /// Replace the DoH resolver list.
    pub fn with_dns_providers(mut self, providers: Vec<ProviderEndpoint>) -> Self {
        self.dns_providers = providers;
        self
    }

    /// Reject settings that would make every lookup fail.
    pub fn validate(&self) -> Result<(), SondaError> {
        if self.timeout.is_zero() {
            return Err(SondaError::Config("timeout must be greater than zero".into()));
        }
        for (what, list) in [
            ("CNPJ", &self.cnpj_providers),
            ("CEP", &self.cep_providers),
            ("DNS", &self.dns_providers),
        ] {
            if list.is_empty() {
                return Err(SondaError::Config(format!("{what} provider list is empty")));
            }
        }
        Ok(())
    }
}
