//! CEP (postal code) registry client.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use super::chain::ProviderChain;
use super::config::ProviderEndpoint;
use super::fetch::Fetch;
use super::json::{pick, truthy};
use crate::core::{CepRecord, LookupError, digits_only};

/// Looks up addresses for a CEP across the configured providers.
#[derive(Clone)]
pub struct CepClient {
    chain: ProviderChain,
}

impl CepClient {
    pub fn new(fetcher: Arc<dyn Fetch>, providers: Vec<ProviderEndpoint>, timeout: Duration) -> Self {
        Self {
            chain: ProviderChain::new(fetcher, providers, timeout),
        }
    }

    /// Resolve a CEP. Anything but 8 digits fails before any request is made.
    pub async fn lookup(&self, raw: &str) -> Result<CepRecord, LookupError> {
        let cep = digits_only(raw);
        if cep.len() != 8 {
            return Err(LookupError::invalid_format(format!(
                "CEP must have 8 digits, got {}",
                cep.len()
            )));
        }

        self.chain
            .first_hit("CEP", &[("cep", cep.as_str())], |data, provider| {
                normalize(data, &cep, &provider.name)
            })
            .await
    }
}

/// Map ViaCEP / BrasilAPI / OpenCEP responses onto one record.
///
/// ViaCEP answers unknown codes with HTTP 200 and `{"erro": true}`; that
/// counts as no data.
pub(crate) fn normalize(data: &Value, cep: &str, provider: &str) -> Option<CepRecord> {
    if !data.is_object() || truthy(data.get("erro")) {
        return None;
    }

    Some(CepRecord {
        cep: cep.to_string(),
        formatted: format!("{}-{}", &cep[..5], &cep[5..]),
        street: pick(data, &["/logradouro", "/street"]),
        neighborhood: pick(data, &["/bairro", "/neighborhood"]),
        city: pick(data, &["/localidade", "/city"]),
        state: pick(data, &["/uf", "/state"]),
        area_code: pick(data, &["/ddd"]),
        ibge: pick(data, &["/ibge"]),
        provider: provider.to_string(),
    })
}
