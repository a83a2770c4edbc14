//! CNPJ company registry client.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;

use super::chain::ProviderChain;
use super::config::ProviderEndpoint;
use super::fetch::Fetch;
use super::json::{pick, pick_opt};
use crate::core::{CnpjRecord, CompanyAddress, LookupError, Partner};
use crate::taxid::{format_cnpj, validate_cnpj};

/// Looks up company data for a CNPJ across the configured providers.
#[derive(Clone)]
pub struct CnpjClient {
    chain: ProviderChain,
}

impl CnpjClient {
    pub fn new(fetcher: Arc<dyn Fetch>, providers: Vec<ProviderEndpoint>, timeout: Duration) -> Self {
        Self {
            chain: ProviderChain::new(fetcher, providers, timeout),
        }
    }

    /// Validate locally, then query the registries.
    ///
    /// A malformed number or a check-digit mismatch is returned without any
    /// request being made.
    pub async fn lookup(&self, raw: &str) -> Result<CnpjRecord, LookupError> {
        let check = validate_cnpj(raw)?;
        if !check.valid {
            return Err(LookupError::checksum_mismatch(format!(
                "CNPJ {} has invalid check digits",
                check.formatted
            )));
        }

        let cnpj = check.cnpj;
        self.chain
            .first_hit("CNPJ", &[("cnpj", cnpj.as_str())], |data, provider| {
                normalize(data, &cnpj, &provider.name)
            })
            .await
    }
}

/// Map ReceitaWS / BrasilAPI / CNPJ.ws responses onto one record.
///
/// ReceitaWS reports errors with HTTP 200 and `"status": "ERROR"`; that counts
/// as no data.
pub(crate) fn normalize(data: &Value, queried: &str, provider: &str) -> Option<CnpjRecord> {
    if !data.is_object() || data.get("status").and_then(Value::as_str) == Some("ERROR") {
        return None;
    }

    let reported = pick(data, &["/cnpj", "/estabelecimento/cnpj"]);
    let cnpj = if reported.is_empty() {
        queried.to_string()
    } else {
        reported
    };
    let digits: String = cnpj.chars().filter(char::is_ascii_digit).collect();
    let formatted = format_cnpj(&digits)
        .or_else(|| format_cnpj(queried))
        .unwrap_or_default();

    Some(CnpjRecord {
        cnpj,
        formatted,
        legal_name: pick(data, &["/nome", "/razao_social"]),
        trade_name: pick(
            data,
            &["/fantasia", "/nome_fantasia", "/estabelecimento/nome_fantasia"],
        ),
        status: pick(
            data,
            &[
                "/situacao",
                "/descricao_situacao_cadastral",
                "/estabelecimento/situacao_cadastral",
            ],
        ),
        opened_on: pick_opt(
            data,
            &[
                "/abertura",
                "/data_inicio_atividade",
                "/estabelecimento/data_inicio_atividade",
            ],
        )
        .and_then(|s| parse_date(&s)),
        main_activity: main_activity(data),
        address: CompanyAddress {
            street: pick(data, &["/logradouro", "/estabelecimento/logradouro"]),
            number: pick(data, &["/numero", "/estabelecimento/numero"]),
            neighborhood: pick(data, &["/bairro", "/estabelecimento/bairro"]),
            city: pick(data, &["/municipio", "/estabelecimento/cidade/nome"]),
            state: pick(data, &["/uf", "/estabelecimento/estado/sigla"]),
            postal_code: pick(data, &["/cep", "/estabelecimento/cep"]),
        },
        phone: pick(
            data,
            &["/telefone", "/ddd_telefone_1", "/estabelecimento/telefone1"],
        ),
        email: pick(data, &["/email", "/estabelecimento/email"]),
        share_capital: pick_opt(data, &["/capital_social"]).and_then(|s| parse_decimal(&s)),
        partners: partners(data),
        provider: provider.to_string(),
    })
}

/// ReceitaWS lists activities as `[{"code", "text"}]`; BrasilAPI has a flat
/// `cnae_fiscal_descricao`; CNPJ.ws nests one object.
fn main_activity(data: &Value) -> String {
    match data.get("atividade_principal") {
        Some(Value::Array(items)) => items
            .first()
            .map(|first| pick(first, &["/text"]))
            .unwrap_or_default(),
        _ => pick(
            data,
            &[
                "/cnae_fiscal_descricao",
                "/estabelecimento/atividade_principal/descricao",
            ],
        ),
    }
}

fn partners(data: &Value) -> Vec<Partner> {
    let list = data
        .get("qsa")
        .or_else(|| data.get("socios"))
        .and_then(Value::as_array);

    list.map(|items| {
        items
            .iter()
            .map(|p| Partner {
                name: pick(p, &["/nome", "/nome_socio"]),
                role: pick(
                    p,
                    &["/qual", "/qualificacao_socio", "/qualificacao_socio/descricao"],
                ),
            })
            .filter(|p| !p.name.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// ReceitaWS uses `dd/mm/yyyy`, the others ISO dates.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    const CNPJ: &str = "11222333000181";

    #[test]
    fn receitaws_shape() {
        let data = json!({
            "status": "OK",
            "cnpj": "11.222.333/0001-81",
            "nome": "ACME COMERCIO LTDA",
            "fantasia": "ACME",
            "situacao": "ATIVA",
            "abertura": "03/05/2005",
            "atividade_principal": [{"code": "47.51-2-01", "text": "Comércio varejista"}],
            "logradouro": "RUA DAS FLORES",
            "numero": "100",
            "bairro": "CENTRO",
            "municipio": "CURITIBA",
            "uf": "PR",
            "cep": "80.010-000",
            "telefone": "(41) 3333-4444",
            "email": "contato@acme.com.br",
            "capital_social": "150000.00",
            "qsa": [{"nome": "FULANO DE TAL", "qual": "49-Sócio-Administrador"}]
        });
        let r = normalize(&data, CNPJ, "receitaws").unwrap();
        assert_eq!(r.legal_name, "ACME COMERCIO LTDA");
        assert_eq!(r.trade_name, "ACME");
        assert_eq!(r.opened_on, NaiveDate::from_ymd_opt(2005, 5, 3));
        assert_eq!(r.main_activity, "Comércio varejista");
        assert_eq!(r.address.city, "CURITIBA");
        assert_eq!(r.share_capital, Some(dec!(150000.00)));
        assert_eq!(r.partners.len(), 1);
        assert_eq!(r.partners[0].role, "49-Sócio-Administrador");
        assert_eq!(r.formatted, "11.222.333/0001-81");
    }

    #[test]
    fn brasilapi_shape() {
        let data = json!({
            "cnpj": "11222333000181",
            "razao_social": "ACME COMERCIO LTDA",
            "nome_fantasia": "",
            "descricao_situacao_cadastral": "ATIVA",
            "data_inicio_atividade": "2005-05-03",
            "cnae_fiscal_descricao": "Comércio varejista",
            "municipio": "CURITIBA",
            "uf": "PR",
            "capital_social": 1000,
            "qsa": [{"nome_socio": "FULANO DE TAL", "qualificacao_socio": "Sócio-Administrador"}]
        });
        let r = normalize(&data, CNPJ, "brasilapi").unwrap();
        assert_eq!(r.legal_name, "ACME COMERCIO LTDA");
        assert_eq!(r.status, "ATIVA");
        assert_eq!(r.opened_on, NaiveDate::from_ymd_opt(2005, 5, 3));
        assert_eq!(r.main_activity, "Comércio varejista");
        assert_eq!(r.share_capital, Some(dec!(1000)));
        assert_eq!(r.partners[0].name, "FULANO DE TAL");
        assert_eq!(r.partners[0].role, "Sócio-Administrador");
    }

    #[test]
    fn cnpj_ws_shape() {
        let data = json!({
            "razao_social": "ACME COMERCIO LTDA",
            "capital_social": "5000.00",
            "socios": [{"nome": "FULANO", "qualificacao_socio": {"id": 49, "descricao": "Sócio-Administrador"}}],
            "estabelecimento": {
                "cnpj": "11222333000181",
                "nome_fantasia": "ACME",
                "situacao_cadastral": "Ativa",
                "data_inicio_atividade": "2005-05-03",
                "atividade_principal": {"descricao": "Comércio varejista"},
                "cidade": {"nome": "Curitiba"},
                "estado": {"sigla": "PR"}
            }
        });
        let r = normalize(&data, CNPJ, "cnpj.ws").unwrap();
        assert_eq!(r.cnpj, "11222333000181");
        assert_eq!(r.trade_name, "ACME");
        assert_eq!(r.main_activity, "Comércio varejista");
        assert_eq!(r.address.city, "Curitiba");
        assert_eq!(r.address.state, "PR");
        assert_eq!(r.partners[0].role, "Sócio-Administrador");
    }

    #[test]
    fn receitaws_error_is_no_data() {
        let data = json!({"status": "ERROR", "message": "CNPJ rejeitado pela Receita Federal"});
        assert!(normalize(&data, CNPJ, "receitaws").is_none());
    }

    #[test]
    fn sparse_body_falls_back_to_queried_number() {
        let r = normalize(&json!({}), CNPJ, "x").unwrap();
        assert_eq!(r.cnpj, CNPJ);
        assert_eq!(r.legal_name, "");
        assert!(r.opened_on.is_none());
        assert!(r.share_capital.is_none());
        assert!(r.partners.is_empty());
    }

    #[test]
    fn dates() {
        assert_eq!(parse_date("31/12/1999"), NaiveDate::from_ymd_opt(1999, 12, 31));
        assert_eq!(parse_date("1999-12-31"), NaiveDate::from_ymd_opt(1999, 12, 31));
        assert!(parse_date("").is_none());
    }
}
