use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{ErrorKind, LookupError};

/// The kind of identifier a query represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// CPF, the 11-digit individual taxpayer number.
    Cpf,
    /// CNPJ, the 14-digit company taxpayer number.
    Cnpj,
    /// CEP, the 8-digit postal code.
    Cep,
    /// Landline or mobile phone number with area code (DDD).
    Phone,
    /// E-mail address.
    Email,
    /// Internet domain name.
    Domain,
    /// Vehicle plate, legacy or Mercosul.
    Plate,
    /// Nothing matched.
    Unknown,
}

impl IdentifierKind {
    /// Stable snake_case name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Cep => "cep",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Domain => "domain",
            Self::Plate => "plate",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IdentifierKind {
    type Err = LookupError;

    /// Parse a kind name. Portuguese aliases are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            "cep" => Ok(Self::Cep),
            "phone" | "telefone" | "tel" => Ok(Self::Phone),
            "email" | "e-mail" => Ok(Self::Email),
            "domain" | "dominio" | "domínio" => Ok(Self::Domain),
            "plate" | "placa" => Ok(Self::Plate),
            other => Err(LookupError::unclassifiable(format!(
                "unknown identifier kind '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// CPF check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpfRecord {
    /// The 11 digits.
    pub cpf: String,
    /// `000.000.000-00` display form.
    pub formatted: String,
    /// Whether both check digits match.
    pub valid: bool,
    /// Issuing fiscal region guessed from the 9th digit. Advisory only:
    /// the digit reflects where the number was first issued, not residence.
    pub probable_region: String,
}

/// Company registry data for a CNPJ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CnpjRecord {
    /// The 14 digits as reported (falls back to the queried digits).
    pub cnpj: String,
    /// `00.000.000/0000-00` display form.
    pub formatted: String,
    /// Razão social.
    pub legal_name: String,
    /// Nome fantasia.
    pub trade_name: String,
    /// Registration status (e.g. "ATIVA").
    pub status: String,
    /// Date the company was opened.
    pub opened_on: Option<NaiveDate>,
    /// Main economic activity (CNAE description).
    pub main_activity: String,
    /// Registered address.
    pub address: CompanyAddress,
    /// Company phone as reported.
    pub phone: String,
    /// Company contact e-mail as reported.
    pub email: String,
    /// Capital social.
    pub share_capital: Option<Decimal>,
    /// Quadro de sócios e administradores.
    pub partners: Vec<Partner>,
    /// Name of the provider that answered.
    pub provider: String,
}

/// Registered company address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyAddress {
    /// Street name (logradouro).
    pub street: String,
    /// Street number.
    pub number: String,
    /// Neighborhood (bairro).
    pub neighborhood: String,
    /// Municipality.
    pub city: String,
    /// Two-letter state (UF).
    pub state: String,
    /// CEP of the address, as reported.
    pub postal_code: String,
}

/// A partner or administrator listed for a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    /// Partner or administrator name.
    pub name: String,
    /// Qualification, e.g. "49-Sócio-Administrador".
    pub role: String,
}

/// Address data for a CEP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CepRecord {
    /// The 8 digits.
    pub cep: String,
    /// `00000-000` display form.
    pub formatted: String,
    /// Street name (logradouro).
    pub street: String,
    /// Neighborhood (bairro).
    pub neighborhood: String,
    /// Municipality (localidade).
    pub city: String,
    /// Two-letter state (UF).
    pub state: String,
    /// Phone area code (DDD), when the provider reports it.
    pub area_code: String,
    /// IBGE municipality code, when the provider reports it.
    pub ibge: String,
    /// Name of the provider that answered.
    pub provider: String,
}

/// Phone line type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineType {
    /// Nine-digit subscriber number starting with 9.
    Mobile,
    /// Anything else, treated as a landline.
    Fixed,
}

/// Decomposed phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneRecord {
    /// Area code plus subscriber number, country code removed.
    pub phone: String,
    /// Two-digit DDD.
    pub area_code: String,
    /// Subscriber number without the area code.
    pub number: String,
    /// Region served by the area code.
    pub region: String,
    /// Mobile or fixed line.
    pub line_type: LineType,
    /// `(DD) XXXXX-XXXX` for mobile, `(DD) XXXX-XXXX` for fixed lines.
    pub formatted: String,
}

/// Decomposed e-mail address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    /// Lowercased address.
    pub email: String,
    /// Everything after the `@`.
    pub domain: String,
    /// Hex SHA-1 of the lowercased address.
    pub sha1: String,
    /// Hex SHA-256 of the lowercased address.
    pub sha256: String,
    /// `None` when the MX probe could not be completed.
    pub domain_has_mx: Option<bool>,
    /// Up to three MX hosts.
    pub mail_servers: Vec<String>,
}

/// DNS records collected for a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecords {
    /// IPv4 addresses.
    #[serde(rename = "A", default, skip_serializing_if = "Vec::is_empty")]
    pub a: Vec<String>,
    /// Mail exchangers as `preference host`.
    #[serde(rename = "MX", default, skip_serializing_if = "Vec::is_empty")]
    pub mx: Vec<String>,
    /// Authoritative name servers.
    #[serde(rename = "NS", default, skip_serializing_if = "Vec::is_empty")]
    pub ns: Vec<String>,
}

/// DNS probe for a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    /// Normalized name that was probed.
    pub domain: String,
    /// Whether the domain resolves to at least one A record.
    /// `None` when the A query could not be completed.
    pub online: Option<bool>,
    /// Records found per type; empty sets are omitted when serialized.
    pub dns: DnsRecords,
}

/// Plate layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateFormat {
    /// `AAA-9999`, used before 2018.
    Legacy,
    /// `AAA9A99`, the Mercosul layout.
    Mercosul,
}

/// Decomposed vehicle plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateRecord {
    /// Uppercase, separators removed.
    pub plate: String,
    /// `AAA-9999` for legacy plates; Mercosul plates are left as-is.
    pub formatted: String,
    /// Legacy or Mercosul, from the fifth character.
    pub format: PlateFormat,
    /// Best-effort issuing state from the first letter.
    pub probable_state: String,
}

/// Success payload of a lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    /// See [`CpfRecord`].
    Cpf(CpfRecord),
    /// See [`CnpjRecord`].
    Cnpj(CnpjRecord),
    /// See [`CepRecord`].
    Cep(CepRecord),
    /// See [`PhoneRecord`].
    Phone(PhoneRecord),
    /// See [`EmailRecord`].
    Email(EmailRecord),
    /// See [`DomainRecord`].
    Domain(DomainRecord),
    /// See [`PlateRecord`].
    Plate(PlateRecord),
}

impl Record {
    /// The identifier kind this record belongs to.
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Self::Cpf(_) => IdentifierKind::Cpf,
            Self::Cnpj(_) => IdentifierKind::Cnpj,
            Self::Cep(_) => IdentifierKind::Cep,
            Self::Phone(_) => IdentifierKind::Phone,
            Self::Email(_) => IdentifierKind::Email,
            Self::Domain(_) => IdentifierKind::Domain,
            Self::Plate(_) => IdentifierKind::Plate,
        }
    }
}

macro_rules! record_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Record {
                fn from(r: $ty) -> Self {
                    Self::$variant(r)
                }
            }
        )*
    };
}

record_from! {
    Cpf => CpfRecord,
    Cnpj => CnpjRecord,
    Cep => CepRecord,
    Phone => PhoneRecord,
    Email => EmailRecord,
    Domain => DomainRecord,
    Plate => PlateRecord,
}

/// Either a populated record or an error, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Serialized under the `result` key.
    Result(Record),
    /// Serialized under the `error` key.
    Error(LookupError),
}

/// Outcome of classifying and resolving one query.
///
/// Serializes as `{"type": "<kind>", "result": {...}}` or
/// `{"type": "<kind>", "error": {"kind": ..., "message": ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    #[serde(rename = "type")]
    kind: IdentifierKind,
    #[serde(flatten)]
    outcome: Outcome,
}

impl LookupResult {
    /// Successful result; the kind is taken from the record.
    pub fn success(record: impl Into<Record>) -> Self {
        let record = record.into();
        Self {
            kind: record.kind(),
            outcome: Outcome::Result(record),
        }
    }

    /// Failed result for a query classified as `kind`.
    pub fn failure(kind: IdentifierKind, error: LookupError) -> Self {
        Self {
            kind,
            outcome: Outcome::Error(error),
        }
    }

    /// Build from a validator's result.
    pub fn from_result<R: Into<Record>>(kind: IdentifierKind, result: Result<R, LookupError>) -> Self {
        match result {
            Ok(record) => Self::success(record),
            Err(e) => Self::failure(kind, e),
        }
    }

    /// Kind the query was classified (or forced) as.
    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    /// The record or the error.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The record, if this result is a success.
    pub fn record(&self) -> Option<&Record> {
        match &self.outcome {
            Outcome::Result(r) => Some(r),
            Outcome::Error(_) => None,
        }
    }

    /// The error, if this result is a failure.
    pub fn error(&self) -> Option<&LookupError> {
        match &self.outcome {
            Outcome::Result(_) => None,
            Outcome::Error(e) => Some(e),
        }
    }

    /// Kind of the error, if this result is a failure.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error().map(|e| e.kind)
    }

    /// Whether a record was produced.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Result(_))
    }

    /// Convert into a plain `Result`.
    pub fn into_result(self) -> Result<Record, LookupError> {
        match self.outcome {
            Outcome::Result(r) => Ok(r),
            Outcome::Error(e) => Err(e),
        }
    }
}
