//! Remote lookups: CNPJ registries, CEP registries and DNS-over-HTTPS.
//!
//! Each client owns an ordered list of [`ProviderEndpoint`]s and falls back
//! through them one attempt at a time. Transport is abstracted behind
//! [`Fetch`] so the clients can be driven by a mock server or a stub.
//!
//! [`Resolver`] ties everything together and is the entry point for
//! resolving an arbitrary query.
//!
//! ```no_run
//! use sonda::lookup::{LookupConfig, Resolver};
//!
//! # async fn run() -> Result<(), sonda::core::SondaError> {
//! let resolver = Resolver::new(LookupConfig::default())?;
//! let result = resolver.classify_and_resolve("01001-000").await;
//! println!("{}", result.kind());
//! # Ok(())
//! # }
//! ```

mod cep;
mod chain;
mod cnpj;
mod config;
mod dns;
mod fetch;
mod json;
mod resolver;

pub use cep::CepClient;
pub use cnpj::CnpjClient;
pub use config::{
    CEP_PROVIDERS, CNPJ_PROVIDERS, DEFAULT_TIMEOUT, DNS_PROVIDERS, LookupConfig, ProviderEndpoint,
};
pub use dns::{DnsClient, RecordType};
pub use fetch::{Fetch, FetchError, HttpFetcher};
pub use resolver::Resolver;
