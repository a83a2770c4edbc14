//! # sonda
//!
//! Detection, validation and public lookups for Brazilian identifiers:
//! CPF, CNPJ, CEP, phone numbers, e-mail addresses, domains and vehicle plates.
//!
//! Classification and validation are pure and run offline. Registry and DNS
//! lookups fall back through an ordered list of public providers, and a batch
//! runner resolves many queries with bounded concurrency.
//!
//! ## Quick Start
//!
//! ```rust
//! use sonda::core::*;
//! use sonda::taxid::validate_cpf;
//! use sonda::decompose::decompose_phone;
//!
//! assert_eq!(classify("111.444.777-35"), IdentifierKind::Cpf);
//! assert!(validate_cpf("111.444.777-35").unwrap().valid);
//!
//! let phone = decompose_phone("(11) 98888-7777").unwrap();
//! assert_eq!(phone.line_type, LineType::Mobile);
//! assert_eq!(phone.formatted, "(11) 98888-7777");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Types, classifier, CPF/CNPJ check digits, phone/e-mail/plate decomposition |
//! | `lookup` | CNPJ, CEP and DNS provider clients, `Resolver` |
//! | `bulk` | Semaphore-bounded batch runner |
//! | `cli` | The `sonda` binary |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod taxid;

#[cfg(feature = "core")]
pub mod decompose;

#[cfg(feature = "lookup")]
pub mod lookup;

#[cfg(feature = "bulk")]
pub mod bulk;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
