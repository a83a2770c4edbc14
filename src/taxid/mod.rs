//! CPF and CNPJ check-digit validation.
//!
//! Both validators are pure and never touch the network. Input may carry the
//! usual punctuation (`111.444.777-35`, `11.222.333/0001-81`); everything but
//! digits is stripped first.
//!
//! # Example
//!
//! ```
//! use sonda::taxid::*;
//!
//! let cpf = validate_cpf("111.444.777-35").unwrap();
//! assert!(cpf.valid);
//!
//! let cnpj = validate_cnpj("11.222.333/0001-81").unwrap();
//! assert!(cnpj.valid);
//! assert_eq!(cnpj.formatted, "11.222.333/0001-81");
//! ```

mod cnpj;
mod cpf;

pub use cnpj::{CnpjCheck, cnpj_check_digits, format_cnpj, validate_cnpj};
pub use cpf::{cpf_check_digits, format_cpf, validate_cpf};

/// True when `s` is exactly `len` ASCII digits.
fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a string of ASCII digits into their numeric values.
fn to_digits(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b - b'0').collect()
}

/// True when every digit is the same (`00000000000`, `11111111111`, ...).
/// Such numbers pass the checksum but are never issued.
fn all_same(digits: &[u8]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}
