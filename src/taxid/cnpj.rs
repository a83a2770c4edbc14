//! CNPJ (Cadastro Nacional da Pessoa Jurídica) validation.

use serde::{Deserialize, Serialize};

use crate::core::{LookupError, digits_only};

use super::{all_same, is_digits, to_digits};

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Result of a local CNPJ check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CnpjCheck {
    /// The 14 digits.
    pub cnpj: String,
    /// `00.000.000/0000-00` display form.
    pub formatted: String,
    /// Whether both check digits match.
    pub valid: bool,
}

/// Compute both CNPJ check digits from the first twelve digits.
pub fn cnpj_check_digits(base: &[u8; 12]) -> (u8, u8) {
    let d1 = weighted(base, &FIRST_WEIGHTS);
    let mut extended = [0u8; 13];
    extended[..12].copy_from_slice(base);
    extended[12] = d1;
    let d2 = weighted(&extended, &SECOND_WEIGHTS);
    (d1, d2)
}

fn weighted(digits: &[u8], weights: &[u32]) -> u8 {
    let total: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    match total % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Format 14 digits as `00.000.000/0000-00`.
///
/// Returns `None` unless `cnpj` is exactly 14 ASCII digits.
pub fn format_cnpj(cnpj: &str) -> Option<String> {
    is_digits(cnpj, 14).then(|| {
        format!(
            "{}.{}.{}/{}-{}",
            &cnpj[..2],
            &cnpj[2..5],
            &cnpj[5..8],
            &cnpj[8..12],
            &cnpj[12..]
        )
    })
}

/// Validate a CNPJ locally.
///
/// Wrong length or a repeated-digit number is an
/// [`InvalidFormat`](crate::core::ErrorKind::InvalidFormat) error; otherwise
/// the check carries `valid` for the check digits. Callers gate any registry
/// lookup on `valid`.
pub fn validate_cnpj(raw: &str) -> Result<CnpjCheck, LookupError> {
    let cnpj = digits_only(raw);

    if cnpj.len() != 14 {
        return Err(LookupError::invalid_format(format!(
            "CNPJ must have 14 digits, got {}",
            cnpj.len()
        )));
    }

    let digits = to_digits(&cnpj);
    if all_same(&digits) {
        return Err(LookupError::invalid_format("CNPJ with all digits repeated"));
    }

    let mut base = [0u8; 12];
    base.copy_from_slice(&digits[..12]);
    let (d1, d2) = cnpj_check_digits(&base);

    Ok(CnpjCheck {
        formatted: format_cnpj(&cnpj).unwrap_or_else(|| cnpj.clone()),
        valid: digits[12] == d1 && digits[13] == d2,
        cnpj,
    })
}
