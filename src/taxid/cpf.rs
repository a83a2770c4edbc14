//! CPF (Cadastro de Pessoas Físicas) validation.

use crate::core::tables::cpf_fiscal_region;
use crate::core::{CpfRecord, LookupError, digits_only};

use super::{all_same, is_digits, to_digits};

/// Compute both CPF check digits from the first nine digits.
///
/// Each digit is `(weighted_sum * 10 mod 11) mod 10`, with weights 10..2 for
/// the first and 11..2 (over the nine digits plus the first check digit) for
/// the second.
pub fn cpf_check_digits(base: &[u8; 9]) -> (u8, u8) {
    let d1 = mod11(base.iter().copied(), 10);
    let d2 = mod11(base.iter().copied().chain(std::iter::once(d1)), 11);
    (d1, d2)
}

fn mod11(digits: impl Iterator<Item = u8>, first_weight: u32) -> u8 {
    let sum: u32 = digits
        .zip((2..=first_weight).rev())
        .map(|(d, w)| u32::from(d) * w)
        .sum();
    ((sum * 10 % 11) % 10) as u8
}

/// Format 11 digits as `000.000.000-00`.
///
/// Returns `None` unless `cpf` is exactly 11 ASCII digits.
pub fn format_cpf(cpf: &str) -> Option<String> {
    is_digits(cpf, 11).then(|| {
        format!("{}.{}.{}-{}", &cpf[..3], &cpf[3..6], &cpf[6..9], &cpf[9..])
    })
}

/// Validate a CPF.
///
/// Wrong length or a repeated-digit number is an
/// [`InvalidFormat`](crate::core::ErrorKind::InvalidFormat) error. A
/// well-formed number whose check digits do not match is *not* an error: the
/// returned record has `valid == false`.
pub fn validate_cpf(raw: &str) -> Result<CpfRecord, LookupError> {
    let cpf = digits_only(raw);

    if cpf.len() != 11 {
        return Err(LookupError::invalid_format(format!(
            "CPF must have 11 digits, got {}",
            cpf.len()
        )));
    }

    let digits = to_digits(&cpf);
    if all_same(&digits) {
        return Err(LookupError::invalid_format("CPF with all digits repeated"));
    }

    let mut base = [0u8; 9];
    base.copy_from_slice(&digits[..9]);
    let (d1, d2) = cpf_check_digits(&base);
    let valid = digits[9] == d1 && digits[10] == d2;

    Ok(CpfRecord {
        formatted: format_cpf(&cpf).unwrap_or_else(|| cpf.clone()),
        valid,
        probable_region: cpf_fiscal_region(digits[8])
            .unwrap_or("Desconhecido")
            .to_string(),
        cpf,
    })
}
