//! Structural classification of raw queries.
//!
//! Several kinds overlap (an 11-digit string is both a CPF and a phone
//! number), so the rules form an ordered list and the first match wins.
//! Reordering [`RULES`] changes observable behavior.

use super::types::IdentifierKind;

/// What the rules look at: the trimmed query and its digit count.
#[derive(Debug, Clone, Copy)]
struct Probe<'a> {
    trimmed: &'a str,
    digits: usize,
}

type Rule = fn(&Probe<'_>) -> bool;

/// Precedence table. CNPJ before CPF before CEP before phone, then the
/// non-numeric shapes.
static RULES: &[(IdentifierKind, Rule)] = &[
    (IdentifierKind::Cnpj, |p| p.digits == 14),
    // A leading '+' marks an international phone number, never a CPF.
    (IdentifierKind::Cpf, |p| {
        p.digits == 11 && !p.trimmed.starts_with('+')
    }),
    (IdentifierKind::Cep, |p| p.digits == 8),
    (IdentifierKind::Phone, |p| p.digits == 10 || p.digits == 11),
    (IdentifierKind::Email, |p| p.trimmed.contains('@')),
    (IdentifierKind::Domain, |p| {
        p.trimmed.contains('.') && !p.trimmed.contains('@')
    }),
    (IdentifierKind::Plate, |p| {
        p.trimmed.chars().filter(|&c| c != '-').count() == 7
    }),
];

/// Decide which identifier kind `raw` represents.
///
/// Deterministic and total: every input maps to exactly one kind, with
/// [`IdentifierKind::Unknown`] when no rule matches.
pub fn classify(raw: &str) -> IdentifierKind {
    let trimmed = raw.trim();
    let probe = Probe {
        trimmed,
        digits: trimmed.chars().filter(char::is_ascii_digit).count(),
    };

    RULES
        .iter()
        .find(|(_, rule)| rule(&probe))
        .map_or(IdentifierKind::Unknown, |&(kind, _)| kind)
}

/// Strip everything but ASCII digits.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
