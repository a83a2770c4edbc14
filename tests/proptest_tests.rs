//! Property-based tests for the check-digit algorithms and the classifier.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "core")]

use proptest::prelude::*;
use sonda::core::*;
use sonda::taxid::*;

fn join(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Nine base digits, not all identical.
fn arb_cpf_base() -> impl Strategy<Value = [u8; 9]> {
    prop::array::uniform9(0u8..10).prop_filter("repeated digits", |b| b.iter().any(|&d| d != b[0]))
}

/// Twelve base digits, not all identical.
fn arb_cnpj_base() -> impl Strategy<Value = [u8; 12]> {
    prop::array::uniform12(0u8..10)
        .prop_filter("repeated digits", |b| b.iter().any(|&d| d != b[0]))
}

fn arb_valid_cpf() -> impl Strategy<Value = String> {
    arb_cpf_base().prop_map(|base| {
        let (d1, d2) = cpf_check_digits(&base);
        let mut all = base.to_vec();
        all.extend([d1, d2]);
        join(&all)
    })
}

fn arb_valid_cnpj() -> impl Strategy<Value = String> {
    arb_cnpj_base().prop_map(|base| {
        let (d1, d2) = cnpj_check_digits(&base);
        let mut all = base.to_vec();
        all.extend([d1, d2]);
        join(&all)
    })
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// Generated CPFs validate, formatted or not.
    #[test]
    fn generated_cpf_is_valid(cpf in arb_valid_cpf()) {
        prop_assert!(validate_cpf(&cpf).unwrap().valid);
        prop_assert!(validate_cpf(&format_cpf(&cpf).unwrap()).unwrap().valid);
    }

    /// Changing the last check digit breaks a CPF.
    #[test]
    fn mutated_cpf_is_invalid(cpf in arb_valid_cpf(), bump in 1u8..10) {
        let mut digits: Vec<u8> = cpf.bytes().map(|b| b - b'0').collect();
        digits[10] = (digits[10] + bump) % 10;
        let mutated = join(&digits);
        // Skip the rare mutation that lands on a repeated-digit number.
        if let Ok(rec) = validate_cpf(&mutated) {
            prop_assert!(!rec.valid);
        }
    }

    /// Generated CNPJs validate.
    #[test]
    fn generated_cnpj_is_valid(cnpj in arb_valid_cnpj()) {
        let check = validate_cnpj(&cnpj).unwrap();
        prop_assert!(check.valid);
        prop_assert_eq!(Some(check.formatted), format_cnpj(&cnpj));
    }

    /// Changing the first check digit breaks a CNPJ.
    #[test]
    fn mutated_cnpj_is_invalid(cnpj in arb_valid_cnpj(), bump in 1u8..10) {
        let mut digits: Vec<u8> = cnpj.bytes().map(|b| b - b'0').collect();
        digits[12] = (digits[12] + bump) % 10;
        if let Ok(check) = validate_cnpj(&join(&digits)) {
            prop_assert!(!check.valid);
        }
    }

    /// Every string gets exactly one kind, the same one every time.
    #[test]
    fn classifier_is_total_and_deterministic(s in "\\PC{0,40}") {
        let kind = classify(&s);
        prop_assert_eq!(kind, classify(&s));
    }

    /// Eleven digits without a leading '+' are never a phone.
    #[test]
    fn eleven_digits_never_phone(s in "[0-9]{11}") {
        prop_assert_eq!(classify(&s), IdentifierKind::Cpf);
    }

    /// Decomposers and validators never panic.
    #[test]
    fn decomposers_total(s in "\\PC{0,30}") {
        let _ = validate_cpf(&s);
        let _ = validate_cnpj(&s);
        let _ = sonda::decompose::decompose_phone(&s);
        let _ = sonda::decompose::decompose_plate(&s);
        let _ = sonda::decompose::decompose_email(&s);
        let _ = sonda::decompose::normalize_domain(&s);
    }
}
