//! CPF and CNPJ check-digit tests.
//!
//! Run with: `cargo test --test validator_tests`

#![cfg(feature = "core")]

use sonda::core::*;
use sonda::taxid::*;

// --- CPF ---

#[test]
fn cpf_valid() {
    let rec = validate_cpf("111.444.777-35").unwrap();
    assert!(rec.valid);
    assert_eq!(rec.cpf, "11144477735");
    assert_eq!(rec.formatted, "111.444.777-35");
    assert_eq!(rec.probable_region, "ES/RJ");
}

#[test]
fn cpf_wrong_check_digit_is_invalid_record() {
    let rec = validate_cpf("111.444.777-36").unwrap();
    assert!(!rec.valid);
}

#[test]
fn cpf_wrong_length() {
    let err = validate_cpf("1114447773").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidFormat);
    let err = validate_cpf("").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidFormat);
}

#[test]
fn cpf_repeated_digits_rejected() {
    for d in 0..=9 {
        let cpf = d.to_string().repeat(11);
        let err = validate_cpf(&cpf).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidFormat, "{cpf}");
    }
}

#[test]
fn cpf_check_digits_known() {
    assert_eq!(cpf_check_digits(&[1, 1, 1, 4, 4, 4, 7, 7, 7]), (3, 5));
}

// --- CNPJ ---

#[test]
fn cnpj_valid() {
    let check = validate_cnpj("11.222.333/0001-81").unwrap();
    assert!(check.valid);
    assert_eq!(check.cnpj, "11222333000181");
    assert_eq!(check.formatted, "11.222.333/0001-81");
}

#[test]
fn cnpj_invalid() {
    let check = validate_cnpj("11.222.333/0001-82").unwrap();
    assert!(!check.valid);
}

#[test]
fn cnpj_wrong_length_and_repeats() {
    assert_eq!(
        validate_cnpj("1122233300018").unwrap_err().kind,
        ErrorKind::InvalidFormat
    );
    assert_eq!(
        validate_cnpj("00000000000000").unwrap_err().kind,
        ErrorKind::InvalidFormat
    );
}

#[test]
fn cnpj_check_digits_known() {
    assert_eq!(
        cnpj_check_digits(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]),
        (8, 1)
    );
}

#[test]
fn formatting() {
    assert_eq!(format_cpf("11144477735").as_deref(), Some("111.444.777-35"));
    assert_eq!(
        format_cnpj("11222333000181").as_deref(),
        Some("11.222.333/0001-81")
    );
}

#[test]
fn formatting_needs_exact_digits() {
    for bad in ["", "123", "111.444.777-35", "1114447773é", "111444777350"] {
        assert!(format_cpf(bad).is_none(), "{bad}");
    }
    for bad in ["", "11222333", "11.222.333/0001-81", "1122233300018é"] {
        assert!(format_cnpj(bad).is_none(), "{bad}");
    }
}

// --- Results ---

#[test]
fn cpf_result_serializes_with_type_tag() {
    let result = LookupResult::from_result(IdentifierKind::Cpf, validate_cpf("111.444.777-35"));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["type"], "cpf");
    assert_eq!(json["result"]["valid"], true);
    assert!(json.get("error").is_none());
}

#[test]
fn error_result_serializes_error_only() {
    let result = LookupResult::from_result(IdentifierKind::Cpf, validate_cpf("123"));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["type"], "cpf");
    assert_eq!(json["error"]["kind"], "invalid_format");
    assert!(json.get("result").is_none());
}
