#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        let _ = sonda::taxid::validate_cpf(s);
        let _ = sonda::taxid::validate_cnpj(s);
        let _ = sonda::decompose::decompose_phone(s);
        let _ = sonda::decompose::decompose_plate(s);
        let _ = sonda::decompose::decompose_email(s);
        let _ = sonda::decompose::normalize_domain(s);
    }
});
