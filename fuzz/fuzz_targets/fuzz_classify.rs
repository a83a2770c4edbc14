#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Total and deterministic.
        let kind = sonda::classify(s);
        assert_eq!(kind, sonda::classify(s));
    }
});
