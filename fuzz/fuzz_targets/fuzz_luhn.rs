#![no_main]

use libfuzzer_sys::fuzz_target;

use cardgen_core::luhn::{compute_check_digit, is_luhn_valid};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if s.len() > 64 {
        return;
    }

    let valid = is_luhn_valid(s);
    match compute_check_digit(s) {
        Some(digit) => {
            assert!(digit <= 9);
            let full = format!("{s}{digit}");
            assert!(is_luhn_valid(&full), "check digit {digit} for {s:?} is wrong");
        }
        None => assert!(!valid, "non-digit input {s:?} accepted"),
    }
});
