#![no_main]

use libfuzzer_sys::fuzz_target;

use cardgen_core::checker::check_input;
use cardgen_core::luhn::is_luhn_valid;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let report = check_input(&input);

    assert_eq!(report.total, report.valid + report.invalid);
    for card in &report.accepted {
        assert!(is_luhn_valid(&card.number));
        assert!((13..=19).contains(&card.number.len()));
    }
});
