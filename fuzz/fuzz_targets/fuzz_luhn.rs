//! Fuzz target for the Luhn functions.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use cardcheck::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Clamp values to ASCII digits
    let digits: String = data.iter().map(|&b| char::from(b'0' + b % 10)).collect();

    if digits.is_empty() {
        return;
    }

    let _ = luhn::validate(&digits);

    if digits.len() <= 18 {
        let check = luhn::generate_check_digit(&digits).expect("non-empty prefix");
        assert!(check <= 9, "Check digit should be 0-9");

        let with_check = format!("{}{}", digits, check);
        assert!(luhn::validate(&with_check), "Adding check digit should make valid");
    }
});
