//! Fuzz target for card construction.
//!
//! Construction and every query on the result must never panic, and the
//! masked forms must never contain more than the last four digits.

#![no_main]

use cardcheck::{report::LineOutcome, CardNumber};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = LineOutcome::from_line(data).to_string();

    let Ok(card) = CardNumber::new(data) else {
        return;
    };

    assert!(!card.digits().is_empty());
    assert!(card.digits().bytes().all(|b| b.is_ascii_digit()));
    assert_eq!(card.original_input(), data);

    let _ = card.brand();
    let _ = card.is_valid();

    let masked = card.masked();
    assert_eq!(masked.len(), card.length());
    let hidden = card.length().saturating_sub(4);
    assert!(masked[..hidden].bytes().all(|b| b == b'*'));

    // Re-normalizing the digits gives the same card
    let again = CardNumber::new(card.digits()).expect("digits always normalize");
    assert_eq!(card, again);
});
