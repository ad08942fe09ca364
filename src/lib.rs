//! # cardcheck
//!
//! Payment card number validation: normalization, brand detection and the
//! Luhn checksum, wrapped in a single [`CardNumber`] value type.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardcheck::{Brand, CardNumber, ValidationError};
//!
//! // Spaces and hyphens are formatting
//! let card = CardNumber::new("4111-1111-1111-1111").unwrap();
//! assert_eq!(card.digits(), "4111111111111111");
//! assert_eq!(card.brand(), Some(Brand::Visa));
//! assert!(card.is_valid());
//!
//! // Safe for logging - never exposes more than the last four digits
//! assert_eq!(card.to_string(), "Visa ************1111 (valid)");
//!
//! // Anything else is rejected outright
//! assert!(matches!(
//!     CardNumber::new("4111abcd"),
//!     Err(ValidationError::InvalidCharacter { .. })
//! ));
//! ```
//!
//! ## Validity
//!
//! A card is valid when it has 13 to 16 digits, a known brand prefix, and a
//! correct Luhn check digit. Construction only fails on bad characters or
//! empty input; an invalid card is still a `CardNumber`.
//!
//! ```rust
//! use cardcheck::CardNumber;
//!
//! let card = CardNumber::new("4111111111111112").unwrap();
//! assert!(!card.is_valid());
//! ```
//!
//! ## Batch Reports
//!
//! ```rust
//! use cardcheck::report::process_lines;
//!
//! let mut out = Vec::new();
//! let summary = process_lines("6011111111111117\n4111abcd\n".as_bytes(), &mut out).unwrap();
//! assert_eq!((summary.valid, summary.invalid), (1, 1));
//! ```
//!
//! ## Supported Card Brands
//!
//! | Brand | Prefix |
//! |-------|--------|
//! | Visa | 4 |
//! | American Express | 34, 37 |
//! | Discover | 65, 6011, 644-649, 622126-622925 |
//! | MasterCard | 51-55, 2221-2720 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `parallel` | Rayon-based batch checking |
//! | `serde` | `Serialize` for brands and report lines |
//! | `cli` | Command-line tool |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod card;
pub mod detect;
pub mod error;
pub mod luhn;
pub mod mask;
pub mod normalize;
pub mod report;

// Re-export main types at crate root
pub use batch::{is_valid, BatchValidator, Tally};
pub use card::{Brand, CardNumber, MAX_VALID_DIGITS, MIN_VALID_DIGITS};
pub use error::{ReportError, ValidationError};
pub use report::{LineOutcome, ReportSummary};

#[cfg(test)]
mod tests {
    use super::*;

    const VISA: &str = "4111111111111111";
    const MASTERCARD: &str = "5555555555554444";
    const AMEX: &str = "378282246310005";
    const DISCOVER: &str = "6011111111111117";

    #[test]
    fn test_known_good_cards() {
        for (input, brand) in [
            (VISA, Brand::Visa),
            (MASTERCARD, Brand::MasterCard),
            (AMEX, Brand::AmericanExpress),
            (DISCOVER, Brand::Discover),
        ] {
            let card = CardNumber::new(input).unwrap();
            assert_eq!(card.brand(), Some(brand), "{}", input);
            assert!(card.is_valid(), "{}", input);
        }
    }

    #[test]
    fn test_bad_checksum() {
        let card = CardNumber::new("4111111111111112").unwrap();
        assert_eq!(card.brand(), Some(Brand::Visa));
        assert!(!card.is_valid());
    }

    #[test]
    fn test_unknown_twelve_digits() {
        let card = CardNumber::new("123456789012").unwrap();
        assert_eq!(card.brand(), None);
        assert!(!card.is_valid());
    }

    #[test]
    fn test_is_valid_shortcut() {
        assert!(is_valid(VISA));
        assert!(is_valid("3782 822463 10005"));
        assert!(!is_valid(""));
        assert!(!is_valid("4111111111111112"));
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardNumber>();
        assert_send_sync::<ValidationError>();
        assert_send_sync::<Brand>();
        assert_send_sync::<BatchValidator>();
        assert_send_sync::<LineOutcome>();
    }
}
