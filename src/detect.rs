//! Card brand detection using IIN prefix ranges.
//!
//! Brands are resolved against a fixed rule table, first match wins. Each
//! rule compares the numeric value of the leading `width` digits against an
//! inclusive range. Length is not considered here; see
//! [`CardNumber::is_valid`](crate::CardNumber::is_valid).

use crate::Brand;

/// One prefix range belonging to a brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRule {
    /// Brand reported when this rule matches.
    pub brand: Brand,
    /// Number of leading digits compared.
    pub width: usize,
    /// Lowest matching prefix value (inclusive).
    pub low: u32,
    /// Highest matching prefix value (inclusive).
    pub high: u32,
}

impl PrefixRule {
    const fn new(brand: Brand, width: usize, low: u32, high: u32) -> Self {
        Self {
            brand,
            width,
            low,
            high,
        }
    }

    /// Returns true if the leading digits fall inside this rule's range.
    ///
    /// A rule wider than the input never matches.
    #[inline]
    pub fn matches(&self, digits: &str) -> bool {
        prefix_value(digits, self.width)
            .map(|value| (self.low..=self.high).contains(&value))
            .unwrap_or(false)
    }
}

/// Prefix rules in precedence order.
pub const PREFIX_RULES: &[PrefixRule] = &[
    // Visa: 4
    PrefixRule::new(Brand::Visa, 1, 4, 4),
    // American Express: 34, 37
    PrefixRule::new(Brand::AmericanExpress, 2, 34, 34),
    PrefixRule::new(Brand::AmericanExpress, 2, 37, 37),
    // Discover: 65, 6011, 644-649, 622126-622925
    PrefixRule::new(Brand::Discover, 2, 65, 65),
    PrefixRule::new(Brand::Discover, 4, 6011, 6011),
    PrefixRule::new(Brand::Discover, 3, 644, 649),
    PrefixRule::new(Brand::Discover, 6, 622126, 622925),
    // MasterCard: 51-55, 2221-2720
    PrefixRule::new(Brand::MasterCard, 2, 51, 55),
    PrefixRule::new(Brand::MasterCard, 4, 2221, 2720),
];

/// Parses the first `width` digits as an unsigned number.
///
/// Returns `None` if the input is shorter than `width` or the prefix is not
/// all ASCII digits. Leading zeros are kept in the digit count, so the
/// two-digit prefix of `"05..."` is 5.
///
/// # Example
///
/// ```
/// use cardcheck::detect::prefix_value;
///
/// assert_eq!(prefix_value("6011111111111117", 4), Some(6011));
/// assert_eq!(prefix_value("0512", 2), Some(5));
/// assert_eq!(prefix_value("41", 3), None);
/// ```
#[inline]
pub fn prefix_value(digits: &str, width: usize) -> Option<u32> {
    let prefix = digits.as_bytes().get(..width)?;
    prefix.iter().try_fold(0u32, |acc, &b| {
        if b.is_ascii_digit() {
            acc.checked_mul(10)?.checked_add((b - b'0') as u32)
        } else {
            None
        }
    })
}

/// Detects the card brand from a normalized digit string.
///
/// # Example
///
/// ```
/// use cardcheck::detect::detect_brand;
/// use cardcheck::Brand;
///
/// assert_eq!(detect_brand("4111111111111111"), Some(Brand::Visa));
/// assert_eq!(detect_brand("378282246310005"), Some(Brand::AmericanExpress));
/// assert_eq!(detect_brand("123456789012"), None);
/// ```
#[inline]
pub fn detect_brand(digits: &str) -> Option<Brand> {
    PREFIX_RULES
        .iter()
        .find(|rule| rule.matches(digits))
        .map(|rule| rule.brand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visa_detection() {
        assert_eq!(detect_brand("4111111111111111"), Some(Brand::Visa));
        assert_eq!(detect_brand("4222222222222"), Some(Brand::Visa));
        // Length is not checked here
        assert_eq!(detect_brand("4"), Some(Brand::Visa));
    }

    #[test]
    fn test_mastercard_detection() {
        assert_eq!(detect_brand("5100000000000000"), Some(Brand::MasterCard));
        assert_eq!(detect_brand("5555555555554444"), Some(Brand::MasterCard));
        assert_eq!(detect_brand("2221000000000000"), Some(Brand::MasterCard));
        assert_eq!(detect_brand("2720990000000000"), Some(Brand::MasterCard));

        // Range edges
        assert_eq!(detect_brand("5000000000000000"), None);
        assert_eq!(detect_brand("5600000000000000"), None);
        assert_eq!(detect_brand("2220990000000000"), None);
        assert_eq!(detect_brand("2721000000000000"), None);
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(detect_brand("340000000000009"), Some(Brand::AmericanExpress));
        assert_eq!(detect_brand("378282246310005"), Some(Brand::AmericanExpress));
        assert_eq!(detect_brand("350000000000000"), None);
        assert_eq!(detect_brand("360000000000000"), None);
    }

    #[test]
    fn test_discover_detection() {
        assert_eq!(detect_brand("6011111111111117"), Some(Brand::Discover));
        assert_eq!(detect_brand("6500000000000000"), Some(Brand::Discover));
        assert_eq!(detect_brand("6440000000000000"), Some(Brand::Discover));
        assert_eq!(detect_brand("6490000000000000"), Some(Brand::Discover));
        assert_eq!(detect_brand("6221260000000000"), Some(Brand::Discover));
        assert_eq!(detect_brand("6229250000000000"), Some(Brand::Discover));

        assert_eq!(detect_brand("6012000000000000"), None);
        assert_eq!(detect_brand("6430000000000000"), None);
        assert_eq!(detect_brand("6221250000000000"), None);
        assert_eq!(detect_brand("6229260000000000"), None);
    }

    #[test]
    fn test_short_inputs_skip_wide_rules() {
        // Too short for the six-digit Discover range
        assert_eq!(detect_brand("62212"), None);
        // Too short for 6011, but 60 matches nothing narrower
        assert_eq!(detect_brand("601"), None);
        // Two digits are enough for the 65 rule
        assert_eq!(detect_brand("65"), Some(Brand::Discover));
        // A lone 3 or 5 cannot satisfy any two-digit rule
        assert_eq!(detect_brand("3"), None);
        assert_eq!(detect_brand("5"), None);
    }

    #[test]
    fn test_visa_checked_first() {
        let first = PREFIX_RULES.first().map(|rule| rule.brand);
        assert_eq!(first, Some(Brand::Visa));
        for digits in ["4", "40", "4011", "4221", "401100"] {
            assert_eq!(detect_brand(digits), Some(Brand::Visa));
        }
    }

    #[test]
    fn test_unknown_brand() {
        assert_eq!(detect_brand("0000000000000000"), None);
        assert_eq!(detect_brand("1000000000000000"), None);
        assert_eq!(detect_brand("9000000000000000"), None);
        assert_eq!(detect_brand("123456789012"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(detect_brand(""), None);
    }

    #[test]
    fn test_prefix_value() {
        assert_eq!(prefix_value("4111", 1), Some(4));
        assert_eq!(prefix_value("0512", 2), Some(5));
        assert_eq!(prefix_value("622126", 6), Some(622126));
        assert_eq!(prefix_value("62", 6), None);
        assert_eq!(prefix_value("4x", 2), None);
        assert_eq!(prefix_value("", 0), Some(0));
    }
}
