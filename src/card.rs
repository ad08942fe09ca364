//! Core card types.
//!
//! This module provides the [`Brand`] enum for identifying card networks and
//! the [`CardNumber`] value type that owns a normalized card number.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use zeroize::Zeroize;

use crate::detect::detect_brand;
use crate::error::ValidationError;
use crate::luhn;
use crate::normalize::normalize;

/// Card networks recognized by prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Brand {
    /// Visa - Prefix 4
    Visa,
    /// MasterCard - Prefix 51-55, 2221-2720
    MasterCard,
    /// American Express - Prefix 34, 37
    #[cfg_attr(feature = "serde", serde(rename = "American Express"))]
    AmericanExpress,
    /// Discover - Prefix 65, 6011, 644-649, 622126-622925
    Discover,
}

impl Brand {
    /// Returns a human-readable name for the brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::AmericanExpress => "American Express",
            Self::Discover => "Discover",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name used wherever a card has no recognized brand.
pub const UNKNOWN_BRAND: &str = "Unknown";

/// Returns the brand name, or [`UNKNOWN_BRAND`] for `None`.
#[inline]
pub fn brand_name(brand: Option<Brand>) -> &'static str {
    brand.map_or(UNKNOWN_BRAND, |b| b.name())
}

/// Fewest digits a valid card may have.
pub const MIN_VALID_DIGITS: usize = 13;

/// Most digits a valid card may have.
pub const MAX_VALID_DIGITS: usize = 16;

/// A normalized card number.
///
/// Normalization happens once, at construction. The value is read-only
/// afterwards except for [`set_input`](Self::set_input), which replaces the
/// whole number or leaves it untouched.
///
/// Two card numbers are equal when their digits are equal, regardless of
/// how the original input was formatted.
///
/// # Security
///
/// - `Debug` and `Display` show at most the last four digits
/// - Raw input and digits are zeroed on drop using the `zeroize` crate
#[derive(Clone)]
pub struct CardNumber {
    /// Input exactly as supplied.
    raw_input: String,
    /// ASCII digits extracted from `raw_input`; never empty.
    digits: String,
}

impl CardNumber {
    /// Normalizes `input` into a card number.
    ///
    /// # Errors
    ///
    /// Fails with [`ValidationError::InvalidCharacter`] or
    /// [`ValidationError::EmptyResult`]; see
    /// [`normalize`](crate::normalize::normalize).
    ///
    /// # Example
    ///
    /// ```
    /// use cardcheck::{Brand, CardNumber};
    ///
    /// let card = CardNumber::new("4111 1111 1111 1111").unwrap();
    /// assert_eq!(card.digits(), "4111111111111111");
    /// assert_eq!(card.original_input(), "4111 1111 1111 1111");
    /// assert_eq!(card.brand(), Some(Brand::Visa));
    /// assert!(card.is_valid());
    /// ```
    pub fn new(input: &str) -> Result<Self, ValidationError> {
        let digits = normalize(input)?;
        Ok(Self {
            raw_input: input.to_owned(),
            digits,
        })
    }

    /// Replaces the number with a freshly normalized `input`.
    ///
    /// On failure `self` is left exactly as it was.
    pub fn set_input(&mut self, input: &str) -> Result<(), ValidationError> {
        // The previous value is dropped, and zeroed, only once the new one exists
        *self = Self::new(input)?;
        Ok(())
    }

    /// Returns the input exactly as it was supplied.
    #[inline]
    pub fn original_input(&self) -> &str {
        &self.raw_input
    }

    /// Returns the normalized digits.
    ///
    /// # Security Warning
    ///
    /// This exposes the full card number. Prefer [`masked`](Self::masked)
    /// for display.
    #[inline]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Returns the number of digits.
    #[inline]
    pub fn length(&self) -> usize {
        self.digits.len()
    }

    /// Returns the brand implied by the leading digits, if any.
    #[inline]
    pub fn brand(&self) -> Option<Brand> {
        detect_brand(&self.digits)
    }

    /// Returns true if the number has 13 to 16 digits, a known brand
    /// prefix, and a correct Luhn check digit.
    #[inline]
    pub fn is_valid(&self) -> bool {
        (MIN_VALID_DIGITS..=MAX_VALID_DIGITS).contains(&self.length())
            && self.brand().is_some()
            && luhn::validate(&self.digits)
    }

    /// Returns the last four digits (fewer if the number is shorter).
    #[inline]
    pub fn last_four(&self) -> &str {
        let start = self.digits.len().saturating_sub(4);
        &self.digits[start..]
    }

    /// Returns the digits with all but the last four replaced by `*`.
    ///
    /// ```
    /// use cardcheck::CardNumber;
    ///
    /// let card = CardNumber::new("3782-822463-10005").unwrap();
    /// assert_eq!(card.masked(), "***********0005");
    /// ```
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::mask_digits(&self.digits)
    }
}

impl PartialEq for CardNumber {
    fn eq(&self, other: &Self) -> bool {
        crate::mask::constant_time_eq_str(&self.digits, &other.digits)
    }
}

impl Eq for CardNumber {}

impl Hash for CardNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl FromStr for CardNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for CardNumber {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardNumber")
            .field("brand", &brand_name(self.brand()))
            .field("number", &self.masked())
            .field("valid", &self.is_valid())
            .finish()
    }
}

/// Masked diagnostic form: `<brand> <masked digits> (valid|invalid)`.
impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            brand_name(self.brand()),
            self.masked(),
            if self.is_valid() { "valid" } else { "invalid" }
        )
    }
}

impl Drop for CardNumber {
    fn drop(&mut self) {
        self.raw_input.zeroize();
        self.digits.zeroize();
    }
}
