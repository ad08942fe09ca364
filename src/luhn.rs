//! Luhn algorithm implementation for card number validation.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used to validate credit card numbers and other identification numbers.
//!
//! All functions take a string of ASCII digits as produced by
//! [`normalize`](crate::normalize::normalize). Callers are expected to pass
//! normalized input; non-digit bytes are not checked here.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a digit string using the Luhn algorithm.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// # Example
///
/// ```
/// use cardcheck::luhn::validate;
///
/// assert!(validate("4111111111111111"));
/// assert!(!validate("4111111111111112"));
/// ```
#[inline]
pub fn validate(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum for a digit string (not reduced modulo 10).
#[inline]
pub fn compute_checksum(digits: &str) -> u32 {
    digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = b.wrapping_sub(b'0') % 10;
            // The rightmost digit is position 0 and is never doubled
            if i % 2 == 1 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum()
}

/// Computes the check digit to append to `partial` so the result passes Luhn.
///
/// Returns `None` for an empty prefix.
///
/// # Example
///
/// ```
/// use cardcheck::luhn::generate_check_digit;
///
/// assert_eq!(generate_check_digit("411111111111111"), Some(1));
/// assert_eq!(generate_check_digit(""), None);
/// ```
#[inline]
pub fn generate_check_digit(partial: &str) -> Option<u8> {
    if partial.is_empty() {
        return None;
    }

    // Every digit of the prefix shifts one position left once the check
    // digit is appended, so the doubling parity flips.
    let sum: u32 = partial
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = b.wrapping_sub(b'0') % 10;
            if i % 2 == 0 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum();

    Some(((10 - (sum % 10)) % 10) as u8)
}
