//! Masking utilities for display and logging.
//!
//! Card numbers are never shown with more than their last four digits.
//! Masking keeps the length: one `*` replaces each hidden digit.

/// Number of trailing digits left visible.
pub const VISIBLE_DIGITS: usize = 4;

/// Masks a normalized digit string, keeping only the last four digits.
///
/// Strings of four characters or fewer are returned as-is. Lengths are
/// counted in characters, so non-ASCII input is masked without splitting a
/// character.
///
/// # Example
///
/// ```
/// use cardcheck::mask::mask_digits;
///
/// assert_eq!(mask_digits("4111111111111111"), "************1111");
/// assert_eq!(mask_digits("123"), "123");
/// ```
#[inline]
pub fn mask_digits(digits: &str) -> String {
    let masked_count = digits.chars().count().saturating_sub(VISIBLE_DIGITS);

    let mut result = String::with_capacity(digits.len());
    result.extend(std::iter::repeat('*').take(masked_count));
    result.extend(digits.chars().skip(masked_count));
    result
}

/// Masks the digits inside unnormalized text.
///
/// Every ASCII digit except the last four is replaced by `*`; all other
/// characters are kept, so rejected input can be logged without leaking
/// the number.
///
/// # Example
///
/// ```
/// use cardcheck::mask::mask_input;
///
/// assert_eq!(mask_input("4111-1111-1111-111X"), "****-****-***1-111X");
/// ```
pub fn mask_input(input: &str) -> String {
    let total = input.chars().filter(|c| c.is_ascii_digit()).count();
    let masked_count = total.saturating_sub(VISIBLE_DIGITS);

    let mut seen = 0;
    input
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                seen += 1;
                if seen <= masked_count {
                    return '*';
                }
            }
            c
        })
        .collect()
}

/// Constant-time comparison of two byte slices.
///
/// This function takes the same amount of time regardless of where
/// (or if) equal-length slices differ.
///
/// # Example
///
/// ```
/// use cardcheck::mask::constant_time_eq;
///
/// assert!(constant_time_eq(b"4111111111111111", b"4111111111111111"));
/// assert!(!constant_time_eq(b"4111111111111111", b"4111111111111112"));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }

    diff == 0
}

/// String wrapper around [`constant_time_eq`].
#[inline]
pub fn constant_time_eq_str(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_digits_lengths() {
        assert_eq!(mask_digits("4111111111111111"), "************1111");
        assert_eq!(mask_digits("378282246310005"), "***********0005");
        assert_eq!(mask_digits("4222222222222"), "*********2222");
        assert_eq!(mask_digits("12345"), "*2345");
    }

    #[test]
    fn test_mask_digits_short() {
        assert_eq!(mask_digits("1234"), "1234");
        assert_eq!(mask_digits("7"), "7");
        assert_eq!(mask_digits(""), "");
    }

    #[test]
    fn test_mask_digits_multibyte() {
        assert_eq!(mask_digits("€€"), "€€");
        assert_eq!(mask_digits("€€€€€€"), "**€€€€");
        assert_eq!(mask_digits("12é4567"), "***4567");
    }

    #[test]
    fn test_mask_input() {
        assert_eq!(mask_input("4111 1111 1111 1111"), "**** **** **** 1111");
        assert_eq!(mask_input("4111abcd"), "4111abcd");
        assert_eq!(mask_input("41111abcd"), "*1111abcd");
        assert_eq!(mask_input(""), "");
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"hello", b"hell"));
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn test_constant_time_eq_str() {
        assert!(constant_time_eq_str("4111111111111111", "4111111111111111"));
        assert!(!constant_time_eq_str("4111111111111111", "4111111111111112"));
    }
}
