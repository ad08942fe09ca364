//! Input normalization: raw text to a canonical digit string.
//!
//! Spaces and hyphens are treated as formatting and dropped. Every other
//! non-digit character rejects the whole input; nothing is silently skipped.

use crate::error::ValidationError;

/// Strips formatting from `input` and returns the digits in order.
///
/// # Errors
///
/// * [`ValidationError::InvalidCharacter`] on the first character that is
///   not `0`-`9`, space, or hyphen.
/// * [`ValidationError::EmptyResult`] if no digits remain.
///
/// # Example
///
/// ```
/// use cardcheck::normalize::normalize;
/// use cardcheck::ValidationError;
///
/// assert_eq!(normalize("4111-1111 1111-1111").unwrap(), "4111111111111111");
/// assert_eq!(normalize(" - ").unwrap_err(), ValidationError::EmptyResult);
/// assert!(matches!(
///     normalize("4111abcd"),
///     Err(ValidationError::InvalidCharacter { position: 4, character: 'a' })
/// ));
/// ```
pub fn normalize(input: &str) -> Result<String, ValidationError> {
    let mut digits = String::with_capacity(input.len());

    for (position, c) in input.chars().enumerate() {
        match c {
            '0'..='9' => digits.push(c),
            ' ' | '-' => {}
            _ => {
                return Err(ValidationError::InvalidCharacter {
                    position,
                    character: c,
                });
            }
        }
    }

    if digits.is_empty() {
        return Err(ValidationError::EmptyResult);
    }

    Ok(digits)
}
