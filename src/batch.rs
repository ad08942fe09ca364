//! Batch checking of many card numbers held in memory.
//!
//! Card numbers share no state, so a batch can be checked sequentially or,
//! with the `parallel` feature, spread across threads with rayon.

use crate::card::CardNumber;
use crate::error::ValidationError;

/// Outcome of checking one input in a batch.
pub type CheckResult = Result<CardNumber, ValidationError>;

/// Valid/invalid totals for a batch.
///
/// Inputs that fail normalization count as invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tally {
    /// Inputs that normalized and passed [`CardNumber::is_valid`].
    pub valid: usize,
    /// Everything else.
    pub invalid: usize,
}

impl Tally {
    /// Records one outcome.
    #[inline]
    pub fn record(&mut self, valid: bool) {
        if valid {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }
    }

    /// Total number of recorded outcomes.
    #[inline]
    pub fn total(&self) -> usize {
        self.valid + self.invalid
    }
}

/// Batch checker for processing multiple card numbers.
///
/// # Example
///
/// ```
/// use cardcheck::BatchValidator;
///
/// let batch = BatchValidator::new();
/// let cards = vec!["4111111111111111", "5555 5555 5555 4444", "4111abcd"];
/// let results = batch.check_all(&cards);
///
/// for (input, result) in cards.iter().zip(results.iter()) {
///     match result {
///         Ok(card) => println!("{}: {}", input, card),
///         Err(e) => println!("{}: invalid input - {}", input, e),
///     }
/// }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchValidator {
    skip_blank: bool,
}

impl BatchValidator {
    /// Creates a batch checker that treats blank inputs as invalid.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips empty strings instead of reporting them as invalid.
    #[inline]
    pub fn skip_blank(mut self, skip: bool) -> Self {
        self.skip_blank = skip;
        self
    }

    fn wanted(&self, input: &str) -> bool {
        !(self.skip_blank && input.is_empty())
    }

    /// Constructs a card number for every input, in order.
    ///
    /// With [`skip_blank(true)`](Self::skip_blank) empty inputs are dropped,
    /// so the result can be shorter than `inputs` and no longer lines up
    /// with it index for index.
    pub fn check_all<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<CheckResult> {
        inputs
            .iter()
            .map(|s| s.as_ref())
            .filter(|s| self.wanted(s))
            .map(CardNumber::new)
            .collect()
    }

    /// Returns only the inputs that are valid cards.
    pub fn valid_only<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<CardNumber> {
        inputs
            .iter()
            .map(|s| s.as_ref())
            .filter(|s| self.wanted(s))
            .filter_map(|s| CardNumber::new(s).ok())
            .filter(CardNumber::is_valid)
            .collect()
    }

    /// Counts valid and invalid inputs.
    pub fn tally<S: AsRef<str>>(&self, inputs: &[S]) -> Tally {
        let mut tally = Tally::default();
        for input in inputs.iter().map(|s| s.as_ref()).filter(|s| self.wanted(s)) {
            tally.record(is_valid(input));
        }
        tally
    }

    /// Like [`check_all`](Self::check_all), spread across the rayon pool.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn check_all_parallel<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<CheckResult> {
        use rayon::prelude::*;
        inputs
            .par_iter()
            .map(|s| s.as_ref())
            .filter(|s| self.wanted(s))
            .map(CardNumber::new)
            .collect()
    }

    /// Like [`tally`](Self::tally), spread across the rayon pool.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn tally_parallel<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Tally {
        use rayon::prelude::*;
        let (valid, total) = inputs
            .par_iter()
            .map(|s| s.as_ref())
            .filter(|s| self.wanted(s))
            .map(|s| (usize::from(is_valid(s)), 1usize))
            .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

        Tally {
            valid,
            invalid: total - valid,
        }
    }
}

/// Returns true if `input` normalizes to a valid card number.
///
/// # Example
///
/// ```
/// use cardcheck::is_valid;
///
/// assert!(is_valid("4111 1111 1111 1111"));
/// assert!(!is_valid("4111111111111112"));
/// assert!(!is_valid("4111abcd"));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    CardNumber::new(input).map_or(false, |card| card.is_valid())
}

/// Counts valid and invalid cards in a batch.
///
/// # Example
///
/// ```
/// use cardcheck::batch::count_valid;
///
/// let cards = ["4111111111111111", "1234567890123456", "5555555555554444"];
/// let tally = count_valid(&cards);
/// assert_eq!(tally.valid, 2);
/// assert_eq!(tally.invalid, 1);
/// ```
#[inline]
pub fn count_valid<S: AsRef<str>>(inputs: &[S]) -> Tally {
    BatchValidator::new().tally(inputs)
}

/// Counts valid and invalid cards in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn count_valid_parallel<S: AsRef<str> + Sync>(inputs: &[S]) -> Tally {
    BatchValidator::new().tally_parallel(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_VISA: &str = "4111111111111111";
    const VALID_MC: &str = "5555555555554444";
    const VALID_AMEX: &str = "378282246310005";
    const BAD_LUHN: &str = "4111111111111112";

    #[test]
    fn test_check_all() {
        let batch = BatchValidator::new();
        let cards = vec![VALID_VISA, VALID_MC, "bad", VALID_AMEX, BAD_LUHN];
        let results = batch.check_all(&cards);

        assert_eq!(results.len(), 5);
        assert!(results[0].as_ref().unwrap().is_valid());
        assert!(results[1].as_ref().unwrap().is_valid());
        assert!(matches!(
            results[2],
            Err(ValidationError::InvalidCharacter { position: 0, character: 'b' })
        ));
        assert!(results[3].as_ref().unwrap().is_valid());
        assert!(!results[4].as_ref().unwrap().is_valid());
    }

    #[test]
    fn test_check_all_skip_blank_drops_entries() {
        let cards = ["", VALID_VISA, "", BAD_LUHN];

        let all = BatchValidator::new().check_all(&cards);
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], Err(ValidationError::EmptyResult));

        let skipping = BatchValidator::new().skip_blank(true).check_all(&cards);
        assert_eq!(skipping.len(), 2);
        assert!(skipping[0].as_ref().unwrap().is_valid());
        assert!(!skipping[1].as_ref().unwrap().is_valid());
    }

    #[test]
    fn test_valid_only() {
        let batch = BatchValidator::new();
        let cards = vec![VALID_VISA, BAD_LUHN, "", VALID_MC];
        let valid = batch.valid_only(&cards);
        assert_eq!(valid.len(), 2);
    }

    #[test]
    fn test_tally() {
        let cards = [VALID_VISA, BAD_LUHN, VALID_MC, "bad", ""];
        assert_eq!(count_valid(&cards), Tally { valid: 2, invalid: 3 });

        let skipping = BatchValidator::new().skip_blank(true);
        let tally = skipping.tally(&cards);
        assert_eq!(tally, Tally { valid: 2, invalid: 2 });
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_empty_batch() {
        let batch = BatchValidator::new();
        let cards: Vec<&str> = vec![];
        assert!(batch.check_all(&cards).is_empty());
        assert_eq!(batch.tally(&cards), Tally::default());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let batch = BatchValidator::new();
        let cards: Vec<String> = (0..1000)
            .map(|i| if i % 3 == 0 { BAD_LUHN } else { VALID_VISA }.to_string())
            .collect();

        let results = batch.check_all_parallel(&cards);
        assert_eq!(results.len(), 1000);
        assert_eq!(batch.tally_parallel(&cards), batch.tally(&cards));
        assert_eq!(count_valid_parallel(&cards).invalid, 334);
    }
}
