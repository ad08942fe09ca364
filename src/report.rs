//! Line-oriented batch reports.
//!
//! Reads card numbers one per line and writes one result line each:
//!
//! ```text
//! 4111111111111111 : Visa : valid
//! 4111111111111112 : Visa : invalid
//! 4111abcd : invalid_input : invalid character 'a' at position 4 (only digits, spaces, and hyphens allowed)
//! ```
//!
//! Empty lines are skipped. A bad line never stops the run; only failures of
//! the input or output resource do.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::batch::Tally;
use crate::card::{brand_name, Brand, CardNumber};
use crate::error::{ReportError, ValidationError};
use crate::mask::mask_input;

/// Result for a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum LineOutcome {
    /// The line normalized to a card number.
    Checked {
        /// Normalized digits.
        digits: String,
        /// Detected brand, if any.
        brand: Option<Brand>,
        /// Result of [`CardNumber::is_valid`].
        valid: bool,
    },

    /// The line could not be normalized.
    InvalidInput {
        /// The line as read.
        line: String,
        /// Why normalization failed.
        #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_display"))]
        error: ValidationError,
    },
}

#[cfg(feature = "serde")]
fn serialize_display<S: serde::Serializer>(
    error: &ValidationError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

impl LineOutcome {
    /// Checks one line.
    pub fn from_line(line: &str) -> Self {
        match CardNumber::new(line) {
            Ok(card) => Self::from(&card),
            Err(error) => Self::InvalidInput {
                line: line.to_owned(),
                error,
            },
        }
    }

    /// Returns true only for a checked, valid card.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Checked { valid: true, .. })
    }
}

impl From<&CardNumber> for LineOutcome {
    fn from(card: &CardNumber) -> Self {
        Self::Checked {
            digits: card.digits().to_owned(),
            brand: card.brand(),
            valid: card.is_valid(),
        }
    }
}

impl fmt::Display for LineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checked {
                digits,
                brand,
                valid,
            } => write!(
                f,
                "{} : {} : {}",
                digits,
                brand_name(*brand),
                if *valid { "valid" } else { "invalid" }
            ),
            Self::InvalidInput { line, error } => {
                write!(f, "{} : invalid_input : {}", line, error)
            }
        }
    }
}

/// Totals written at the end of a report.
pub type ReportSummary = Tally;

/// Checks every non-empty line of `reader` and writes one result line per
/// input line to `writer`.
///
/// A trailing `\r` is removed from each line so CRLF files behave like LF
/// files. Bytes that are not UTF-8 become U+FFFD, so such a line is reported
/// as `invalid_input` and the run continues.
///
/// # Errors
///
/// Returns [`ReportError::Read`] or [`ReportError::Write`] if the underlying
/// streams fail. Lines that fail normalization are reported, not returned.
///
/// # Example
///
/// ```
/// use cardcheck::report::process_lines;
///
/// let input = "4111 1111 1111 1111\n\n4111abcd\n";
/// let mut output = Vec::new();
/// let summary = process_lines(input.as_bytes(), &mut output).unwrap();
///
/// assert_eq!(summary.valid, 1);
/// assert_eq!(summary.invalid, 1);
/// assert!(String::from_utf8(output).unwrap().starts_with("4111111111111111 : Visa : valid\n"));
/// ```
pub fn process_lines<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
) -> Result<ReportSummary, ReportError> {
    let mut summary = ReportSummary::default();
    let mut buf = Vec::new();
    let mut index = 0;

    loop {
        buf.clear();
        if reader
            .read_until(b'\n', &mut buf)
            .map_err(ReportError::Read)?
            == 0
        {
            break;
        }
        index += 1;

        let bytes = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
        if bytes.is_empty() {
            continue;
        }

        let line = String::from_utf8_lossy(bytes);
        let line: &str = &line;
        let outcome = LineOutcome::from_line(line);
        match &outcome {
            LineOutcome::Checked { brand, valid, .. } => {
                debug!(
                    line = index,
                    brand = brand_name(*brand),
                    valid = *valid,
                    "checked card"
                );
            }
            LineOutcome::InvalidInput { error, .. } => {
                warn!(
                    line = index,
                    input = %mask_input(line),
                    %error,
                    "rejected input"
                );
            }
        }

        summary.record(outcome.is_valid());
        writeln!(writer, "{}", outcome).map_err(ReportError::Write)?;
    }

    writer.flush().map_err(ReportError::Write)?;
    info!(
        valid = summary.valid,
        invalid = summary.invalid,
        "report complete"
    );
    Ok(summary)
}

/// Runs [`process_lines`] from the file at `input` into a new file at
/// `output`.
///
/// # Errors
///
/// [`ReportError::OpenInput`] or [`ReportError::CreateOutput`] if either file
/// cannot be opened, plus anything [`process_lines`] returns.
pub fn process_files(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ReportSummary, ReportError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let reader = File::open(input).map_err(|source| ReportError::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;
    let writer = File::create(output).map_err(|source| ReportError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    info!(input = %input.display(), output = %output.display(), "processing card file");
    process_lines(BufReader::new(reader), BufWriter::new(writer))
}
