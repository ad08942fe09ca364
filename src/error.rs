//! Error types for card number construction and batch reporting.
//!
//! Construction is the only fallible operation on a card number; every
//! query on a constructed [`CardNumber`](crate::CardNumber) is infallible.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while normalizing raw card input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A character other than a digit, space, or hyphen was found.
    ///
    /// No partial card is produced when this happens.
    InvalidCharacter {
        /// The position in the input, counted in characters (0-indexed).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The input contained only separators (or nothing at all).
    EmptyResult,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits, spaces, and hyphens allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::EmptyResult => write!(f, "card number contains no digits"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised by the line-oriented report driver.
///
/// Individual bad lines are never errors; only failures of the input or
/// output resource itself end up here.
#[derive(Debug)]
pub enum ReportError {
    /// The input file could not be opened.
    OpenInput {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The output file could not be created.
    CreateOutput {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// Reading a line from the input failed mid-stream.
    Read(io::Error),

    /// Writing a result line failed.
    Write(io::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenInput { path, .. } => {
                write!(f, "could not open input file: {}", path.display())
            }
            Self::CreateOutput { path, .. } => {
                write!(f, "could not open output file: {}", path.display())
            }
            Self::Read(e) => write!(f, "failed to read input: {}", e),
            Self::Write(e) => write!(f, "failed to write results: {}", e),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OpenInput { source, .. } | Self::CreateOutput { source, .. } => Some(source),
            Self::Read(e) | Self::Write(e) => Some(e),
        }
    }
}
