//! # Errors
//!
//! Errors raised while validating command line tokens and parsing stored records.

use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Result type for the utilities in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The vocabulary a rejected token was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Month,
    Day,
    TimeOfDay,
    FileFormat,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Month => "month",
            TokenKind::Day => "day",
            TokenKind::TimeOfDay => "time of day",
            TokenKind::FileFormat => "file format",
        };
        write!(f, "{}", name)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A token that is not a member of its fixed vocabulary.
    #[error("Invalid {kind}: {token}. Allowed values are: {allowed}")]
    InvalidToken {
        kind: TokenKind,
        token: String,
        allowed: String,
    },

    /// A day range with more than one `-` separator.
    #[error("Malformed day range: {0}. Expected <day> or <day>-<day>")]
    MalformedRange(String),

    /// The months and the day ranges must pair up one to one.
    #[error("The number of days must match the number of months ({days} day ranges for {months} months)")]
    LengthMismatch { months: usize, days: usize },

    #[error("Invalid duration: {0}. Expected a whole number followed by the unit suffix")]
    InvalidDuration(String),

    #[error("The record file {0:?} does not contain a record")]
    EmptyRecordFile(PathBuf),
}

impl Error {
    pub(crate) fn invalid_token(kind: TokenKind, token: &str, allowed: String) -> Self {
        Error::InvalidToken {
            kind,
            token: token.to_string(),
            allowed,
        }
    }
}
