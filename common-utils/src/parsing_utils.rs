//! # Parsing utils
//!
//! This module contains structures and functions related to reading and writing record files.
//!

use csv::{Reader, ReaderBuilder, Writer, WriterBuilder};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    convert::TryFrom,
    fmt,
    fs::File,
    path::Path,
    str::FromStr,
};

use crate::error::Error;

static DURATION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)s\s*$").unwrap());

/// Struct providing the fixed contents of records.
pub struct RecordConfig;

impl RecordConfig {
    /// The models a record can be about.
    pub const MODELS: [&'static str; 3] = ["A", "B", "C"];
    /// The model records are filtered on unless told otherwise.
    pub const DEFAULT_MODEL_FILTER: &'static str = "A";
    /// Scores and durations are drawn from the inclusive range MIN_VALUE..=MAX_VALUE.
    pub const MIN_VALUE: u32 = 0;
    pub const MAX_VALUE: u32 = 1000;
    /// Durations are stored with this unit suffix, e.g. "345s".
    pub const DURATION_UNIT: &'static str = "s";
    /// Column delimiter of csv record files.
    pub const CSV_DELIMITER: u8 = b';';
}

/// A duration in seconds. Stored as a whole number followed by the unit suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordDuration(pub u32);

impl RecordDuration {
    pub fn seconds(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RecordDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, RecordConfig::DURATION_UNIT)
    }
}

impl FromStr for RecordDuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DURATION_REGEX
            .captures(s)
            .and_then(|captures| captures[1].parse::<u32>().ok())
            .map(RecordDuration)
            .ok_or_else(|| Error::InvalidDuration(s.to_string()))
    }
}

impl TryFrom<String> for RecordDuration {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecordDuration> for String {
    fn from(duration: RecordDuration) -> Self {
        duration.to_string()
    }
}

/// This represents the single record stored in a record file.
///
/// As csv: a `Model;Wynik;Czas` header followed by one row such as `B;512;87s`.
/// As json: `{"Model":"B","Wynik":512,"Czas":"87s"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// One of RecordConfig::MODELS
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Wynik")]
    pub score: u32,
    #[serde(rename = "Czas")]
    pub duration: RecordDuration,
}

/// Produces a csv reader for record files: semicolon delimited with a header row.
pub fn customised_csv_reader<P: AsRef<Path>>(path: P) -> csv::Result<Reader<File>> {
    ReaderBuilder::new()
        .delimiter(RecordConfig::CSV_DELIMITER)
        .has_headers(true)
        .from_path(path)
}

/// Produces a csv writer for record files. The header row is written with the first record.
/// An existing file at `path` is truncated.
pub fn customised_csv_writer<P: AsRef<Path>>(path: P) -> csv::Result<Writer<File>> {
    WriterBuilder::new()
        .delimiter(RecordConfig::CSV_DELIMITER)
        .has_headers(true)
        .from_path(path)
}
