//! # File utils
//!
//! This module contains structures and functionality related to the filenames and paths
//! of record files. Every scheduled slot maps to exactly one record file:
//!
//! `<root>/<month>/<week day>/<time of day>/Dane.<csv|json>`
//!

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{
    calendar::{Month, TimeOfDay, WeekDay},
    error::{Error, Result, TokenKind},
    schedule::Schedule,
};

/// The serialization format of record files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Json,
}

impl FileFormat {
    pub const ALL: [FileFormat; 2] = [FileFormat::Csv, FileFormat::Json];

    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Json => "json",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for FileFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.extension() == token)
            .ok_or_else(|| {
                Error::invalid_token(TokenKind::FileFormat, token, "csv, json".to_string())
            })
    }
}

/// Struct providing settings for filenames of record files.
pub struct RecordFilesConfig;

impl RecordFilesConfig {
    /// Every record file has this name, followed by the extension of its format.
    pub const FILE_STEM: &'static str = "Dane";

    pub fn file_name(format: FileFormat) -> String {
        format!("{}.{}", Self::FILE_STEM, format.extension())
    }
}

/// Struct representing the metadata (slot, time of day and path) of a single record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFile {
    pub month: Month,
    pub day: WeekDay,
    pub time_of_day: TimeOfDay,
    /// The path to the record file
    pub path: PathBuf,
}

/// Provides the record files of every slot in the schedule, in slot order.
///
/// The k'th slot is given the k'th time of day. Once `times_of_day` runs out, the
/// remaining slots fall back to `TimeOfDay::default()` (the morning).
pub fn record_files(
    root: &Path,
    schedule: &Schedule,
    times_of_day: &[TimeOfDay],
    format: FileFormat,
) -> Vec<RecordFile> {
    let file_name = RecordFilesConfig::file_name(format);
    schedule
        .slots()
        .into_iter()
        .enumerate()
        .map(|(idx, slot)| {
            let time_of_day = times_of_day.get(idx).copied().unwrap_or_default();
            let mut path = root.to_path_buf();
            path.push(slot.month.name());
            path.push(slot.day.display_name());
            path.push(time_of_day.display_name());
            path.push(&file_name);
            RecordFile {
                month: slot.month,
                day: slot.day,
                time_of_day,
                path,
            }
        })
        .collect()
}

/// Provides the paths of every record file in the schedule, in slot order.
pub fn record_file_paths(
    root: &Path,
    schedule: &Schedule,
    times_of_day: &[TimeOfDay],
    format: FileFormat,
) -> Vec<PathBuf> {
    record_files(root, schedule, times_of_day, format)
        .into_iter()
        .map(|record_file| record_file.path)
        .collect()
}

/// Same as [`record_file_paths`] but starting from raw tokens.
///
/// Any token outside its vocabulary fails the whole call; no partial list is returned.
pub fn record_file_paths_from_tokens<S: AsRef<str>>(
    root: &Path,
    months: &[S],
    day_ranges: &[S],
    times_of_day: &[S],
    format: &str,
) -> Result<Vec<PathBuf>> {
    let schedule = Schedule::from_tokens(months, day_ranges)?;
    let times_of_day = times_of_day
        .iter()
        .map(|token| token.as_ref().parse())
        .collect::<Result<Vec<TimeOfDay>>>()?;
    let format = format.parse()?;
    Ok(record_file_paths(root, &schedule, &times_of_day, format))
}
