//! # Common utils
//!
//! This library provides functionality needed by more than one of our record applications:
//! the calendar vocabularies, parsing of the schedule given on the command line, the layout
//! of record files on disk and the record format itself.

pub mod calendar;
pub mod error;
pub mod file_utils;
pub mod parsing_utils;
pub mod schedule;

pub use error::{Error, Result};
