// This module contains the running totals kept while reading record files.
use std::path::PathBuf;

use common_utils::parsing_utils::Record;

/// The outcome of aggregating the durations of the records matching a model.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DurationSummary {
    /// Sum of the durations, in seconds, of the matching records.
    pub total: u64,
    /// Number of records whose model matched the filter.
    pub matched: usize,
    /// Number of record files that were read.
    pub read: usize,
    /// Record files that did not exist and were skipped, in the order they were encountered.
    pub missing: Vec<PathBuf>,
}

impl DurationSummary {
    pub(crate) fn add_record(&mut self, record: &Record, model_filter: &str) {
        self.read += 1;
        if record.model == model_filter {
            self.matched += 1;
            self.total += u64::from(record.duration.seconds());
        }
    }

    pub(crate) fn add_missing(&mut self, path: PathBuf) {
        self.missing.push(path);
    }
}
