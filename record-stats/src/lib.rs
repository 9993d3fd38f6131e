mod aggregating;
mod parsing;

use anyhow::{Context, Result};
use common_utils::file_utils::FileFormat;
use std::{
    collections::HashSet,
    io,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

pub use aggregating::DurationSummary;

/// Reads the record stored at each of the given paths and sums the durations of the records
/// whose model equals `model_filter`.
///
/// Every distinct path is read once, even if it is given more than once. A path without a
/// file is skipped and reported in the returned summary; it does not stop the aggregation.
/// Any other failure to access or parse a record file is an error.
pub fn run(paths: &[PathBuf], format: FileFormat, model_filter: &str) -> Result<DurationSummary> {
    let mut summary = DurationSummary::default();
    let mut seen: HashSet<&Path> = HashSet::with_capacity(paths.len());
    for path in paths {
        if !seen.insert(path.as_path()) {
            debug!(path = ?path, "record file already aggregated");
            continue;
        }
        match std::fs::metadata(path) {
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(path = ?path, "record file does not exist, skipping");
                summary.add_missing(path.clone());
                continue;
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Could not access the record file: {:?}", path.as_os_str())
                })
            }
        }
        let record = parsing::read_record(path, format)
            .with_context(|| format!("Failed to read the record file: {:?}", path.as_os_str()))?;
        debug!(path = ?path, model = %record.model, duration = %record.duration, "record read");
        summary.add_record(&record, model_filter);
    }
    info!(
        read = summary.read,
        missing = summary.missing.len(),
        matched = summary.matched,
        total = summary.total,
        "records aggregated"
    );
    Ok(summary)
}
