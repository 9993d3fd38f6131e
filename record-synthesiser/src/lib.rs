use std::{
    collections::{hash_map::Entry, HashMap},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use common_utils::{file_utils::FileFormat, parsing_utils::Record};
use rand::Rng;
use tracing::{debug, info};

mod generation;
mod writing;

/// Writes one synthetic record to each of the given paths, in order.
///
/// Missing parent directories are created. Existing record files are overwritten.
/// Nothing is rolled back on failure: the files written before the failing path stay on disk.
///
/// Returns the records left on disk, one per distinct path, in the order the paths first
/// appear. A path given more than once keeps only the record written last.
pub fn run<T: Rng>(paths: &[PathBuf], format: FileFormat, rng: &mut T) -> Result<Vec<Record>> {
    let mut written: Vec<Record> = Vec::with_capacity(paths.len());
    let mut position_by_path: HashMap<&Path, usize> = HashMap::with_capacity(paths.len());
    for path in paths {
        let record = generation::generate_record(rng);
        writing::write_record(path, &record, format)
            .with_context(|| format!("Failed to write a record to {:?}", path.as_os_str()))?;
        debug!(path = ?path, model = %record.model, "record written");
        match position_by_path.entry(path.as_path()) {
            Entry::Occupied(entry) => {
                debug!(path = ?path, "record file overwritten within the same run");
                written[*entry.get()] = record;
            }
            Entry::Vacant(entry) => {
                entry.insert(written.len());
                written.push(record);
            }
        }
    }
    info!(files = written.len(), %format, "synthetic records written");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_utils::{calendar::TimeOfDay, file_utils::record_file_paths, schedule::Schedule};
    use rand::prelude::*;
    use rand_pcg::Pcg64;

    #[test]
    fn repeated_paths_keep_the_last_record() {
        let dir = tempfile::tempdir().unwrap();
        let schedule = Schedule::from_tokens(&["maj", "maj"], &["pn", "pn-wt"]).unwrap();
        let paths = record_file_paths(dir.path(), &schedule, &[], FileFormat::Csv);
        assert_eq!(3, paths.len());
        assert_eq!(paths[0], paths[1]);

        let mut rng = Pcg64::seed_from_u64(5);
        let written = run(&paths, FileFormat::Csv, &mut rng).unwrap();

        // the same draws, replayed, tell which record ended up on disk
        let mut replay = Pcg64::seed_from_u64(5);
        let drawn: Vec<Record> = std::iter::repeat_with(|| generation::generate_record(&mut replay))
            .take(3)
            .collect();
        assert_eq!(vec![drawn[1].clone(), drawn[2].clone()], written);
    }

    #[test]
    fn failure_keeps_earlier_files_and_stops() {
        let dir = tempfile::tempdir().unwrap();
        // a regular file where the month directory should be
        std::fs::write(dir.path().join("styczeń"), "not a directory").unwrap();
        let schedule =
            Schedule::from_tokens(&["luty", "styczeń", "marzec"], &["pn", "wt", "śr"]).unwrap();
        let paths = record_file_paths(dir.path(), &schedule, &[TimeOfDay::Evening], FileFormat::Json);

        let mut rng = Pcg64::seed_from_u64(1);
        let err = run(&paths, FileFormat::Json, &mut rng).unwrap_err();
        assert!(err.to_string().contains("Failed to write a record to"));
        assert!(paths[0].is_file());
        assert!(!paths[2].exists());
        assert_eq!(
            "not a directory",
            std::fs::read_to_string(dir.path().join("styczeń")).unwrap()
        );
    }
}
