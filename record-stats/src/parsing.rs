// This module reads back the single record stored in a record file.
use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use common_utils::{
    file_utils::FileFormat,
    parsing_utils::{customised_csv_reader, Record},
    Error,
};

pub(crate) fn read_record(path: &Path, format: FileFormat) -> Result<Record> {
    match format {
        FileFormat::Csv => read_csv_record(path),
        FileFormat::Json => read_json_record(path),
    }
}

fn read_csv_record(path: &Path) -> Result<Record> {
    let mut reader = customised_csv_reader(path).with_context(|| {
        format!(
            "Failed to create a CSV Reader to parse the record file: {:?}",
            path.as_os_str()
        )
    })?;
    let record = reader
        .deserialize::<Record>()
        .next()
        .ok_or_else(|| Error::EmptyRecordFile(path.to_path_buf()))?
        .with_context(|| format!("Failed to parse the record in: {:?}", path.as_os_str()))?;
    Ok(record)
}

fn read_json_record(path: &Path) -> Result<Record> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {:?}", path.as_os_str()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse the record in: {:?}", path.as_os_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_utils::parsing_utils::RecordDuration;

    #[test]
    fn reads_csv_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dane.csv");
        std::fs::write(&path, "Model;Wynik;Czas\nB;17;250s\n").unwrap();
        let record = read_record(&path, FileFormat::Csv).unwrap();
        assert_eq!(
            Record {
                model: "B".to_string(),
                score: 17,
                duration: RecordDuration(250),
            },
            record
        );
    }

    #[test]
    fn reads_json_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dane.json");
        std::fs::write(&path, r#"{"Model": "C", "Wynik": 0, "Czas": "1000s"}"#).unwrap();
        let record = read_record(&path, FileFormat::Json).unwrap();
        assert_eq!(RecordDuration(1000), record.duration);
        assert_eq!("C", record.model);
    }

    #[test]
    fn header_only_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dane.csv");
        std::fs::write(&path, "Model;Wynik;Czas\n").unwrap();
        let err = read_record(&path, FileFormat::Csv).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::EmptyRecordFile(_))
        ));
    }

    #[test]
    fn duration_without_unit_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dane.csv");
        std::fs::write(&path, "Model;Wynik;Czas\nA;1;25\n").unwrap();
        assert!(read_record(&path, FileFormat::Csv).is_err());
    }
}
