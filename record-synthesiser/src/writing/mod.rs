// This module handles writing a single record to its record file.
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use common_utils::{file_utils::FileFormat, parsing_utils::Record};

// Writes the record to the given path in the given format.
// Missing parent directories are created and an existing file is truncated.
pub(crate) fn write_record(path: &Path, record: &Record, format: FileFormat) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("could not create directory: {:?}", parent.as_os_str())
        })?;
    }
    match format {
        FileFormat::Csv => write_csv_record(path, record),
        FileFormat::Json => write_json_record(path, record),
    }
}

fn write_csv_record(path: &Path, record: &Record) -> Result<()> {
    let mut writer = common_utils::parsing_utils::customised_csv_writer(path)
        .with_context(|| format!("Failed to create file: {:?}", path.as_os_str()))?;
    writer
        .serialize(record)
        .with_context(|| format!("Failed to serialize {:?} as csv", record))?;
    writer
        .flush()
        .with_context(|| "Failed flushing all bytes".to_string())?;
    Ok(())
}

fn write_json_record(path: &Path, record: &Record) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path.as_os_str()))?;
    let mut buf_writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut buf_writer, record)
        .with_context(|| format!("Failed to serialize {:?} as json", record))?;
    writeln!(buf_writer)?;
    buf_writer
        .flush()
        .with_context(|| "Failed flushing all bytes".to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_utils::parsing_utils::RecordDuration;

    fn record(model: &str, score: u32, duration: u32) -> Record {
        Record {
            model: model.to_string(),
            score,
            duration: RecordDuration(duration),
        }
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("luty/sobota/rano/Dane.csv");
        write_record(&path, &record("C", 3, 999), FileFormat::Csv).unwrap();
        assert_eq!(
            "Model;Wynik;Czas\nC;3;999s\n",
            std::fs::read_to_string(&path).unwrap()
        );
    }

    #[test]
    fn overwrites_existing_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dane.csv");
        write_record(&path, &record("A", 1000, 1000), FileFormat::Csv).unwrap();
        write_record(&path, &record("B", 0, 0), FileFormat::Csv).unwrap();
        assert_eq!(
            "Model;Wynik;Czas\nB;0;0s\n",
            std::fs::read_to_string(&path).unwrap()
        );
    }

    #[test]
    fn json_record_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maj/wtorek/wieczór/Dane.json");
        write_record(&path, &record("A", 12, 345), FileFormat::Json).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            serde_json::json!({"Model": "A", "Wynik": 12, "Czas": "345s"}),
            value
        );
    }
}
