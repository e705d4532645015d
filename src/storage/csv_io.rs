//! CSV table I/O
//!
//! Every table is a header row followed by one record per row. Whole-table
//! writes go through a temp file and a rename so a crash never leaves a
//! half-written table behind; ledgers append a single row instead.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{KitchenError, KitchenResult};

/// Read every record of a table, returning an empty table if the file doesn't exist
pub fn read_table<T, P>(path: P) -> KitchenResult<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    parse_table(path)
}

/// Read every record of a table, returning an error if the file doesn't exist
pub fn read_table_required<T, P>(path: P) -> KitchenResult<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(KitchenError::DataFileMissing(path.display().to_string()));
    }

    parse_table(path)
}

fn parse_table<T: DeserializeOwned>(path: &Path) -> KitchenResult<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| KitchenError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize().enumerate() {
        // Row 1 is the header
        let row: T = record.map_err(|e| {
            KitchenError::DataFileCorrupt(format!(
                "{} row {}: {}",
                path.display(),
                index + 2,
                e
            ))
        })?;
        rows.push(row);
    }

    Ok(rows)
}

/// Write a whole table atomically (write to temp, then rename)
///
/// `headers` is written even when `rows` is empty so the table keeps its shape.
pub fn write_table_atomic<T, P>(path: P, headers: &[&str], rows: &[T]) -> KitchenResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            KitchenError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| KitchenError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| KitchenError::Io(format!("Failed to flush data: {}", e)))?;

    file.sync_all()
        .map_err(|e| KitchenError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        KitchenError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Append one record to a table, writing the header first if the file is new or empty
///
/// Existing bytes are never rewritten.
pub fn append_row<T, P>(path: P, headers: &[&str], row: &T) -> KitchenResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            KitchenError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| KitchenError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    // A file edited by hand may lack its final newline
    if !needs_header && !ends_with_newline(path)? {
        file.write_all(b"\n")?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if needs_header {
        writer.write_record(headers)?;
    }
    writer.serialize(row)?;
    writer
        .flush()
        .map_err(|e| KitchenError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

fn ends_with_newline(path: &Path) -> KitchenResult<bool> {
    let bytes = fs::read(path)?;
    Ok(bytes.last().map_or(true, |b| *b == b'\n'))
}

/// Check if a CSV file exists and every record has the header's width
pub fn table_file_valid<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if !path.exists() {
        return false;
    }

    match csv::Reader::from_path(path) {
        Ok(mut reader) => reader.records().all(|r| r.is_ok()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    const HEADERS: [&str; 2] = ["name", "value"];

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestRow {
        name: String,
        value: i32,
    }

    fn row(name: &str, value: i32) -> TestRow {
        TestRow {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn test_read_nonexistent_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        let rows: Vec<TestRow> = read_table(&path).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_read_required_missing_is_data_file_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("recipes.csv");

        let err = read_table_required::<TestRow, _>(&path).unwrap_err();
        assert!(matches!(err, KitchenError::DataFileMissing(_)));
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        let rows = vec![row("a", 1), row("b, c", 2)];
        write_table_atomic(&path, &HEADERS, &rows).unwrap();

        let loaded: Vec<TestRow> = read_table(&path).unwrap();
        assert_eq!(loaded, rows);
        assert!(!temp_dir.path().join("test.csv.tmp").exists());
    }

    #[test]
    fn test_empty_write_keeps_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("empty.csv");

        write_table_atomic::<TestRow, _>(&path, &HEADERS, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value\n");
    }

    #[test]
    fn test_append_preserves_earlier_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        append_row(&path, &HEADERS, &row("first", 1)).unwrap();
        let before = fs::read(&path).unwrap();

        append_row(&path, &HEADERS, &row("second", 2)).unwrap();
        let after = fs::read(&path).unwrap();

        assert!(after.starts_with(&before));
        let loaded: Vec<TestRow> = read_table(&path).unwrap();
        assert_eq!(loaded, vec![row("first", 1), row("second", 2)]);
    }

    #[test]
    fn test_append_repairs_missing_trailing_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(&path, "name,value\nfirst,1").unwrap();

        append_row(&path, &HEADERS, &row("second", 2)).unwrap();

        let loaded: Vec<TestRow> = read_table(&path).unwrap();
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_corrupt_row_reported_with_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.csv");
        fs::write(&path, "name,value\nok,1\nbad,notanumber\n").unwrap();

        let err = read_table::<TestRow, _>(&path).unwrap_err();
        match err {
            KitchenError::DataFileCorrupt(msg) => assert!(msg.contains("row 3")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_table_file_valid() {
        let temp_dir = TempDir::new().unwrap();
        let valid_path = temp_dir.path().join("valid.csv");
        let ragged_path = temp_dir.path().join("ragged.csv");

        fs::write(&valid_path, "name,value\na,1\n").unwrap();
        assert!(table_file_valid(&valid_path));

        fs::write(&ragged_path, "name,value\na,1,extra\n").unwrap();
        assert!(!table_file_valid(&ragged_path));

        assert!(!table_file_valid(temp_dir.path().join("nonexistent.csv")));
    }
}
