//! File-backed persistence over the fixed-width record format.
//!
//! Every logical write is either an append of one record or a whole-file
//! rewrite; there is no in-place random-access write path. Each operation
//! opens the file, runs blocking I/O to completion, and closes it; no
//! handle survives a call and no lock is taken (single-writer usage is
//! assumed, concurrent external access is out of scope).

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use podium_common::error::{StoreError, StoreResult};

use crate::codec::{self, RECORD_WIDTH};
use crate::record::AthleteRecord;

/// An explicit session value naming the database file.
///
/// Holds only the path; on-disk bytes are owned by the store while
/// in-memory collections returned by [`RecordStore::read_all`] are
/// caller-owned copies with no back-reference to the file.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncate the database file to empty, creating it if absent.
    pub fn create(&self) -> StoreResult<()> {
        self.open_truncated()?;
        tracing::debug!(path = %self.path.display(), "database file created");
        Ok(())
    }

    /// Append exactly one encoded record to the end of the file,
    /// creating the file if absent.
    pub fn append(&self, record: &AthleteRecord) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StoreError::Open {
                path: self.path.clone(),
                source,
            })?;
        file.write_all(&codec::encode_record(record))?;
        Ok(())
    }

    /// Read every record in the file, in file order.
    ///
    /// An absent or unreadable file yields an empty collection, by
    /// contract this is not an error. A trailing partial chunk (file
    /// length not a multiple of the record width) is dropped; this is
    /// the documented lossy-tolerance policy, surfaced only in the log.
    pub fn read_all(&self) -> Vec<AthleteRecord> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(_) => return Vec::new(),
        };

        let mut records = Vec::with_capacity(data.len() / RECORD_WIDTH);
        let mut chunks = data.chunks_exact(RECORD_WIDTH);
        for chunk in &mut chunks {
            // chunks_exact guarantees the slice length.
            let mut buf = [0u8; RECORD_WIDTH];
            buf.copy_from_slice(chunk);
            records.push(codec::decode_record(&buf));
        }
        if !chunks.remainder().is_empty() {
            tracing::debug!(
                path = %self.path.display(),
                trailing_bytes = chunks.remainder().len(),
                "dropping partial trailing record"
            );
        }
        records
    }

    /// Truncate and rewrite the entire file from `records`, in order.
    ///
    /// This is the only persistence path for update, delete, and sort:
    /// the fixed-width format offers no way to patch a single record in
    /// place without rewriting everything after it.
    pub fn overwrite_all(&self, records: &[AthleteRecord]) -> StoreResult<()> {
        let file = self.open_truncated()?;
        let mut writer = BufWriter::new(file);
        for record in records {
            writer.write_all(&codec::encode_record(record))?;
        }
        writer.flush()?;
        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "database file rewritten"
        );
        Ok(())
    }

    fn open_truncated(&self) -> StoreResult<File> {
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|source| StoreError::Open {
                path: self.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(id: i32, name: &str) -> AthleteRecord {
        AthleteRecord::new(id, name, "Ukraine", "100m Sprint", 10.34, 0, 980, "Gold")
    }

    fn store_in(dir: &TempDir) -> RecordStore {
        RecordStore::new(dir.path().join("competition.dat"))
    }

    #[test]
    fn test_create_produces_empty_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.create().unwrap();
        assert_eq!(fs::metadata(store.path()).unwrap().len(), 0);
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_create_truncates_existing_data() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.append(&record(1, "a")).unwrap();
        store.create().unwrap();
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_append_then_read_preserves_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.create().unwrap();
        for i in 0..5 {
            store.append(&record(i, &format!("athlete {}", i))).unwrap();
        }
        let records = store.read_all();
        assert_eq!(records.len(), 5);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.id(), i as i32);
            assert_eq!(r.name(), format!("athlete {}", i));
        }
    }

    #[test]
    fn test_append_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.append(&record(9, "no create call")).unwrap();
        assert_eq!(store.read_all().len(), 1);
    }

    #[test]
    fn test_read_all_missing_file_is_empty_not_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_overwrite_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let records = vec![record(1, "one"), record(2, "two"), record(3, "three")];
        store.overwrite_all(&records).unwrap();
        assert_eq!(store.read_all(), records);
    }

    #[test]
    fn test_overwrite_is_idempotent_through_read() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .overwrite_all(&[record(1, "a"), record(2, "b")])
            .unwrap();
        let first = store.read_all();
        store.overwrite_all(&first).unwrap();
        assert_eq!(store.read_all(), first);
    }

    #[test]
    fn test_partial_trailing_record_is_dropped() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .overwrite_all(&[record(1, "complete"), record(2, "also complete")])
            .unwrap();

        // Corrupt the tail: N full records plus k stray bytes, 0 < k < width.
        let mut file = OpenOptions::new()
            .append(true)
            .open(store.path())
            .unwrap();
        file.write_all(&[0xAB; 37]).unwrap();
        drop(file);

        let records = store.read_all();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name(), "also complete");
    }

    #[test]
    fn test_open_failure_is_reported_not_panic() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("no_such_dir").join("db.dat"));
        let err = store.create().unwrap_err();
        assert!(matches!(err, StoreError::Open { .. }));
        assert!(store.append(&record(1, "x")).is_err());
        assert!(store.overwrite_all(&[record(1, "x")]).is_err());
        // Read of the same unreachable path stays silent by contract.
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_file_size_is_multiple_of_record_width() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .overwrite_all(&[record(1, "a"), record(2, "b"), record(3, "c")])
            .unwrap();
        let len = fs::metadata(store.path()).unwrap().len();
        assert_eq!(len, 3 * RECORD_WIDTH as u64);
    }
}
