//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::error::SpendwiseError;

/// Read JSON from a file, returning `None` if the file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<Option<T>, SpendwiseError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path).map_err(|e| {
        SpendwiseError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map(Some)
        .map_err(|e| SpendwiseError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read JSON from a file, substituting `fallback()` when the file is missing
/// or unreadable
///
/// Unreadable files are logged and left in place; the next save overwrites
/// them.
pub fn read_json_or_else<T, P, F>(path: P, fallback: F) -> T
where
    T: DeserializeOwned,
    P: AsRef<Path>,
    F: FnOnce() -> T,
{
    let path = path.as_ref();

    match read_json(path) {
        Ok(Some(value)) => {
            debug!(path = %path.display(), "loaded");
            value
        }
        Ok(None) => {
            debug!(path = %path.display(), "file missing, using defaults");
            fallback()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable file, using defaults");
            fallback()
        }
    }
}

/// Read a JSON array, keeping every record that deserializes as `T`
///
/// Records that do not match are logged and dropped. A missing file yields
/// `fallback()`; so does an unreadable one. Whenever something is dropped the
/// file on disk is first copied to `<name>.json.corrupt`, since the next save
/// overwrites it.
pub fn read_json_list_or_else<T, P, F>(path: P, fallback: F) -> Vec<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
    F: FnOnce() -> Vec<T>,
{
    let path = path.as_ref();

    let records: Vec<serde_json::Value> = match read_json(path) {
        Ok(Some(records)) => records,
        Ok(None) => {
            debug!(path = %path.display(), "file missing, using defaults");
            return fallback();
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable file, using defaults");
            preserve_corrupt(path);
            return fallback();
        }
    };

    let total = records.len();
    let items: Vec<T> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(path = %path.display(), index, error = %e, "skipping unreadable record");
                None
            }
        })
        .collect();

    let skipped = total - items.len();
    if skipped > 0 {
        preserve_corrupt(path);
    }
    debug!(path = %path.display(), loaded = items.len(), skipped, "loaded");
    items
}

/// Where an unreadable file is copied before it can be overwritten
pub fn corrupt_copy_path(path: &Path) -> PathBuf {
    path.with_extension("json.corrupt")
}

fn preserve_corrupt(path: &Path) {
    let copy = corrupt_copy_path(path);
    match fs::copy(path, &copy) {
        Ok(_) => warn!(copy = %copy.display(), "kept a copy of the unreadable file"),
        Err(e) => warn!(path = %path.display(), error = %e, "failed to keep a copy of the unreadable file"),
    }
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), SpendwiseError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SpendwiseError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| SpendwiseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| SpendwiseError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| SpendwiseError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SpendwiseError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SpendwiseError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    debug!(path = %path.display(), "saved");
    Ok(())
}
