//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::RecappeError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, RecappeError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    read_json_required(path)
}

/// Read JSON from a file, returning an error if file doesn't exist
///
/// A missing path and a path naming a directory both give
/// [`RecappeError::FileNotFound`]. Content that does not deserialize into `T`
/// gives [`RecappeError::MalformedData`].
pub fn read_json_required<T, P>(path: P) -> Result<T, RecappeError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.is_file() {
        return Err(RecappeError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => RecappeError::FileNotFound(path.to_path_buf()),
        _ => RecappeError::Io(format!("Failed to open {}: {}", path.display(), e)),
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| RecappeError::malformed(path, e))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The parent directory must already exist. Any previous content at `path`
/// is replaced.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), RecappeError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Create temp file in same directory (important for atomic rename)
    let temp_path = temp_path_for(path)?;

    let file = File::create(&temp_path).map_err(|e| {
        RecappeError::Io(format!("Failed to create {}: {}", temp_path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| RecappeError::Io(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| RecappeError::Io(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| RecappeError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        RecappeError::Io(format!("Failed to write {}: {}", path.display(), e))
    })?;

    Ok(())
}

/// Write text lines to a file, each followed by `\n`
///
/// With `append` the lines go after any existing content, otherwise the file
/// is truncated first. The file is created if needed; its directory is not.
pub fn write_lines<I, S, P>(path: P, lines: I, append: bool) -> Result<(), RecappeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .map_err(|e| RecappeError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .map_err(|e| RecappeError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
    }

    writer
        .flush()
        .map_err(|e| RecappeError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// `<dir>/<name>.tmp` next to the target file
fn temp_path_for(path: &Path) -> Result<PathBuf, RecappeError> {
    let file_name = path.file_name().ok_or_else(|| {
        RecappeError::Io(format!("No file name in path {}", path.display()))
    })?;

    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}
