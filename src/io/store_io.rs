use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::task::TaskRecord;

/// Name of the persisted task file, kept next to where jot is launched
pub const DATA_FILE: &str = "tasks.json";

/// Error type for task-file I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreIoError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize tasks: {0}")]
    Serialize(serde_json::Error),
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

/// Read the persisted task file.
/// A missing file is an empty list, not an error; malformed content is.
pub fn read_tasks(path: &Path) -> Result<Vec<TaskRecord>, StoreIoError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(StoreIoError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    serde_json::from_str(&content).map_err(|e| StoreIoError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Overwrite the persisted task file with the full record list.
pub fn write_tasks(path: &Path, records: &[TaskRecord]) -> Result<(), StoreIoError> {
    let content = serde_json::to_string_pretty(records).map_err(StoreIoError::Serialize)?;
    atomic_write(path, content.as_bytes()).map_err(|e| StoreIoError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write via a temp file in the same directory, then rename into place.
/// Readers never observe a partially written file.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
