mod aliases;
mod history;

#[cfg(test)]
mod tests;

pub use aliases::{AliasSet, AliasStore};
pub use history::{HISTORY_LIMIT, HistoryEntry, HistoryLog, HistoryStore};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::paths::StorePaths;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("alias '{alias}' not found")]
    NotFound { alias: String },
    #[error("failed to read {}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode {}", path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// True iff neither backing file exists yet. Re-derived on every invocation,
/// never persisted.
pub fn first_run(paths: &StorePaths) -> bool {
    !paths.aliases.exists() && !paths.history.exists()
}

/// Absent file decodes as the schema's default rather than an error.
fn load_json<T>(path: &Path) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(err) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };
    serde_json::from_str(&raw).map_err(|err| StoreError::Parse {
        path: path.to_path_buf(),
        source: err,
    })
}

/// Pretty-printed full overwrite, creating the containing directory on first
/// use.
fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| StoreError::Write {
            path: path.to_path_buf(),
            source: err,
        })?;
    }
    let raw = serde_json::to_string_pretty(value).map_err(|err| StoreError::Encode {
        path: path.to_path_buf(),
        source: err,
    })?;
    fs::write(path, raw).map_err(|err| StoreError::Write {
        path: path.to_path_buf(),
        source: err,
    })
}
