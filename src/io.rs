//! JSON file helpers shared by the configuration loader and the tools.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonIoError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize JSON for {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, JsonIoError> {
    let data = fs::read_to_string(path).map_err(|source| JsonIoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| JsonIoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Pretty-prints `value` into `path`, creating missing parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), JsonIoError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| JsonIoError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| JsonIoError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), JsonIoError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| JsonIoError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
