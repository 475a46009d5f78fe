use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Entry;

/// Failures raised by the add path. Kept as a typed enum (rather than bare
/// `anyhow`) so callers can tell a refused duplicate apart from an I/O
/// problem when deciding what to put on the status line.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("watchlist names cannot contain path separators: {0:?}")]
    InvalidName(String),
    #[error("watchlist entry {0:?} already exists")]
    Duplicate(String),
    #[error("failed to encode record {name:?}")]
    Encode {
        name: String,
        source: toml::ser::Error,
    },
    #[error("failed to write record {name:?}")]
    Write {
        name: String,
        source: std::io::Error,
    },
}

/// On-disk shape of a record file. The movie name is deliberately absent:
/// the file name carries it, so renaming a file renames the entry. All
/// fields default so hand-edited files may omit any of them.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RecordFile {
    #[serde(default)]
    genre: String,
    #[serde(default)]
    other: String,
    #[serde(default)]
    recommended_by: BTreeMap<String, String>,
}

impl RecordFile {
    fn from_entry(entry: &Entry) -> Self {
        Self {
            genre: entry.genre.clone(),
            other: entry.other.clone(),
            recommended_by: entry.recommended_by.clone(),
        }
    }

    fn into_entry(self, name: String) -> Entry {
        Entry {
            name,
            genre: self.genre,
            other: self.other,
            recommended_by: self.recommended_by,
        }
    }
}

/// Read every record in the watchlist directory. File names are sorted
/// before decoding so the catalog order is stable for a given load. A
/// missing or unreadable directory, or an undecodable record, is an error;
/// at startup that is fatal because there is no catalog to browse.
pub fn load_catalog(dir: &Path) -> Result<Vec<Entry>> {
    let mut names = Vec::new();
    let listing = fs::read_dir(dir)
        .with_context(|| format!("failed to read watchlist directory {}", dir.display()))?;
    for item in listing {
        let item = item.context("failed to list watchlist directory entry")?;
        if !item.file_type().context("failed to stat record")?.is_file() {
            continue;
        }
        let Ok(name) = item.file_name().into_string() else {
            continue;
        };
        // Editor swap files and the like; records never start with a dot.
        if name.starts_with('.') {
            continue;
        }
        names.push(name);
    }
    names.sort();

    let mut catalog = Vec::with_capacity(names.len());
    for name in names {
        let path = dir.join(&name);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read record {}", path.display()))?;
        let record: RecordFile = toml::from_str(&raw)
            .with_context(|| format!("failed to decode record {}", path.display()))?;
        catalog.push(record.into_entry(name));
    }
    Ok(catalog)
}

/// Persist a new entry as its own record file. Refuses names containing a
/// path separator and names that already exist on disk; an existing record
/// is never touched.
pub fn add_entry(dir: &Path, entry: &Entry) -> Result<(), StoreError> {
    if entry.name.is_empty() || entry.name.chars().any(std::path::is_separator) {
        return Err(StoreError::InvalidName(entry.name.clone()));
    }
    let path = dir.join(&entry.name);
    if path.exists() {
        return Err(StoreError::Duplicate(entry.name.clone()));
    }
    let encoded =
        toml::to_string_pretty(&RecordFile::from_entry(entry)).map_err(|source| {
            StoreError::Encode {
                name: entry.name.clone(),
                source,
            }
        })?;
    fs::write(&path, encoded).map_err(|source| StoreError::Write {
        name: entry.name.clone(),
        source,
    })
}
