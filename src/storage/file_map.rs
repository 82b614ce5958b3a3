//! File-backed durable map
//!
//! All keys live in one JSON object file (`data/storage.json`). The file is
//! read once when the map is opened and rewritten atomically on every `set`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::SpendbookResult;

use super::file_io::{read_json, write_json_atomic};
use super::DurableMap;

/// A string map persisted as a single JSON object
#[derive(Debug)]
pub struct FileMap {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileMap {
    /// Open the map at `path`; a missing file is an empty map
    pub fn open(path: PathBuf) -> SpendbookResult<Self> {
        let entries: BTreeMap<String, String> = read_json(&path)?;
        Ok(Self { path, entries })
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Whether the backing file has been written yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl DurableMap for FileMap {
    fn get(&self, key: &str) -> SpendbookResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> SpendbookResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        write_json_atomic(&self.path, &self.entries)
    }
}
