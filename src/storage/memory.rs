//! In-memory durable map
//!
//! Nothing survives the process. Used by tests and as a scratch backend.

use std::collections::HashMap;

use crate::error::SpendbookResult;

use super::DurableMap;

/// A durable map that lives in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryMap {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, without counting it as a write
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Number of `set` calls so far
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl DurableMap for MemoryMap {
    fn get(&self, key: &str) -> SpendbookResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> SpendbookResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
