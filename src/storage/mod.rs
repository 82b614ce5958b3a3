//! Storage layer for Spendbook
//!
//! The ledger persists through a [`DurableMap`]: a synchronous, string-keyed,
//! string-valued store. [`FileMap`] keeps it in one JSON file with atomic
//! writes; [`MemoryMap`] keeps it in memory.

pub mod file_io;
pub mod file_map;
pub mod memory;

pub use file_io::{read_json, write_json_atomic};
pub use file_map::FileMap;
pub use memory::MemoryMap;

use crate::error::SpendbookResult;

/// Key holding the JSON-encoded ledger
pub const EXPENSES_KEY: &str = "expenses";

/// Key holding the raw monthly budget string
pub const BUDGET_KEY: &str = "monthlyBudget";

/// Synchronous string-keyed durable storage
pub trait DurableMap {
    /// Read a value, `None` if the key was never set
    fn get(&self, key: &str) -> SpendbookResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> SpendbookResult<()>;
}
