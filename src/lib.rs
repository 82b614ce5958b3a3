//! Spendbook - monthly expense tracker for the terminal
//!
//! Expenses are grouped by the month of their date and kept in a small
//! string-keyed durable store. Each month can be viewed as a list, a total,
//! progress against a single monthly budget and a per-category breakdown.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records, month keys and the ledger
//! - `storage`: Durable key/value maps (file and in-memory)
//! - `services`: Ledger store and clock
//! - `view`: Pure view model and the `Presenter` seam
//! - `session`: Selected month and re-render rules
//! - `audit`: Audit logging system
//! - `cli`, `display`: One-shot commands and their text output
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use spendbook::services::{FixedClock, LedgerStore};
//! use spendbook::storage::MemoryMap;
//!
//! let clock = FixedClock(chrono::NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
//! let mut store = LedgerStore::load(MemoryMap::new(), clock)?;
//! store.set_budget("100")?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;
pub mod tui;
pub mod view;

pub use error::SpendbookError;
