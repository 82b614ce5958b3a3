//! Dialog modules for the TUI
//!
//! Contains modal dialogs for the ledger operations

pub mod budget;
pub mod confirm;
pub mod expense;
