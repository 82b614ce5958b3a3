//! Core data models for Spendbook
//!
//! - [`ExpenseRecord`]: one entered expense, kept exactly as typed
//! - [`MonthKey`]: the `YYYY-MM` grouping key
//! - [`Ledger`]: month key → records, with the derived totals
//! - [`amount`]: parse-or-zero coercion and two-decimal formatting

pub mod amount;
pub mod expense;
pub mod ledger;
pub mod month;

pub use amount::{coerce_amount, format_amount, format_money};
pub use expense::ExpenseRecord;
pub use ledger::{CategoryTotal, Ledger, LedgerEntry};
pub use month::MonthKey;
