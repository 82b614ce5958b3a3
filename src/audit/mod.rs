//! Audit logging for Spendbook
//!
//! Every ledger mutation (add, delete, budget change) is appended to
//! `audit.log` as one JSON line, with the affected record or the old and new
//! budget values.
//!
//! # Example
//!
//! ```rust,ignore
//! use spendbook::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::set_budget(None, "100"))?;
//! for entry in logger.read_recent(10)? {
//!     println!("{}", entry.format_human_readable());
//! }
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
