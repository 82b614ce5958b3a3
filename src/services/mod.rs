//! Business logic layer for Spendbook

pub mod clock;
pub mod ledger_store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ledger_store::{AddOutcome, LedgerStore};
