//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the session layer.

pub mod budget;
pub mod expense;
pub mod history;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_add, handle_delete, handle_months, handle_show};
pub use history::handle_history;

use chrono::NaiveDate;

use crate::audit::AuditLogger;
use crate::config::{Settings, SpendbookPaths};
use crate::display::TextPresenter;
use crate::error::{SpendbookError, SpendbookResult};
use crate::models::MonthKey;
use crate::services::{LedgerStore, SystemClock};
use crate::session::Session;
use crate::storage::FileMap;

/// Session type used by one-shot commands
pub type CliSession = Session<FileMap, SystemClock, TextPresenter>;

/// Open the file-backed ledger store, with auditing if enabled
pub fn open_store(
    paths: &SpendbookPaths,
    settings: &Settings,
) -> SpendbookResult<LedgerStore<FileMap, SystemClock>> {
    paths.ensure_directories()?;

    let map = FileMap::open(paths.storage_file())?;
    let store = LedgerStore::load(map, SystemClock)?;

    Ok(if settings.audit_enabled {
        store.with_audit(AuditLogger::new(paths.audit_log()))
    } else {
        store
    })
}

/// Open a session for one command, on `month` or the current month
pub fn open_session(
    paths: &SpendbookPaths,
    settings: &Settings,
    month: Option<MonthKey>,
) -> SpendbookResult<CliSession> {
    let store = open_store(paths, settings)?;
    let presenter = TextPresenter::new(settings.currency_symbol.clone());
    let session = Session::new(store, presenter, settings.currency_symbol.clone());

    Ok(match month {
        Some(month) => session.with_selected_month(month),
        None => session,
    })
}

/// Parse a `YYYY-MM-DD` date given on the command line
pub fn parse_date(s: &str) -> SpendbookResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        SpendbookError::Validation(format!(
            "Invalid date '{}'. Expected YYYY-MM-DD (e.g. 2024-05-02)",
            s
        ))
    })
}
