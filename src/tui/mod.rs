//! Terminal User Interface module
//!
//! Interactive ledger using ratatui: the month list on the left, the
//! selected month's summary, expenses and category chart on the right, and
//! dialogs for adding expenses, setting the budget and confirming deletes.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::{App, Screen};
pub use terminal::run_tui;
