//! Display formatting for terminal output
//!
//! Formats the ledger view, month list, budget and category chart as plain
//! text, and provides the [`TextPresenter`] used by one-shot commands.

pub mod ledger;
pub mod presenter;

pub use ledger::{
    format_added, format_budget, format_categories, format_chart, format_ledger,
    format_month_list,
};
pub use presenter::TextPresenter;
