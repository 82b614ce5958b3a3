//! Presentation-independent view layer
//!
//! The session hands a [`Presenter`] the month list, a [`LedgerView`] for
//! the selected month, the budget progress and a freshly built [`PieChart`].
//! The command line and the TUI each implement `Presenter`.

pub mod chart;
pub mod model;

pub use chart::{PieChart, PieSlice, CHART_TITLE, PALETTE};
pub use model::{build_view, BudgetProgress, ExpenseLine, LedgerView};

use crate::models::MonthKey;

/// A passive render target
pub trait Presenter {
    /// Month selector contents, newest first
    fn show_months(&mut self, months: &[MonthKey], selected: &MonthKey);

    /// Expense lines and total for the selected month
    fn show_ledger(&mut self, view: &LedgerView);

    /// Budget progress and remaining budget
    fn show_budget(&mut self, progress: &BudgetProgress);

    /// Replace the current chart
    fn show_chart(&mut self, chart: PieChart);
}
