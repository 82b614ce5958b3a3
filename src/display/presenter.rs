//! Text presenter for one-shot command line output
//!
//! Collects what the session shows into a buffer that the command prints
//! once it is done. A later `show_months` or `show_chart` replaces the
//! earlier one, so a command that renders twice still prints each section
//! once.

use crate::models::MonthKey;
use crate::view::{BudgetProgress, LedgerView, PieChart, Presenter};

use super::ledger::{format_budget, format_chart, format_ledger, format_month_list};

/// Buffers the latest text for each section
#[derive(Debug, Default)]
pub struct TextPresenter {
    currency: String,
    months: Option<String>,
    ledger: Option<String>,
    budget: Option<String>,
    chart: Option<String>,
}

impl TextPresenter {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            ..Self::default()
        }
    }

    /// All sections shown so far, in page order
    pub fn output(&self) -> String {
        [&self.months, &self.ledger, &self.budget, &self.chart]
            .into_iter()
            .flatten()
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Presenter for TextPresenter {
    fn show_months(&mut self, months: &[MonthKey], selected: &MonthKey) {
        self.months = Some(format_month_list(months, selected));
    }

    fn show_ledger(&mut self, view: &LedgerView) {
        self.ledger = Some(format_ledger(view));
    }

    fn show_budget(&mut self, progress: &BudgetProgress) {
        self.budget = Some(format_budget(progress, &self.currency));
    }

    fn show_chart(&mut self, chart: PieChart) {
        self.chart = Some(format_chart(&chart));
    }
}
