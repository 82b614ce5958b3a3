//! View model for one selected month
//!
//! [`build_view`] is a pure function of the ledger, the selected month and
//! the budget. Presenters only format what it produces.

use crate::models::{format_money, CategoryTotal, ExpenseRecord, Ledger, MonthKey};

use super::chart::PieChart;

/// One rendered expense with its position for deletion
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseLine {
    /// Position within the selected month (what delete takes)
    pub index: usize,
    /// Unreadable entries carry their raw JSON as the description
    pub record: ExpenseRecord,
    /// `description - €amount (category) - date`
    pub text: String,
}

/// How the month's spending compares to the budget
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetProgress {
    /// Budget is unset, zero, negative or not a number
    Unset,
    /// A positive budget is set
    Tracking {
        total: f64,
        /// The budget as entered
        budget: String,
        percentage: f64,
        /// Negative once the budget is exceeded
        remaining: f64,
    },
}

impl BudgetProgress {
    /// Compare `total` against the raw budget string
    pub fn compute(total: f64, budget: Option<&str>) -> Self {
        let Some(raw) = budget else {
            return Self::Unset;
        };

        let value = crate::models::coerce_amount(raw);
        if value <= 0.0 {
            return Self::Unset;
        }

        Self::Tracking {
            total,
            budget: raw.to_string(),
            percentage: total / value * 100.0,
            remaining: value - total,
        }
    }

    pub fn progress_text(&self, currency: &str) -> String {
        match self {
            Self::Unset => "Set a monthly budget to track progress".to_string(),
            Self::Tracking {
                total,
                budget,
                percentage,
                ..
            } => format!(
                "Budget Progress: {:.2}% ({} / {}{})",
                percentage,
                format_money(currency, *total),
                currency,
                budget
            ),
        }
    }

    /// Empty when no budget is set
    pub fn remaining_text(&self, currency: &str) -> String {
        match self {
            Self::Unset => String::new(),
            Self::Tracking { remaining, .. } => {
                format!("Remaining Budget: {}", format_money(currency, *remaining))
            }
        }
    }

    /// Spent fraction for gauges, clamped to `0.0..=1.0`
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Self::Unset => None,
            Self::Tracking { percentage, .. } => Some((percentage / 100.0).clamp(0.0, 1.0)),
        }
    }

    pub fn is_over_budget(&self) -> bool {
        matches!(self, Self::Tracking { remaining, .. } if *remaining < 0.0)
    }
}

/// Everything a presenter needs to draw the selected month
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerView {
    pub selected_month: MonthKey,
    pub lines: Vec<ExpenseLine>,
    pub total: f64,
    pub progress: BudgetProgress,
    pub category_totals: Vec<CategoryTotal>,
    pub currency: String,
}

impl LedgerView {
    pub fn header_text(&self) -> String {
        format!("Selected Month: {}", self.selected_month)
    }

    pub fn total_text(&self) -> String {
        format!("Total Expenses: {}", format_money(&self.currency, self.total))
    }

    pub fn progress_text(&self) -> String {
        self.progress.progress_text(&self.currency)
    }

    pub fn remaining_text(&self) -> String {
        self.progress.remaining_text(&self.currency)
    }

    /// A fresh chart for this month's category totals
    pub fn chart(&self) -> PieChart {
        PieChart::from_totals(&self.category_totals, &self.currency)
    }
}

/// Derive the view for `selected` from the ledger and budget
pub fn build_view(
    ledger: &Ledger,
    selected: &MonthKey,
    budget: Option<&str>,
    currency: &str,
) -> LedgerView {
    let lines = ledger
        .entries(selected)
        .iter()
        .enumerate()
        .map(|(index, entry)| ExpenseLine {
            index,
            text: entry.display_line(currency),
            record: entry.to_record(),
        })
        .collect();

    let total = ledger.total_for(selected);

    LedgerView {
        selected_month: selected.clone(),
        lines,
        total,
        progress: BudgetProgress::compute(total, budget),
        category_totals: ledger.category_totals_for(selected),
        currency: currency.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may() -> MonthKey {
        MonthKey::from_raw("2024-05")
    }

    fn ledger_with_coffee() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.push(ExpenseRecord::new("Coffee", "3.50", "2024-05-02", "Food"));
        ledger
    }

    #[test]
    fn test_view_for_single_expense() {
        let view = build_view(&ledger_with_coffee(), &may(), None, "€");

        assert_eq!(view.header_text(), "Selected Month: 2024-05");
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].index, 0);
        assert_eq!(view.lines[0].text, "Coffee - €3.50 (Food) - 2024-05-02");
        assert_eq!(view.total_text(), "Total Expenses: €3.50");
        assert_eq!(view.category_totals.len(), 1);
        assert_eq!(view.category_totals[0].category, "Food");
    }

    #[test]
    fn test_progress_with_budget() {
        let view = build_view(&ledger_with_coffee(), &may(), Some("100"), "€");

        assert_eq!(view.progress_text(), "Budget Progress: 3.50% (€3.50 / €100)");
        assert_eq!(view.remaining_text(), "Remaining Budget: €96.50");
        assert!(!view.progress.is_over_budget());
    }

    #[test]
    fn test_progress_without_budget() {
        for budget in [None, Some("0"), Some("-5"), Some("abc")] {
            let view = build_view(&ledger_with_coffee(), &may(), budget, "€");
            assert_eq!(view.progress, BudgetProgress::Unset);
            assert_eq!(view.progress_text(), "Set a monthly budget to track progress");
            assert_eq!(view.remaining_text(), "");
            assert_eq!(view.progress.ratio(), None);
        }
    }

    #[test]
    fn test_negative_remaining_is_shown() {
        let progress = BudgetProgress::compute(150.0, Some("100"));

        assert_eq!(progress.remaining_text("€"), "Remaining Budget: €-50.00");
        assert_eq!(progress.progress_text("€"), "Budget Progress: 150.00% (€150.00 / €100)");
        assert!(progress.is_over_budget());
        assert_eq!(progress.ratio(), Some(1.0));
    }

    #[test]
    fn test_unreadable_entries_keep_their_position() {
        let raw = r#"{"2024-05":["note",{"description":"Coffee","amount":"3.50","date":"2024-05-02","category":"Food"}]}"#;
        let ledger = Ledger::from_document(raw).unwrap();
        let view = build_view(&ledger, &may(), None, "€");

        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].text, "(unreadable entry: \"note\")");
        assert_eq!(view.lines[1].index, 1);
        assert_eq!(view.lines[1].record.description, "Coffee");
        assert_eq!(view.total_text(), "Total Expenses: €3.50");
    }

    #[test]
    fn test_empty_month() {
        let view = build_view(&Ledger::new(), &may(), Some("100"), "$");

        assert!(view.lines.is_empty());
        assert_eq!(view.total_text(), "Total Expenses: $0.00");
        assert_eq!(view.remaining_text(), "Remaining Budget: $100.00");
        assert!(view.chart().is_empty());
    }
}
