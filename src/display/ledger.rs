//! Ledger display formatting
//!
//! Plain-text renderings of the month list, the selected month's expenses,
//! the budget progress and the category chart.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{format_amount, MonthKey};
use crate::view::{BudgetProgress, LedgerView, PieChart};

const BAR_WIDTH: usize = 30;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Month selector: newest first, selected month marked
pub fn format_month_list(months: &[MonthKey], selected: &MonthKey) -> String {
    let mut output = String::from("Months:\n");
    for month in months {
        let marker = if month == selected { ">" } else { " " };
        output.push_str(&format!("  {} {}\n", marker, month));
    }
    output
}

/// Header, expense table and total for the selected month
///
/// Positions are shown 1-based, matching what `spendbook delete` takes.
pub fn format_ledger(view: &LedgerView) -> String {
    let mut output = String::new();
    output.push_str(&view.header_text());
    output.push('\n');

    if view.lines.is_empty() {
        output.push_str("No expenses for this month.\n");
    } else {
        let rows = view.lines.iter().map(|line| ExpenseRow {
            position: line.index + 1,
            description: line.record.description.clone(),
            amount: format!("{}{}", view.currency, line.record.amount),
            category: line.record.category.clone(),
            date: line.record.date.clone(),
        });
        output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        output.push('\n');
    }

    output.push_str(&view.total_text());
    output.push('\n');
    output
}

/// Progress line plus the remaining line when a budget is set
pub fn format_budget(progress: &BudgetProgress, currency: &str) -> String {
    let mut output = progress.progress_text(currency);
    output.push('\n');

    let remaining = progress.remaining_text(currency);
    if !remaining.is_empty() {
        output.push_str(&remaining);
        output.push('\n');
    }
    output
}

/// Horizontal bars standing in for the pie chart, one per slice
pub fn format_chart(chart: &PieChart) -> String {
    let mut output = format!("{}\n", chart.title);

    if chart.is_empty() {
        output.push_str("  (no expenses)\n");
        return output;
    }

    let label_width = chart
        .slices
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0);

    for (i, slice) in chart.slices.iter().enumerate() {
        let share = chart.percentage(slice.value).clamp(0.0, 100.0);
        let filled = (share / 100.0 * BAR_WIDTH as f64).round() as usize;
        let tooltip = chart.tooltip_label(i).unwrap_or_default();
        output.push_str(&format!(
            "  {:<width$} {}{} {}\n",
            slice.label,
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            tooltip,
            width = label_width
        ));
    }

    output
}

/// The configured category labels
pub fn format_categories(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories configured.\n".to_string();
    }

    let mut output = String::from("Categories:\n");
    for category in categories {
        output.push_str(&format!("  {}\n", category));
    }
    output
}

/// Short confirmation after an expense was filed
pub fn format_added(description: &str, amount: f64, currency: &str, month: &MonthKey) -> String {
    format!(
        "Added '{}' ({}{}) to {}.",
        description,
        currency,
        format_amount(amount),
        month
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, Ledger};
    use crate::view::build_view;

    fn view(budget: Option<&str>) -> LedgerView {
        let mut ledger = Ledger::new();
        ledger.push(ExpenseRecord::new("Coffee", "3.50", "2024-05-02", "Food"));
        ledger.push(ExpenseRecord::new("Bus", "1.50", "2024-05-03", "Transport"));
        build_view(&ledger, &MonthKey::from_raw("2024-05"), budget, "€")
    }

    #[test]
    fn test_month_list_marks_selected() {
        let months = vec![MonthKey::from_raw("2024-05"), MonthKey::from_raw("2023-01")];
        let text = format_month_list(&months, &months[1]);

        assert!(text.contains("    2024-05\n"));
        assert!(text.contains("  > 2023-01\n"));
    }

    #[test]
    fn test_ledger_table() {
        let text = format_ledger(&view(None));

        assert!(text.starts_with("Selected Month: 2024-05\n"));
        assert!(text.contains("Coffee"));
        assert!(text.contains("€3.50"));
        assert!(text.contains("Transport"));
        assert!(text.ends_with("Total Expenses: €5.00\n"));
    }

    #[test]
    fn test_empty_ledger() {
        let empty = build_view(&Ledger::new(), &MonthKey::from_raw("2024-06"), None, "€");
        let text = format_ledger(&empty);

        assert!(text.contains("No expenses for this month."));
        assert!(text.contains("Total Expenses: €0.00"));
    }

    #[test]
    fn test_budget_lines() {
        let tracked = format_budget(&view(Some("10")).progress, "€");
        assert_eq!(
            tracked,
            "Budget Progress: 50.00% (€5.00 / €10)\nRemaining Budget: €5.00\n"
        );

        let unset = format_budget(&view(None).progress, "€");
        assert_eq!(unset, "Set a monthly budget to track progress\n");
    }

    #[test]
    fn test_chart_bars() {
        let text = format_chart(&view(None).chart());

        assert!(text.starts_with("Expenses by Category\n"));
        assert!(text.contains("Food: €3.50 (70.00%)"));
        assert!(text.contains("Transport: €1.50 (30.00%)"));
        assert!(text.contains(&"█".repeat(21)));
    }

    #[test]
    fn test_added_message() {
        let text = format_added("Boots", 80.0, "€", &MonthKey::from_raw("2023-01"));
        assert_eq!(text, "Added 'Boots' (€80.00) to 2023-01.");
    }
}
