//! Category breakdown chart
//!
//! A `PieChart` is rebuilt from scratch on every render; presenters replace
//! whatever chart they were showing with the new one.

use crate::models::{format_money, CategoryTotal};

/// Slice colours, reused in order when there are more slices
pub const PALETTE: [&str; 5] = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF"];

pub const CHART_TITLE: &str = "Expenses by Category";

/// One category's slice
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// `#RRGGBB`
    pub color: &'static str,
}

impl PieSlice {
    /// The slice colour as RGB components
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Data and display options for the category pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: &'static str,
    pub slices: Vec<PieSlice>,
    currency: String,
}

impl PieChart {
    /// Build a chart from category totals, keeping their order
    pub fn from_totals(totals: &[CategoryTotal], currency: &str) -> Self {
        let slices = totals
            .iter()
            .enumerate()
            .map(|(i, total)| PieSlice {
                label: total.category.clone(),
                value: total.amount,
                color: PALETTE[i % PALETTE.len()],
            })
            .collect();

        Self {
            title: CHART_TITLE,
            slices,
            currency: currency.to_string(),
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.slices.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.slices.iter().map(|s| s.value).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Sum of all slice values
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Share of the whole for a value, in percent (0 when the whole is 0)
    pub fn percentage(&self, value: f64) -> f64 {
        let total = self.total();
        if total == 0.0 {
            0.0
        } else {
            value / total * 100.0
        }
    }

    /// Tooltip for the slice at `index`: `label: €amount (percentage%)`
    pub fn tooltip_label(&self, index: usize) -> Option<String> {
        let slice = self.slices.get(index)?;
        Some(format!(
            "{}: {} ({:.2}%)",
            slice.label,
            format_money(&self.currency, slice.value),
            self.percentage(slice.value)
        ))
    }
}
