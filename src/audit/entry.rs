//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ExpenseRecord, MonthKey};

/// Ledger mutations that get audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// An expense was appended to a month
    Add,
    /// An expense was removed from a month
    Delete,
    /// The monthly budget was replaced
    SetBudget,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "ADD"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::SetBudget => write!(f, "SET_BUDGET"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Month the expense was filed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<MonthKey>,

    /// Position within the month
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,

    /// Value before the operation (deletes, budget changes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Value after the operation (adds, budget changes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for an appended expense
    pub fn add(month: &MonthKey, index: usize, record: &ExpenseRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Add,
            month: Some(month.clone()),
            index: Some(index),
            before: None,
            after: serde_json::to_value(record).ok(),
        }
    }

    /// Entry for a removed expense
    pub fn delete(month: &MonthKey, index: usize, record: &ExpenseRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            month: Some(month.clone()),
            index: Some(index),
            before: serde_json::to_value(record).ok(),
            after: None,
        }
    }

    /// Entry for a budget change; an unset budget is recorded as `null`
    pub fn set_budget(before: Option<&str>, after: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::SetBudget,
            month: None,
            index: None,
            before: Some(before.map_or(serde_json::Value::Null, |b| b.into())),
            after: Some(after.into()),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(month) = &self.month {
            output.push_str(&format!(" {}", month));
        }
        if let Some(index) = self.index {
            output.push_str(&format!(" #{}", index + 1));
        }

        match self.operation {
            Operation::Add | Operation::Delete => {
                let record = self
                    .after
                    .as_ref()
                    .or(self.before.as_ref())
                    .and_then(|v| serde_json::from_value::<ExpenseRecord>(v.clone()).ok());
                if let Some(record) = record {
                    output.push_str(&format!(
                        " {} {} ({})",
                        record.description, record.amount, record.category
                    ));
                }
            }
            Operation::SetBudget => {
                output.push_str(&format!(
                    " {} -> {}",
                    display_value(self.before.as_ref()),
                    display_value(self.after.as_ref())
                ));
            }
        }

        output
    }
}

fn display_value(value: Option<&serde_json::Value>) -> String {
    match value {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => "(unset)".to_string(),
        Some(other) => other.to_string(),
    }
}
