//! The ledger: month key → stored entries
//!
//! The whole ledger is stored as one JSON object keyed by month. Reading it
//! back changes nothing: a month whose value is not an array is kept as-is
//! (listed, but treated as absent until [`Ledger::ensure_month`] replaces it
//! with an empty month) and array elements that are not records are carried
//! as raw JSON, so positions and the written document match what was read.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::expense::ExpenseRecord;
use super::month::MonthKey;
use crate::error::{SpendbookError, SpendbookResult};

/// Summed amount for one category in a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// One element of a month's array
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LedgerEntry {
    /// An object, read leniently as an expense
    Record(ExpenseRecord),
    /// Anything else, written back unchanged
    Opaque(serde_json::Value),
}

impl LedgerEntry {
    fn from_value(value: serde_json::Value) -> Self {
        if !value.is_object() {
            return Self::Opaque(value);
        }
        match serde_json::from_value::<ExpenseRecord>(value.clone()) {
            Ok(record) => Self::Record(record),
            Err(_) => Self::Opaque(value),
        }
    }

    /// The entry as an expense; non-records carry their JSON as the description
    pub fn to_record(&self) -> ExpenseRecord {
        match self {
            Self::Record(record) => record.clone(),
            Self::Opaque(value) => ExpenseRecord {
                description: value.to_string(),
                ..ExpenseRecord::default()
            },
        }
    }

    pub fn as_record(&self) -> Option<&ExpenseRecord> {
        match self {
            Self::Record(record) => Some(record),
            Self::Opaque(_) => None,
        }
    }

    /// Coerced amount; zero for non-records
    pub fn numeric_amount(&self) -> f64 {
        self.as_record().map_or(0.0, ExpenseRecord::numeric_amount)
    }

    /// Display line: `description - €amount (category) - date`
    pub fn display_line(&self, currency: &str) -> String {
        match self {
            Self::Record(record) => record.display_line(currency),
            Self::Opaque(value) => format!("(unreadable entry: {})", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
enum MonthSlot {
    Entries(Vec<LedgerEntry>),
    Malformed(serde_json::Value),
}

/// Month-grouped expense entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ledger {
    months: BTreeMap<MonthKey, MonthSlot>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the stored JSON document
    ///
    /// `null` and non-object documents yield an empty ledger. Text that is
    /// not JSON at all is an error.
    pub fn from_document(raw: &str) -> SpendbookResult<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| SpendbookError::Storage(format!("Failed to parse stored expenses: {}", e)))?;

        let mut ledger = Self::new();
        let serde_json::Value::Object(map) = value else {
            return Ok(ledger);
        };

        for (key, month_value) in map {
            let slot = match month_value {
                serde_json::Value::Array(items) => {
                    MonthSlot::Entries(items.into_iter().map(LedgerEntry::from_value).collect())
                }
                other => MonthSlot::Malformed(other),
            };
            ledger.months.insert(MonthKey::from_raw(key), slot);
        }

        Ok(ledger)
    }

    /// Serialize to the stored JSON document
    pub fn to_document(&self) -> SpendbookResult<String> {
        serde_json::to_string(self)
            .map_err(|e| SpendbookError::Json(format!("Failed to serialize expenses: {}", e)))
    }

    /// Whether `month` has a usable entry (possibly empty)
    pub fn contains_month(&self, month: &MonthKey) -> bool {
        matches!(self.months.get(month), Some(MonthSlot::Entries(_)))
    }

    /// Give `month` an empty entry if it has none or a malformed one;
    /// returns true if one was created
    pub fn ensure_month(&mut self, month: &MonthKey) -> bool {
        if self.contains_month(month) {
            return false;
        }
        self.months.insert(month.clone(), MonthSlot::Entries(Vec::new()));
        true
    }

    /// Append a record to the month its date falls in
    pub fn push(&mut self, record: ExpenseRecord) -> MonthKey {
        let month = record.month();
        self.ensure_month(&month);
        if let Some(MonthSlot::Entries(entries)) = self.months.get_mut(&month) {
            entries.push(LedgerEntry::Record(record));
        }
        month
    }

    /// Remove the entry at `index` in `month`, if there is one
    pub fn remove(&mut self, month: &MonthKey, index: usize) -> Option<LedgerEntry> {
        let Some(MonthSlot::Entries(entries)) = self.months.get_mut(month) else {
            return None;
        };
        if index < entries.len() {
            Some(entries.remove(index))
        } else {
            None
        }
    }

    /// Entries filed under `month`, in insertion order
    pub fn entries(&self, month: &MonthKey) -> &[LedgerEntry] {
        match self.months.get(month) {
            Some(MonthSlot::Entries(entries)) => entries.as_slice(),
            _ => &[],
        }
    }

    /// Sum of the coerced amounts in `month`
    pub fn total_for(&self, month: &MonthKey) -> f64 {
        self.entries(month)
            .iter()
            .map(LedgerEntry::numeric_amount)
            .sum()
    }

    /// Per-category sums for `month`, in order of first appearance
    pub fn category_totals_for(&self, month: &MonthKey) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();

        for record in self.entries(month).iter().filter_map(LedgerEntry::as_record) {
            let amount = record.numeric_amount();
            match totals.iter_mut().find(|t| t.category == record.category) {
                Some(total) => total.amount += amount,
                None => totals.push(CategoryTotal {
                    category: record.category.clone(),
                    amount,
                }),
            }
        }

        totals
    }

    /// All month keys, newest first, with `current` forced to the front
    pub fn sorted_month_keys(&self, current: &MonthKey) -> Vec<MonthKey> {
        let mut keys = Vec::with_capacity(self.months.len() + 1);
        keys.push(current.clone());
        keys.extend(self.months.keys().rev().filter(|k| *k != current).cloned());
        keys
    }
}
