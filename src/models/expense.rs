//! Expense record model
//!
//! A record keeps every field exactly as it was entered. Nothing is parsed
//! at creation time; the amount is only coerced to a number when something
//! sums it.

use serde::{Deserialize, Deserializer, Serialize};

use super::amount::coerce_amount;
use super::month::MonthKey;

/// One user-entered expense
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Free-text label
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,

    /// Amount as typed; see [`ExpenseRecord::numeric_amount`]
    #[serde(default, deserialize_with = "lenient_string")]
    pub amount: String,

    /// `YYYY-MM-DD`
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,

    /// One of the configured category labels
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
}

impl ExpenseRecord {
    /// Create a new record
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            date: date.into(),
            category: category.into(),
        }
    }

    /// Whether every required field is non-empty
    pub fn is_complete(&self) -> bool {
        !self.description.is_empty()
            && !self.amount.is_empty()
            && !self.date.is_empty()
            && !self.category.is_empty()
    }

    /// The month this record is filed under
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date_str(&self.date)
    }

    /// The amount as a number, zero if it isn't one
    pub fn numeric_amount(&self) -> f64 {
        coerce_amount(&self.amount)
    }

    /// Display line: `description - €amount (category) - date`
    pub fn display_line(&self, currency: &str) -> String {
        format!(
            "{} - {}{} ({}) - {}",
            self.description, currency, self.amount, self.category, self.date
        )
    }
}

/// Accept strings, numbers and booleans; anything else becomes empty
///
/// Hand-edited or older storage may hold `"amount": 12.5` rather than a
/// string.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee() -> ExpenseRecord {
        ExpenseRecord::new("Coffee", "3.50", "2024-05-02", "Food")
    }

    #[test]
    fn test_is_complete() {
        assert!(coffee().is_complete());

        let mut missing = coffee();
        missing.amount.clear();
        assert!(!missing.is_complete());

        let mut missing = coffee();
        missing.category.clear();
        assert!(!missing.is_complete());
    }

    #[test]
    fn test_month_follows_date() {
        assert_eq!(coffee().month().as_str(), "2024-05");
    }

    #[test]
    fn test_numeric_amount_keeps_raw_value() {
        let odd = ExpenseRecord::new("Gift", "a lot", "2024-05-02", "Other");
        assert_eq!(odd.numeric_amount(), 0.0);
        assert_eq!(odd.amount, "a lot");
    }

    #[test]
    fn test_display_line() {
        assert_eq!(
            coffee().display_line("€"),
            "Coffee - €3.50 (Food) - 2024-05-02"
        );
    }

    #[test]
    fn test_lenient_deserialize() {
        let record: ExpenseRecord =
            serde_json::from_str(r#"{"description": "Bus", "amount": 2.5, "date": "2024-05-03"}"#)
                .unwrap();
        assert_eq!(record.amount, "2.5");
        assert_eq!(record.category, "");
        assert!(!record.is_complete());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(coffee()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "description": "Coffee",
                "amount": "3.50",
                "date": "2024-05-02",
                "category": "Food"
            })
        );
    }
}
