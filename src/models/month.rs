//! Month keys
//!
//! A month key is the `YYYY-MM` string that groups expenses in the ledger.
//! Keys derived from an expense's date are not validated: whatever the first
//! seven characters of the date are becomes the key.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SpendbookError;

/// A `YYYY-MM` month key
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthKey(String);

impl MonthKey {
    /// The month key for a calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self(format!("{:04}-{:02}", date.year(), date.month()))
    }

    /// The month key an expense dated `date` is filed under
    pub fn from_date_str(date: &str) -> Self {
        Self(date.chars().take(7).collect())
    }

    /// Parse and validate a user-supplied `YYYY-MM` month
    pub fn parse(s: &str) -> Result<Self, SpendbookError> {
        let trimmed = s.trim();
        NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d")
            .map(Self::from_date)
            .map_err(|_| {
                SpendbookError::Validation(format!(
                    "Invalid month '{}'. Expected YYYY-MM (e.g. 2024-05)",
                    s
                ))
            })
    }

    /// Wrap an existing key without validation (e.g. a key read from storage)
    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for MonthKey {
    type Err = SpendbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
