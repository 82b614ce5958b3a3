//! Ledger store
//!
//! Owns the ledger and the monthly budget, mirrors both to a [`DurableMap`]
//! after every mutation, and answers the derived read queries (totals,
//! category sums, month list).
//!
//! The store is tolerant of the data it holds: incomplete expenses
//! are silently declined, out-of-range deletes do nothing, and malformed
//! months are healed by [`LedgerStore::ensure_month`]. Errors only come from
//! the storage and audit I/O underneath.

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::SpendbookResult;
use crate::models::{coerce_amount, CategoryTotal, ExpenseRecord, Ledger, MonthKey};
use crate::storage::{DurableMap, BUDGET_KEY, EXPENSES_KEY};

use super::clock::Clock;

/// Result of a successful add
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// Month the expense was filed under
    pub month: MonthKey,
    /// Position of the new expense within that month
    pub index: usize,
    /// Whether `month` is the month currently on screen
    pub affects_selected: bool,
}

/// The ledger, the budget, and the durable map they persist to
pub struct LedgerStore<M, C> {
    map: M,
    clock: C,
    ledger: Ledger,
    budget: Option<String>,
    audit: Option<AuditLogger>,
}

impl<M: DurableMap, C: Clock> LedgerStore<M, C> {
    /// Read the ledger and budget from `map`
    ///
    /// A missing ledger is empty and a missing (or empty) budget is unset.
    pub fn load(map: M, clock: C) -> SpendbookResult<Self> {
        let ledger = match map.get(EXPENSES_KEY)? {
            Some(raw) => Ledger::from_document(&raw)?,
            None => Ledger::new(),
        };

        let budget = map.get(BUDGET_KEY)?.filter(|b| !b.is_empty());

        Ok(Self {
            map,
            clock,
            ledger,
            budget,
            audit: None,
        })
    }

    /// Record every mutation in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// The current calendar month according to the store's clock
    pub fn current_month(&self) -> MonthKey {
        self.clock.current_month()
    }

    /// Today's date according to the store's clock
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    /// Read-only view of the ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The budget exactly as it was entered, `None` if never set
    pub fn budget(&self) -> Option<&str> {
        self.budget.as_deref()
    }

    /// The budget as a number (unset or non-numeric is zero)
    pub fn budget_value(&self) -> f64 {
        self.budget.as_deref().map(coerce_amount).unwrap_or(0.0)
    }

    /// Make sure `month` and the current month have entries, then persist
    ///
    /// Idempotent. The ledger is written back even when nothing changed.
    pub fn ensure_month(&mut self, month: &MonthKey) -> SpendbookResult<()> {
        let current = self.current_month();
        self.ledger.ensure_month(&current);
        self.ledger.ensure_month(month);
        self.persist_ledger()
    }

    /// File `record` under the month of its own date
    ///
    /// Returns `None` without touching storage if any field is empty.
    pub fn add_expense(
        &mut self,
        record: ExpenseRecord,
        selected: &MonthKey,
    ) -> SpendbookResult<Option<AddOutcome>> {
        if !record.is_complete() {
            return Ok(None);
        }

        let audit_record = self.audit.as_ref().map(|_| record.clone());
        let month = self.ledger.push(record);
        let index = self.ledger.entries(&month).len() - 1;
        self.persist_ledger()?;

        if let (Some(logger), Some(record)) = (&self.audit, audit_record) {
            logger.log(&AuditEntry::add(&month, index, &record))?;
        }

        Ok(Some(AddOutcome {
            affects_selected: &month == selected,
            month,
            index,
        }))
    }

    /// Remove the expense at `index` in `month`
    ///
    /// An out-of-range index removes nothing. The ledger is persisted either way.
    pub fn delete_expense(
        &mut self,
        month: &MonthKey,
        index: usize,
    ) -> SpendbookResult<Option<ExpenseRecord>> {
        let removed = self.ledger.remove(month, index).map(|entry| entry.to_record());
        self.persist_ledger()?;

        if let (Some(logger), Some(record)) = (&self.audit, &removed) {
            logger.log(&AuditEntry::delete(month, index, record))?;
        }

        Ok(removed)
    }

    /// Replace the budget with `value`, stored verbatim
    pub fn set_budget(&mut self, value: &str) -> SpendbookResult<()> {
        let previous = self.budget.replace(value.to_string());
        self.map.set(BUDGET_KEY, value)?;

        if let Some(logger) = &self.audit {
            logger.log(&AuditEntry::set_budget(previous.as_deref(), value))?;
        }

        Ok(())
    }

    /// Sum of the month's coerced amounts
    pub fn total_for(&self, month: &MonthKey) -> f64 {
        self.ledger.total_for(month)
    }

    /// Per-category sums for the month
    pub fn category_totals_for(&self, month: &MonthKey) -> Vec<CategoryTotal> {
        self.ledger.category_totals_for(month)
    }

    /// Month keys newest first, current month always first
    pub fn sorted_month_keys(&self) -> Vec<MonthKey> {
        self.ledger.sorted_month_keys(&self.current_month())
    }

    /// The durable map backing this store
    pub fn map(&self) -> &M {
        &self.map
    }

    /// Give back the durable map, e.g. to reload from it
    pub fn into_map(self) -> M {
        self.map
    }

    fn persist_ledger(&mut self) -> SpendbookResult<()> {
        let document = self.ledger.to_document()?;
        self.map.set(EXPENSES_KEY, &document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::services::clock::FixedClock;
    use crate::storage::MemoryMap;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap())
    }

    fn store() -> LedgerStore<MemoryMap, FixedClock> {
        LedgerStore::load(MemoryMap::new(), clock()).unwrap()
    }

    fn month(s: &str) -> MonthKey {
        MonthKey::from_raw(s)
    }

    fn coffee() -> ExpenseRecord {
        ExpenseRecord::new("Coffee", "3.50", "2024-05-02", "Food")
    }

    #[test]
    fn test_load_from_empty_map() {
        let store = store();
        assert_eq!(store.ledger(), &Ledger::new());
        assert_eq!(store.budget(), None);
        assert_eq!(store.budget_value(), 0.0);
    }

    #[test]
    fn test_load_treats_empty_budget_as_unset() {
        let map = MemoryMap::new().with_entry(BUDGET_KEY, "");
        let store = LedgerStore::load(map, clock()).unwrap();
        assert_eq!(store.budget(), None);
    }

    #[test]
    fn test_load_rejects_unparseable_ledger() {
        let map = MemoryMap::new().with_entry(EXPENSES_KEY, "{{{");
        assert!(LedgerStore::load(map, clock()).is_err());
    }

    #[test]
    fn test_add_files_under_record_month() {
        let mut store = store();
        let selected = month("2024-05");

        let outcome = store.add_expense(coffee(), &selected).unwrap().unwrap();
        assert_eq!(outcome.month, selected);
        assert_eq!(outcome.index, 0);
        assert!(outcome.affects_selected);

        assert!((store.total_for(&selected) - 3.5).abs() < 1e-9);
        let totals = store.category_totals_for(&selected);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].category, "Food");
        assert!((totals[0].amount - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_add_to_other_month_leaves_selected_total() {
        let mut store = store();
        let selected = month("2024-05");
        store.add_expense(coffee(), &selected).unwrap();

        let old = ExpenseRecord::new("Boots", "80", "2023-01-15", "Shopping");
        let outcome = store.add_expense(old, &selected).unwrap().unwrap();

        assert_eq!(outcome.month, month("2023-01"));
        assert!(!outcome.affects_selected);
        assert!((store.total_for(&selected) - 3.5).abs() < 1e-9);
        assert!(store.sorted_month_keys().contains(&month("2023-01")));
    }

    #[test]
    fn test_incomplete_add_is_a_silent_no_op() {
        let mut store = store();
        let mut record = coffee();
        record.description.clear();

        assert_eq!(store.add_expense(record, &month("2024-05")).unwrap(), None);
        assert_eq!(store.map().write_count(), 0);
        assert_eq!(store.ledger(), &Ledger::new());
    }

    #[test]
    fn test_totals_match_sum_of_coerced_amounts() {
        let mut store = store();
        let selected = month("2024-05");
        let amounts = ["10", "2.5", "abc", "-1.25", "", "4e1"];
        for (i, amount) in amounts.iter().enumerate() {
            let date = format!("2024-05-{:02}", i + 1);
            store
                .add_expense(ExpenseRecord::new("x", *amount, date, "Food"), &selected)
                .unwrap();
        }
        // The empty amount was declined
        assert_eq!(store.ledger().entries(&selected).len(), 5);

        let expected: f64 = amounts.iter().map(|a| coerce_amount(a)).sum();
        assert!((store.total_for(&selected) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_ensure_month_heals_and_always_writes() {
        let mut store = store();
        let selected = month("2023-07");

        store.ensure_month(&selected).unwrap();
        assert!(store.ledger().contains_month(&selected));
        assert!(store.ledger().contains_month(&month("2024-05")));
        assert_eq!(store.map().write_count(), 1);

        let once = store.ledger().clone();
        store.ensure_month(&selected).unwrap();
        assert_eq!(store.ledger(), &once);
        assert_eq!(store.map().write_count(), 2);
    }

    #[test]
    fn test_ensure_month_overwrites_malformed_month() {
        let raw = r#"{"2024-05": {"not": "a list"}, "2024-04": []}"#;
        let map = MemoryMap::new().with_entry(EXPENSES_KEY, raw);
        let mut store = LedgerStore::load(map, clock()).unwrap();

        assert!(!store.ledger().contains_month(&month("2024-05")));
        store.ensure_month(&month("2024-04")).unwrap();

        let stored = store.map().get(EXPENSES_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(value["2024-05"], serde_json::json!([]));
    }

    #[test]
    fn test_ensure_month_keeps_unreadable_data_elsewhere() {
        let raw = r#"{"2024-05":[{"description":"A","amount":"1","date":"2024-05-01","category":"Food"},42,"note"],"2024-03":{"x":1}}"#;
        let map = MemoryMap::new().with_entry(EXPENSES_KEY, raw);
        let mut store = LedgerStore::load(map, clock()).unwrap();
        let selected = month("2024-05");

        assert_eq!(store.ledger().entries(&selected).len(), 3);
        assert_eq!(
            store.sorted_month_keys(),
            vec![month("2024-05"), month("2024-03")]
        );

        store.ensure_month(&selected).unwrap();

        let stored = store.map().get(EXPENSES_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(value["2024-05"][1], serde_json::json!(42));
        assert_eq!(value["2024-05"][2], serde_json::json!("note"));
        assert_eq!(value["2024-03"], serde_json::json!({"x": 1}));

        let removed = store.delete_expense(&selected, 2).unwrap().unwrap();
        assert_eq!(removed.description, "\"note\"");
        assert!((store.total_for(&selected) - 1.0).abs() < 1e-9);

        store.ensure_month(&month("2024-03")).unwrap();
        let stored = store.map().get(EXPENSES_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(value["2024-03"], serde_json::json!([]));
    }

    #[test]
    fn test_sorted_month_keys_current_first_before_ensure() {
        let mut store = store();
        store
            .add_expense(
                ExpenseRecord::new("Trip", "300", "2025-02-01", "Entertainment"),
                &month("2024-05"),
            )
            .unwrap();

        let keys = store.sorted_month_keys();
        assert_eq!(keys[0], month("2024-05"));
        assert_eq!(keys[1], month("2025-02"));
        assert!(!store.ledger().contains_month(&month("2024-05")));
    }

    #[test]
    fn test_delete_removes_one_record() {
        let mut store = store();
        let selected = month("2024-05");
        store.add_expense(coffee(), &selected).unwrap();
        store
            .add_expense(ExpenseRecord::new("Lunch", "12", "2024-05-03", "Food"), &selected)
            .unwrap();

        let removed = store.delete_expense(&selected, 0).unwrap().unwrap();
        assert_eq!(removed.description, "Coffee");
        assert_eq!(store.ledger().entries(&selected).len(), 1);
        assert!((store.total_for(&selected) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_delete_out_of_range_changes_nothing() {
        let mut store = store();
        let selected = month("2024-05");
        store.add_expense(coffee(), &selected).unwrap();
        let before = store.ledger().clone();
        let writes = store.map().write_count();

        assert_eq!(store.delete_expense(&selected, 7).unwrap(), None);
        assert_eq!(store.ledger(), &before);
        assert_eq!(store.map().write_count(), writes + 1);
    }

    #[test]
    fn test_set_budget_is_stored_verbatim() {
        let mut store = store();
        store.set_budget("100").unwrap();
        assert_eq!(store.budget(), Some("100"));
        assert_eq!(store.map().get(BUDGET_KEY).unwrap().as_deref(), Some("100"));

        store.set_budget("lots").unwrap();
        assert_eq!(store.budget(), Some("lots"));
        assert_eq!(store.budget_value(), 0.0);
    }

    #[test]
    fn test_persist_and_reload_round_trip() {
        let mut store = store();
        let selected = month("2024-05");
        store.add_expense(coffee(), &selected).unwrap();
        store
            .add_expense(ExpenseRecord::new("Rent", "900", "2024-04-01", "Housing"), &selected)
            .unwrap();
        store.ensure_month(&selected).unwrap();
        store.set_budget("1200").unwrap();

        let ledger = store.ledger().clone();
        let reloaded = LedgerStore::load(store.into_map(), clock()).unwrap();

        assert_eq!(reloaded.ledger(), &ledger);
        assert_eq!(reloaded.budget(), Some("1200"));
    }

    #[test]
    fn test_mutations_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut store = store().with_audit(logger.clone());
        let selected = month("2024-05");

        store.add_expense(coffee(), &selected).unwrap();
        store
            .add_expense(ExpenseRecord::new("", "1", "2024-05-01", "Food"), &selected)
            .unwrap();
        store.delete_expense(&selected, 3).unwrap();
        store.delete_expense(&selected, 0).unwrap();
        store.set_budget("50").unwrap();

        let ops: Vec<_> = logger
            .read_all()
            .unwrap()
            .iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(ops, vec![Operation::Add, Operation::Delete, Operation::SetBudget]);
    }
}
