//! Application session
//!
//! A `Session` owns the ledger store, the selected month and the presenter.
//! Each user command performs at most one store mutation and then tells the
//! presenter what changed. The selected month lives only here; it is never
//! persisted.

use crate::error::SpendbookResult;
use crate::models::{ExpenseRecord, MonthKey};
use crate::services::{AddOutcome, Clock, LedgerStore};
use crate::storage::DurableMap;
use crate::view::{build_view, BudgetProgress, LedgerView, Presenter};

/// Store + selected month + presenter
pub struct Session<M, C, P> {
    store: LedgerStore<M, C>,
    presenter: P,
    selected: MonthKey,
    currency: String,
    /// Calendar month at the time of the last full render
    rendered_for: Option<MonthKey>,
}

impl<M, C, P> Session<M, C, P>
where
    M: DurableMap,
    C: Clock,
    P: Presenter,
{
    /// Start a session on the current calendar month
    pub fn new(store: LedgerStore<M, C>, presenter: P, currency: impl Into<String>) -> Self {
        let selected = store.current_month();
        Self {
            store,
            presenter,
            selected,
            currency: currency.into(),
            rendered_for: None,
        }
    }

    /// Select `month` instead of the current one, without rendering
    pub fn with_selected_month(mut self, month: MonthKey) -> Self {
        self.selected = month;
        self
    }

    pub fn selected_month(&self) -> &MonthKey {
        &self.selected
    }

    pub fn store(&self) -> &LedgerStore<M, C> {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// The view for the selected month as it stands
    pub fn view(&self) -> LedgerView {
        build_view(
            self.store.ledger(),
            &self.selected,
            self.store.budget(),
            &self.currency,
        )
    }

    /// Full render: heal months, then months, ledger, budget and chart
    pub fn render(&mut self) -> SpendbookResult<()> {
        self.store.ensure_month(&self.selected)?;
        self.show_months();

        let view = self.view();
        self.presenter.show_ledger(&view);
        self.presenter.show_budget(&view.progress);
        self.presenter.show_chart(view.chart());

        self.rendered_for = Some(self.store.current_month());
        Ok(())
    }

    /// Re-render if the calendar month changed since the last render
    pub fn refresh_if_month_rolled(&mut self) -> SpendbookResult<bool> {
        if self.rendered_for.as_ref() == Some(&self.store.current_month()) {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    /// Add an expense; the month list always refreshes, the ledger only if
    /// the expense landed in the selected month
    pub fn add_expense(&mut self, record: ExpenseRecord) -> SpendbookResult<Option<AddOutcome>> {
        let outcome = self.store.add_expense(record, &self.selected)?;

        if let Some(added) = &outcome {
            self.show_months();
            if added.affects_selected {
                self.render()?;
            }
        }

        Ok(outcome)
    }

    /// Delete the expense at `index` in the selected month, then re-render
    pub fn delete_expense(&mut self, index: usize) -> SpendbookResult<Option<ExpenseRecord>> {
        let selected = self.selected.clone();
        let removed = self.store.delete_expense(&selected, index)?;
        self.render()?;
        Ok(removed)
    }

    /// Switch the displayed month and re-render
    pub fn change_month(&mut self, month: MonthKey) -> SpendbookResult<()> {
        self.selected = month;
        self.render()
    }

    /// Replace the budget; only the budget display is refreshed
    pub fn set_budget(&mut self, value: &str) -> SpendbookResult<()> {
        self.store.set_budget(value)?;
        let total = self.store.total_for(&self.selected);
        let progress = BudgetProgress::compute(total, self.store.budget());
        self.presenter.show_budget(&progress);
        Ok(())
    }

    fn show_months(&mut self) {
        let months = self.store.sorted_month_keys();
        self.presenter.show_months(&months, &self.selected);
    }
}
