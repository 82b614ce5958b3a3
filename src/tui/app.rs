//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Ledger state lives in the session; the [`Screen`] presenter keeps the
//! latest rendered pieces for the draw pass.

use crate::config::Settings;
use crate::error::SpendbookResult;
use crate::models::MonthKey;
use crate::services::Clock;
use crate::session::Session;
use crate::storage::DurableMap;
use crate::view::{BudgetProgress, LedgerView, PieChart, Presenter};

use super::dialogs::budget::BudgetFormState;
use super::dialogs::expense::ExpenseFormState;

/// Presenter that keeps whatever was last shown
#[derive(Debug, Default)]
pub struct Screen {
    pub months: Vec<MonthKey>,
    pub ledger: Option<LedgerView>,
    pub progress: Option<BudgetProgress>,
    pub chart: Option<PieChart>,
}

impl Presenter for Screen {
    fn show_months(&mut self, months: &[MonthKey], _selected: &MonthKey) {
        self.months = months.to_vec();
    }

    fn show_ledger(&mut self, view: &LedgerView) {
        self.ledger = Some(view.clone());
    }

    fn show_budget(&mut self, progress: &BudgetProgress) {
        self.progress = Some(progress.clone());
    }

    fn show_chart(&mut self, chart: PieChart) {
        self.chart = Some(chart);
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    Sidebar,
    #[default]
    Expenses,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    SetBudget,
    /// Delete the expense at this index of the selected month
    ConfirmDelete(usize),
}

/// Main application state
pub struct App<'a, M, C> {
    /// Store, selected month and rendered screen
    pub session: Session<M, C, Screen>,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Cursor in the expense list
    pub selected_expense_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add expense form state
    pub expense_form: ExpenseFormState,

    /// Set budget form state
    pub budget_form: BudgetFormState,
}

impl<'a, M: DurableMap, C: Clock> App<'a, M, C> {
    /// Create a new App and render the selected month
    pub fn new(session: Session<M, C, Screen>, settings: &'a Settings) -> SpendbookResult<Self> {
        let mut app = Self {
            session,
            settings,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            selected_expense_index: 0,
            status_message: None,
            expense_form: ExpenseFormState::default(),
            budget_form: BudgetFormState::default(),
        };
        app.session.render()?;
        Ok(app)
    }

    pub fn screen(&self) -> &Screen {
        self.session.presenter()
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog, resetting its form
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::AddExpense => {
                self.expense_form = ExpenseFormState::new(self.session.store().today());
            }
            ActiveDialog::SetBudget => {
                self.budget_form =
                    BudgetFormState::new(self.session.store().budget().unwrap_or_default());
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Number of expenses in the selected month
    pub fn expense_count(&self) -> usize {
        self.screen().ledger.as_ref().map_or(0, |view| view.lines.len())
    }

    /// Position of the selected month in the month list
    pub fn month_index(&self) -> usize {
        let selected = self.session.selected_month();
        self.screen()
            .months
            .iter()
            .position(|m| m == selected)
            .unwrap_or(0)
    }

    /// Move the expense cursor up
    pub fn move_up(&mut self) {
        self.selected_expense_index = self.selected_expense_index.saturating_sub(1);
    }

    /// Move the expense cursor down
    pub fn move_down(&mut self) {
        if self.selected_expense_index + 1 < self.expense_count() {
            self.selected_expense_index += 1;
        }
    }

    /// Select the month `offset` entries away in the list
    pub fn step_month(&mut self, offset: isize) -> SpendbookResult<()> {
        let months = &self.screen().months;
        let Some(target) = self
            .month_index()
            .checked_add_signed(offset)
            .and_then(|i| months.get(i))
            .cloned()
        else {
            return Ok(());
        };

        self.session.change_month(target)?;
        self.selected_expense_index = 0;
        Ok(())
    }

    /// Keep the expense cursor inside the list after it shrank
    pub fn clamp_selection(&mut self) {
        let count = self.expense_count();
        if self.selected_expense_index >= count {
            self.selected_expense_index = count.saturating_sub(1);
        }
    }
}
