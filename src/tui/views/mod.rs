//! TUI Views module
//!
//! The month sidebar, the summary header, the expense list, the category
//! chart and the status bar.

pub mod chart;
pub mod expenses;
pub mod sidebar;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use crate::services::Clock;
use crate::storage::DurableMap;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{AppLayout, MainPanelLayout};

/// Render the entire application
pub fn render<M: DurableMap, C: Clock>(frame: &mut Frame, app: &App<'_, M, C>) {
    let layout = AppLayout::new(frame.area());
    let main = MainPanelLayout::new(layout.main);

    sidebar::render(frame, app, layout.sidebar);
    summary::render(frame, app, main.summary);
    expenses::render(frame, app, main.expenses);
    chart::render(frame, app, main.chart);
    status_bar::render(frame, app, layout.status_bar);

    match &app.active_dialog {
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::SetBudget => dialogs::budget::render(frame, app),
        ActiveDialog::ConfirmDelete(index) => {
            let message = dialogs::confirm::delete_message(app, *index);
            dialogs::confirm::render(frame, &message);
        }
        ActiveDialog::None => {}
    }
}
