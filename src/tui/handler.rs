//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or to the main key map.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::services::Clock;
use crate::storage::DurableMap;

use super::app::{ActiveDialog, App, FocusedPanel};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event<M: DurableMap, C: Clock>(app: &mut App<'_, M, C>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.session.refresh_if_month_rolled()?;
            app.clamp_selection();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event<M: DurableMap, C: Clock>(app: &mut App<'_, M, C>, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),

        // Month list
        KeyCode::Char('h') | KeyCode::Left => {
            app.focused_panel = FocusedPanel::Sidebar;
            app.step_month(-1)?;
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.focused_panel = FocusedPanel::Sidebar;
            app.step_month(1)?;
        }

        // Expense cursor
        KeyCode::Char('k') | KeyCode::Up => {
            app.focused_panel = FocusedPanel::Expenses;
            app.move_up();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.focused_panel = FocusedPanel::Expenses;
            app.move_down();
        }

        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('b') => app.open_dialog(ActiveDialog::SetBudget),
        KeyCode::Char('d') | KeyCode::Delete => {
            if app.expense_count() == 0 {
                app.set_status("No expense to delete");
            } else {
                app.open_dialog(ActiveDialog::ConfirmDelete(app.selected_expense_index));
            }
        }

        _ => {}
    }

    Ok(())
}

/// Handle a key while a dialog is open
fn handle_dialog_key<M: DurableMap, C: Clock>(app: &mut App<'_, M, C>, key: KeyEvent) {
    match app.active_dialog.clone() {
        ActiveDialog::AddExpense => dialogs::expense::handle_key(app, key),
        ActiveDialog::SetBudget => dialogs::budget::handle_key(app, key),
        ActiveDialog::ConfirmDelete(index) => dialogs::confirm::handle_key(app, key, index),
        ActiveDialog::None => {}
    }
}
