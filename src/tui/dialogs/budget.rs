//! Set budget dialog
//!
//! One field holding the monthly budget. The value is stored as typed; an
//! empty value clears the budget.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::services::Clock;
use crate::storage::DurableMap;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// State for the set budget dialog
#[derive(Debug, Clone, Default)]
pub struct BudgetFormState {
    pub input: TextInput,
    pub error_message: Option<String>,
}

impl BudgetFormState {
    /// Form prefilled with the stored budget
    pub fn new(current: &str) -> Self {
        Self {
            input: TextInput::new().placeholder("e.g. 500").content(current),
            error_message: None,
        }
    }

    /// Accept digits and one decimal point
    pub fn insert_char(&mut self, c: char) {
        if c.is_ascii_digit() || (c == '.' && !self.input.value().contains('.')) {
            self.input.insert(c);
            self.error_message = None;
        }
    }

    /// Checked value to store
    pub fn value(&self) -> Result<String, String> {
        let value = self.input.value().trim();
        if !value.is_empty() && value.parse::<f64>().is_err() {
            return Err("Invalid amount format".to_string());
        }
        Ok(value.to_string())
    }
}

/// Render the set budget dialog
pub fn render<M, C>(frame: &mut Frame, app: &App<'_, M, C>) {
    let area = centered_rect_fixed(50, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Monthly Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input
            Constraint::Length(1), // Note
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.budget_form;
    let label = format!("Budget ({})", app.settings.currency_symbol);
    frame.render_widget(Paragraph::new(form.input.to_line(&label, true)), chunks[1]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Applies to every month. Leave empty to clear.",
            Style::default().fg(Color::DarkGray),
        )),
        chunks[2],
    );

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[3],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}

/// Handle key input for the set budget dialog
pub fn handle_key<M: DurableMap, C: Clock>(app: &mut App<'_, M, C>, key: KeyEvent) {
    let form = &mut app.budget_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => save_budget(app),
        KeyCode::Backspace => {
            form.error_message = None;
            form.input.backspace();
        }
        KeyCode::Left => form.input.move_left(),
        KeyCode::Right => form.input.move_right(),
        KeyCode::Char(c) => form.insert_char(c),
        _ => {}
    }
}

fn save_budget<M: DurableMap, C: Clock>(app: &mut App<'_, M, C>) {
    let value = match app.budget_form.value() {
        Ok(value) => value,
        Err(e) => {
            app.budget_form.error_message = Some(e);
            return;
        }
    };

    match app.session.set_budget(&value) {
        Ok(()) => {
            app.close_dialog();
            if value.is_empty() {
                app.set_status("Budget cleared");
            } else {
                app.set_status(format!(
                    "Budget set to {}{}",
                    app.settings.currency_symbol, value
                ));
            }
        }
        Err(e) => app.budget_form.error_message = Some(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_filters_characters() {
        let mut form = BudgetFormState::new("");
        for c in "1a2.5.0".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.input.value(), "12.50");
        assert_eq!(form.value().unwrap(), "12.50");
    }

    #[test]
    fn test_value_allows_empty_and_rejects_garbage() {
        assert_eq!(BudgetFormState::new("").value().unwrap(), "");
        assert!(BudgetFormState::new(".").value().is_err());
        assert_eq!(BudgetFormState::new(" 300 ").value().unwrap(), "300");
    }
}
