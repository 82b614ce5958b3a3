//! Add expense dialog
//!
//! Modal form with description, amount, date and category fields, tab
//! navigation, validation, and save/cancel.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{coerce_amount, format_money, ExpenseRecord};
use crate::services::Clock;
use crate::storage::DurableMap;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Description,
    Amount,
    Date,
    Category,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Category,
            Self::Category => Self::Description,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::Category,
            Self::Amount => Self::Description,
            Self::Date => Self::Amount,
            Self::Category => Self::Date,
        }
    }
}

/// State for the add expense dialog
#[derive(Debug, Clone, Default)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,
    pub description: TextInput,
    pub amount: TextInput,
    pub date: TextInput,
    /// Index into the configured categories
    pub category_index: usize,
    pub error_message: Option<String>,
}

impl ExpenseFormState {
    /// Empty form with the date prefilled
    pub fn new(today: NaiveDate) -> Self {
        Self {
            focused_field: ExpenseField::Description,
            description: TextInput::new().placeholder("What was it?"),
            amount: TextInput::new().placeholder("0.00"),
            date: TextInput::new()
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            category_index: 0,
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The focused text input, `None` on the category picker
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Description => Some(&mut self.description),
            ExpenseField::Amount => Some(&mut self.amount),
            ExpenseField::Date => Some(&mut self.date),
            ExpenseField::Category => None,
        }
    }

    /// Cycle the category picker by `step`
    pub fn cycle_category(&mut self, step: isize, count: usize) {
        if count == 0 {
            return;
        }
        let count = count as isize;
        let next = (self.category_index as isize + step).rem_euclid(count);
        self.category_index = next as usize;
    }

    /// Validate the form and build the record
    ///
    /// Description and amount are stored as typed; whitespace only matters
    /// for the checks.
    pub fn build_record(&self, categories: &[String]) -> Result<ExpenseRecord, String> {
        let description = self.description.value();
        if description.trim().is_empty() {
            return Err("Description is required".to_string());
        }

        let amount = self.amount.value();
        if amount.trim().is_empty() {
            return Err("Amount is required".to_string());
        }
        if !amount.trim().parse::<f64>().is_ok_and(f64::is_finite) {
            return Err("Invalid amount".to_string());
        }

        let date = self.date.value().trim();
        if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            return Err("Invalid date format. Use YYYY-MM-DD".to_string());
        }

        let category = categories
            .get(self.category_index)
            .ok_or_else(|| "No categories configured".to_string())?;

        Ok(ExpenseRecord::new(description, amount, date, category.as_str()))
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Render the add expense dialog
pub fn render<M, C>(frame: &mut Frame, app: &App<'_, M, C>) {
    let area = centered_rect_fixed(60, 12, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
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
            Constraint::Length(1), // Description
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Date
            Constraint::Length(1), // Category
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;
    let focused = form.focused_field;

    frame.render_widget(
        Paragraph::new(
            form.description
                .to_line("Description", focused == ExpenseField::Description),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(form.amount.to_line("Amount", focused == ExpenseField::Amount)),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(form.date.to_line("Date", focused == ExpenseField::Date)),
        chunks[3],
    );

    let category = app
        .settings
        .categories
        .get(form.category_index)
        .map_or("(none)", String::as_str);
    let picker_focused = focused == ExpenseField::Category;
    let label_style = if picker_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let value_style = if picker_focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let mut picker = vec![
        Span::styled(format!("{:>12}: ", "Category"), label_style),
        Span::styled(format!("‹ {} ›", category), value_style),
    ];
    if picker_focused {
        picker.push(Span::styled(
            "  ↑/↓ to change",
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(picker)), chunks[4]);

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[6],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

/// Handle key input for the add expense dialog
pub fn handle_key<M: DurableMap, C: Clock>(app: &mut App<'_, M, C>, key: KeyEvent) {
    let category_count = app.settings.categories.len();
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Enter => save_expense(app),
        KeyCode::Up if form.focused_field == ExpenseField::Category => {
            form.cycle_category(-1, category_count)
        }
        KeyCode::Down if form.focused_field == ExpenseField::Category => {
            form.cycle_category(1, category_count)
        }
        KeyCode::Backspace => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.delete();
            }
        }
        KeyCode::Left => {
            if let Some(input) = form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
        }
        KeyCode::Char(c) => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.insert(c);
            }
        }
        _ => {}
    }
}

/// Validate, add and close; errors stay in the form
fn save_expense<M: DurableMap, C: Clock>(app: &mut App<'_, M, C>) {
    let record = match app.expense_form.build_record(&app.settings.categories) {
        Ok(record) => record,
        Err(e) => {
            app.expense_form.set_error(e);
            return;
        }
    };

    let amount = coerce_amount(&record.amount);
    let description = record.description.clone();

    match app.session.add_expense(record) {
        Ok(Some(outcome)) => {
            app.close_dialog();
            let money = format_money(&app.settings.currency_symbol, amount);
            if outcome.affects_selected {
                app.set_status(format!("Added '{}' ({})", description, money));
            } else {
                app.set_status(format!(
                    "Added '{}' ({}) to {}",
                    description, money, outcome.month
                ));
            }
        }
        Ok(None) => app.expense_form.set_error("All fields are required"),
        Err(e) => app.expense_form.set_error(e.to_string()),
    }
}
