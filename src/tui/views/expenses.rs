//! Expense list view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::services::Clock;
use crate::storage::DurableMap;
use crate::tui::app::{App, FocusedPanel};

/// Render the selected month's expenses
pub fn render<M: DurableMap, C: Clock>(frame: &mut Frame, app: &App<'_, M, C>, area: Rect) {
    let border_color = if app.focused_panel == FocusedPanel::Expenses {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Expenses ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let lines = app
        .screen()
        .ledger
        .as_ref()
        .map(|view| view.lines.as_slice())
        .unwrap_or_default();

    if lines.is_empty() {
        let text = Paragraph::new("No expenses. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = lines
        .iter()
        .map(|line| ListItem::new(line.text.clone()).style(Style::default().fg(Color::White)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_expense_index));

    frame.render_stateful_widget(list, area, &mut state);
}
