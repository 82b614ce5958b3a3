//! Sidebar view
//!
//! Month selector, newest first, with the selected month highlighted

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::services::Clock;
use crate::storage::DurableMap;
use crate::tui::app::{App, FocusedPanel};

/// Render the month list
pub fn render<M: DurableMap, C: Clock>(frame: &mut Frame, app: &App<'_, M, C>, area: Rect) {
    let border_color = if app.focused_panel == FocusedPanel::Sidebar {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Months ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let current = app.session.store().current_month();
    let items: Vec<ListItem> = app
        .screen()
        .months
        .iter()
        .map(|month| {
            let style = if *month == current {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(month.to_string()).style(style)
        })
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
    state.select(Some(app.month_index()));

    frame.render_stateful_widget(list, area, &mut state);
}
