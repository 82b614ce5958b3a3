//! Confirmation dialog
//!
//! Yes/no prompt before deleting an expense

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::services::Clock;
use crate::storage::DurableMap;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Prompt text for deleting the expense at `index`
pub fn delete_message<M: DurableMap, C: Clock>(app: &App<'_, M, C>, index: usize) -> String {
    let line = app
        .screen()
        .ledger
        .as_ref()
        .and_then(|view| view.lines.get(index));

    match line {
        Some(line) => format!("Delete '{}'?", line.record.description),
        None => "Delete this expense?".to_string(),
    }
}

/// Render a confirmation dialog
pub fn render(frame: &mut Frame, message: &str) {
    let area = centered_rect_fixed(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" No"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Handle key input while confirming the delete of `index`
pub fn handle_key<M: DurableMap, C: Clock>(app: &mut App<'_, M, C>, key: KeyEvent, index: usize) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.close_dialog();
            match app.session.delete_expense(index) {
                Ok(Some(removed)) => {
                    app.clamp_selection();
                    app.set_status(format!("Deleted '{}'", removed.description));
                }
                Ok(None) => app.set_status("Nothing to delete"),
                Err(e) => app.set_status(format!("Error: {}", e)),
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
}
