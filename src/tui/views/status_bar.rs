//! Status bar view
//!
//! Shows the selected month, any status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::services::Clock;
use crate::storage::DurableMap;
use crate::tui::app::App;

const HINTS: &str = " h/l:Month  j/k:Move  a:Add  d:Delete  b:Budget  q:Quit ";

/// Render the status bar
pub fn render<M: DurableMap, C: Clock>(frame: &mut Frame, app: &App<'_, M, C>, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.session.selected_month()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Right-align the hints when there is room
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hints_len = HINTS.chars().count();
    let padding = (area.width as usize).saturating_sub(left_len + hints_len);
    spans.push(Span::raw(" ".repeat(padding.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
