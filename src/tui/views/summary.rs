//! Summary header
//!
//! Selected month, total, budget gauge and remaining budget

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::services::Clock;
use crate::storage::DurableMap;
use crate::tui::app::App;

/// Render the summary header
pub fn render<M: DurableMap, C: Clock>(frame: &mut Frame, app: &App<'_, M, C>, area: Rect) {
    let block = Block::default()
        .title(" Spendbook ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Month
            Constraint::Length(1), // Total
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Remaining
            Constraint::Min(0),
        ])
        .split(inner);

    let screen = app.screen();
    let Some(view) = &screen.ledger else {
        return;
    };

    frame.render_widget(
        Paragraph::new(view.header_text()).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(view.total_text()).style(Style::default().fg(Color::Yellow)),
        rows[1],
    );

    // Budget edits only refresh the progress, so it can be newer than the view
    let progress = screen.progress.as_ref().unwrap_or(&view.progress);
    let currency = &app.settings.currency_symbol;

    match progress.ratio() {
        Some(ratio) => {
            let color = if progress.is_over_budget() {
                Color::Red
            } else if ratio >= 0.8 {
                Color::Yellow
            } else {
                Color::Green
            };
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(color).bg(Color::Black))
                .ratio(ratio)
                .label(progress.progress_text(currency));
            frame.render_widget(gauge, rows[2]);

            let remaining_style = if progress.is_over_budget() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            frame.render_widget(
                Paragraph::new(progress.remaining_text(currency)).style(remaining_style),
                rows[3],
            );
        }
        None => {
            frame.render_widget(
                Paragraph::new(progress.progress_text(currency))
                    .style(Style::default().fg(Color::DarkGray)),
                rows[2],
            );
        }
    }
}
