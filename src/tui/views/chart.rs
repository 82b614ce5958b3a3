//! Category chart view
//!
//! One palette-coloured bar per category, sized by its share of the month,
//! under the slice's tooltip label.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::Clock;
use crate::storage::DurableMap;
use crate::tui::app::App;
use crate::view::{PieChart, PieSlice};

/// Render the current chart
pub fn render<M: DurableMap, C: Clock>(frame: &mut Frame, app: &App<'_, M, C>, area: Rect) {
    let title = app
        .screen()
        .chart
        .as_ref()
        .map_or(crate::view::CHART_TITLE, |chart| chart.title);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let bar_width = block.inner(area).width as usize;
    let lines = match &app.screen().chart {
        Some(chart) if !chart.is_empty() => chart_lines(chart, bar_width),
        _ => vec![Line::from(Span::styled(
            "Nothing spent this month",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Two lines per slice: the tooltip label, then the bar
fn chart_lines(chart: &PieChart, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(chart.slices.len() * 2);

    for (i, slice) in chart.slices.iter().enumerate() {
        let color = slice_color(slice);
        let label = chart.tooltip_label(i).unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(color)),
            Span::raw(label),
        ]));

        let share = chart.percentage(slice.value) / 100.0;
        let filled = (share * width as f64).round().clamp(0.0, width as f64) as usize;
        lines.push(Line::from(vec![
            Span::styled("█".repeat(filled), Style::default().fg(color)),
            Span::styled(
                "░".repeat(width - filled),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines
}

fn slice_color(slice: &PieSlice) -> Color {
    slice
        .rgb()
        .map_or(Color::White, |(r, g, b)| Color::Rgb(r, g, b))
}
