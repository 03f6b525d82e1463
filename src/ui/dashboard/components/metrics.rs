//! Summary metrics component
//!
//! Renders the canned example metrics. These values are fixed and never
//! derived from uploaded or form data.

use crate::consts::cli_consts::SUMMARY_METRICS;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_summary_metrics(f: &mut Frame, area: ratatui::layout::Rect) {
    let mut lines = Vec::new();

    for (label, value, delta) in SUMMARY_METRICS {
        let mut spans = vec![
            Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
            Span::styled(
                value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if !delta.is_empty() {
            let delta_color = if delta.starts_with('-') {
                Color::Red
            } else {
                Color::Green
            };
            spans.push(Span::styled(
                format!("  {}", delta),
                Style::default().fg(delta_color),
            ));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .title("SUMMARY METRICS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
