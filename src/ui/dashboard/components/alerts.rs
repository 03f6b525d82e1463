//! Alert banner component

use crate::vitals::{Alert, AlertSeverity};

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// Render warning/error banners for the fired thresholds. With none fired
/// the panel shows a quiet all-clear line.
pub fn render_alerts(f: &mut Frame, area: ratatui::layout::Rect, alerts: &[Alert]) {
    let lines: Vec<Line> = if alerts.is_empty() {
        vec![Line::from(Span::styled(
            "Simulated vitals within normal range",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        alerts
            .iter()
            .map(|alert| {
                let (bg, fg) = match alert.severity {
                    AlertSeverity::Warning => (Color::Yellow, Color::Black),
                    AlertSeverity::Error => (Color::Red, Color::White),
                };
                Line::from(Span::styled(
                    format!(" {} ", alert.message),
                    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
                ))
            })
            .collect()
    };

    let border_color = alerts
        .iter()
        .map(|alert| match alert.severity {
            AlertSeverity::Error => Color::Red,
            AlertSeverity::Warning => Color::Yellow,
        })
        .next()
        .unwrap_or(Color::DarkGray);

    let block = Block::default()
        .title("ALERTS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
