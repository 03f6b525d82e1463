//! Exception display components
//!
//! The structured exception viewer shows the scripted per-pass error; the
//! fault panel is the crash surface for unhandled load and chart failures.

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the structured exception viewer for the scripted error.
pub fn render_exception(f: &mut Frame, area: ratatui::layout::Rect, kind: &str, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            format!("DataError::{}", kind),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::LightRed),
        )),
        Line::from(Span::styled(
            "(simulated - no file access was attempted)",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title("EXCEPTION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Red));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Render the crash surface for a halted render pass.
pub fn render_fault(f: &mut Frame, area: ratatui::layout::Rect, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "RENDER PASS HALTED",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::LightRed),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Fix the data file and press [R] to reload.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::Red))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
