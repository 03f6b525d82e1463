//! Theme color picker component

use super::super::state::{DashboardState, Focus};
use super::super::utils::hex_to_color;
use crate::consts::cli_consts::THEME_PALETTE;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// Render the palette swatches and echo the selected color.
pub fn render_theme_picker(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut swatches = Vec::new();
    for (index, (name, hex)) in THEME_PALETTE.iter().enumerate() {
        let color = hex_to_color(hex).unwrap_or(Color::White);
        let selected = index == state.theme_index;
        let marker = if selected { "▣" } else { "▢" };
        let mut style = Style::default().fg(color);
        if selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        swatches.push(Span::styled(format!("{} {}  ", marker, name), style));
    }

    let (_, hex) = state.theme();
    let lines = vec![
        Line::from(swatches),
        Line::from(Span::styled(
            format!("Selected theme color: {}", hex),
            Style::default().fg(hex_to_color(hex).unwrap_or(Color::White)),
        )),
    ];

    let border_color = if state.focus == Focus::Theme {
        Color::LightCyan
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title("CUSTOMIZE UI THEME")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
