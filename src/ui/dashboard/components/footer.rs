//! Dashboard footer component
//!
//! Renders the celebration animation, the demo caption and key hints

use super::super::utils::balloon_frame;
use crate::consts::cli_consts::CAPTION;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, tick: usize) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(area);

    let celebration = Paragraph::new(balloon_frame(tick))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(celebration, chunks[0]);

    let caption = Paragraph::new(Line::from(Span::styled(
        CAPTION,
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick),
    );
    f.render_widget(caption, chunks[1]);

    let hints = Paragraph::new("[Tab] Focus | [R] Reload | [Q] Quit")
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(hints, chunks[2]);
}
