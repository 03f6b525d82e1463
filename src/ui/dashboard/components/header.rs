//! Dashboard header component
//!
//! Renders the title, session line and the cosmetic progress gauge

use super::super::state::DashboardState;
use super::super::utils::hex_to_color;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render the header with title, uptime and data-processing progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("VITALBOARD v{} - PATIENT HEALTH DASHBOARD", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(hex_to_color(state.theme().1).unwrap_or(Color::Cyan))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Session line: uptime plus the data file on display
    let uptime = state.start_time.elapsed();
    let uptime_text = if uptime.as_secs() >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60,
            uptime.as_secs() % 60
        )
    } else {
        format!(
            "Uptime: {}m {}s",
            uptime.as_secs() / 60,
            uptime.as_secs() % 60
        )
    };
    let data_text = match &state.data_path {
        Some(path) => format!("Data: {}", path),
        None => "Data: none (start with --data to load a file)".to_string(),
    };
    let session_line = Paragraph::new(format!("{} | {}", uptime_text, data_text))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(session_line, header_chunks[1]);

    // Cosmetic processing gauge: advances with the tick, saturates at 100
    let percent = u16::from(state.progress);
    let label = if state.progress >= 100 {
        "Data processing complete".to_string()
    } else {
        format!("Processing data... {}%", state.progress)
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
        .percent(percent)
        .label(label);
    f.render_widget(gauge, header_chunks[2]);
}
