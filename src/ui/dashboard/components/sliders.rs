//! Simulated vitals sliders component
//!
//! Two independent sliders whose values drive the alert banners, plus the
//! readings echoed by the last "update" press.

use super::super::state::{DashboardState, Focus};
use crate::consts::cli_consts::simulated;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

pub fn render_sliders(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    render_slider(
        f,
        chunks[0],
        "Adjust Blood Pressure",
        state.vitals.blood_pressure,
        simulated::BLOOD_PRESSURE_RANGE,
        format!("{}/80 mmHg", state.vitals.blood_pressure),
        state.focus == Focus::BloodPressure,
    );
    render_slider(
        f,
        chunks[1],
        "Adjust Heart Rate",
        state.vitals.heart_rate,
        simulated::HEART_RATE_RANGE,
        format!("{} bpm", state.vitals.heart_rate),
        state.focus == Focus::HeartRate,
    );

    // Update button and the last echoed readings
    let mut lines = Vec::new();
    let button_style = if state.focus == Focus::VitalsUpdate {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    lines.push(Line::from(Span::styled("[ Update Health Data ]", button_style)));
    if let Some((blood_pressure, heart_rate)) = &state.last_vitals_report {
        lines.push(Line::from(Span::styled(
            format!("Simulated Blood Pressure: {}", blood_pressure),
            Style::default().fg(Color::LightBlue),
        )));
        lines.push(Line::from(Span::styled(
            format!("Simulated Heart Rate: {}", heart_rate),
            Style::default().fg(Color::LightBlue),
        )));
    }
    let report = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::NONE)
            .title("SIMULATE HEALTH CHANGES"),
    );
    f.render_widget(report, chunks[2]);
}

fn render_slider(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    title: &str,
    value: u16,
    (min, max): (u16, u16),
    label: String,
    focused: bool,
) {
    let border_color = if focused { Color::LightCyan } else { Color::DarkGray };
    let percent = ((value - min) as u32 * 100 / (max - min) as u32) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        )
        .gauge_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .percent(percent)
        .label(label);
    f.render_widget(gauge, area);
}
