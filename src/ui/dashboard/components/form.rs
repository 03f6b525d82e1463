//! Patient information form component

use super::super::state::{DashboardState, Focus};
use crate::patient::Gender;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the patient form with focus markers, plus the submission outcome.
pub fn render_form(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = Vec::new();

    let name_display = if state.form.name.is_empty() && state.focus != Focus::FormName {
        "<enter name>".to_string()
    } else if state.focus == Focus::FormName {
        format!("{}_", state.form.name)
    } else {
        state.form.name.clone()
    };
    lines.push(field_line(
        "Name",
        name_display,
        state.focus == Focus::FormName,
    ));
    lines.push(field_line(
        "Age",
        state.form.age.to_string(),
        state.focus == Focus::FormAge,
    ));

    // Gender radio row
    let mut gender_spans = vec![span_label("Gender", state.focus == Focus::FormGender)];
    for gender in Gender::ALL {
        let marker = if state.form.gender == gender {
            "(•)"
        } else {
            "( )"
        };
        let style = if state.form.gender == gender {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        gender_spans.push(Span::styled(format!(" {} {}", marker, gender), style));
    }
    lines.push(Line::from(gender_spans));

    lines.push(field_line(
        "Weight (kg)",
        format!("{} {}", state.form.weight_kg, meter(state.form.weight_kg, 30, 150)),
        state.focus == Focus::FormWeight,
    ));
    lines.push(field_line(
        "Height (cm)",
        format!("{} {}", state.form.height_cm, meter(state.form.height_cm, 100, 220)),
        state.focus == Focus::FormHeight,
    ));

    let submit_style = if state.focus == Focus::FormSubmit {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    lines.push(Line::from(Span::styled("[ Submit ]", submit_style)));

    if let Some(report) = &state.last_submission {
        lines.push(Line::from(Span::styled(
            format!("Patient {} added successfully!", report.name),
            Style::default().fg(Color::Green),
        )));
        lines.push(Line::from(vec![
            Span::styled("BMI: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.2}", report.bmi),
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let block = Block::default()
        .title("PATIENT INFORMATION FORM")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn span_label(label: &str, focused: bool) -> Span<'static> {
    let marker = if focused { "▸ " } else { "  " };
    Span::styled(
        format!("{}{}:", marker, label),
        Style::default().fg(if focused { Color::LightCyan } else { Color::Gray }),
    )
}

fn field_line(label: &str, value: String, focused: bool) -> Line<'static> {
    Line::from(vec![
        span_label(label, focused),
        Span::raw(" "),
        Span::styled(
            value,
            Style::default().fg(if focused { Color::White } else { Color::Gray }),
        ),
    ])
}

/// Small textual meter for the weight/height sliders.
fn meter(value: u16, min: u16, max: u16) -> String {
    const WIDTH: usize = 10;
    let filled = ((value - min) as usize * WIDTH) / ((max - min) as usize);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(WIDTH - filled))
}
