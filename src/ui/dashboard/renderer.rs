//! Dashboard main renderer
//!
//! Lays out the render plan spatially: the plan decides what appears, the
//! renderer decides where.

use super::components::{
    alerts, charts, errors, footer, form, header, logs, map, metrics, sliders, table, theme,
};
use super::plan::{Section, build_render_plan};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let plan = build_render_plan(state);

    // A failed load halts the pass before anything renders
    if let [Section::Fault { message }] = plan.as_slice() {
        errors::render_fault(f, f.area(), message);
        return;
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Percentage(38),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(main_chunks[1]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(content_chunks[0]);
    form::render_form(f, left_chunks[0], state);
    metrics::render_summary_metrics(f, left_chunks[1]);

    let middle_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(content_chunks[1]);
    table::render_table(f, middle_chunks[0], state);
    logs::render_logs_panel(f, middle_chunks[1], state);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(25),
            Constraint::Percentage(30),
        ])
        .split(content_chunks[2]);
    sliders::render_sliders(f, right_chunks[0], state);
    let fired = plan
        .iter()
        .find_map(|section| match section {
            Section::Alerts { alerts } => Some(alerts.as_slice()),
            _ => None,
        })
        .unwrap_or(&[]);
    alerts::render_alerts(f, right_chunks[1], fired);
    theme::render_theme_picker(f, right_chunks[2], state);

    let lower_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
        ])
        .split(main_chunks[2]);

    // Chart row: a chart fault replaces the series panels
    let fault = plan.iter().find_map(|section| match section {
        Section::Fault { message } => Some(message.as_str()),
        _ => None,
    });
    let chart_sections: Vec<&Section> = plan
        .iter()
        .filter(|section| matches!(section, Section::Chart { .. }))
        .collect();
    match (fault, chart_sections.is_empty()) {
        // Every chart failed before rendering
        (Some(message), true) => errors::render_fault(f, lower_chunks[0], message),
        // The pass halted partway: keep the charts that rendered, show the
        // fault where the rest would have been
        (Some(message), false) => {
            let chart_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
                .split(lower_chunks[0]);
            charts::render_charts(f, chart_chunks[0], &chart_sections);
            errors::render_fault(f, chart_chunks[1], message);
        }
        (None, true) => {
            let sample = plan.iter().find_map(|section| match section {
                Section::SamplePlot { points } => Some(points.as_slice()),
                _ => None,
            });
            charts::render_sample_plot(f, lower_chunks[0], sample.unwrap_or(&[]));
        }
        (None, false) => {
            let chart_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
                .split(lower_chunks[0]);
            charts::render_charts(f, chart_chunks[0], &chart_sections);
            let sample = plan.iter().find_map(|section| match section {
                Section::SamplePlot { points } => Some(points.as_slice()),
                _ => None,
            });
            charts::render_sample_plot(f, chart_chunks[1], sample.unwrap_or(&[]));
        }
    }

    let map_points = plan
        .iter()
        .find_map(|section| match section {
            Section::Map { points } => Some(points.as_slice()),
            _ => None,
        })
        .unwrap_or(&[]);
    map::render_map(f, lower_chunks[1], map_points);

    if let Some((kind, message)) = plan.iter().find_map(|section| match section {
        Section::ErrorDemo { kind, message } => Some((*kind, message.as_str())),
        _ => None,
    }) {
        errors::render_exception(f, lower_chunks[2], kind, message);
    }

    footer::render_footer(f, main_chunks[3], state.tick);
}
