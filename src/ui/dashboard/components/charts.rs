//! Time-series chart components
//!
//! Renders the uploaded-data charts and the static sample plot with the
//! ratatui `Chart` widget. Line marks for blood pressure and heart rate,
//! bar marks for the weight trend (the closest area-style fill a terminal
//! offers).

use super::super::plan::{ChartKind, Section};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType};

const SERIES_COLORS: [Color; 3] = [Color::LightRed, Color::LightGreen, Color::LightBlue];

/// Render the uploaded-data charts side by side.
pub fn render_charts(f: &mut Frame, area: ratatui::layout::Rect, charts: &[&Section]) {
    if charts.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, charts.len() as u32); charts.len()];
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (slot, section) in charts.iter().enumerate() {
        let Section::Chart { title, kind, points } = section else {
            continue;
        };
        let color = SERIES_COLORS[slot % SERIES_COLORS.len()];
        render_series(f, chunks[slot], title, *kind, points, color, "Day");
    }
}

/// Render the static example chart, independent of any patient data.
pub fn render_sample_plot(f: &mut Frame, area: ratatui::layout::Rect, points: &[(f64, f64)]) {
    render_series(
        f,
        area,
        "Sample Chart",
        ChartKind::Line,
        points,
        Color::Magenta,
        "X Axis",
    )
}

fn render_series(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    title: &str,
    kind: ChartKind,
    points: &[(f64, f64)],
    color: Color,
    x_title: &str,
) {
    let graph_type = match kind {
        ChartKind::Line => GraphType::Line,
        ChartKind::Area => GraphType::Bar,
    };

    let (x_bounds, x_labels) = axis_bounds(points.iter().map(|(x, _)| *x));
    let (y_bounds, y_labels) = axis_bounds(points.iter().map(|(_, y)| *y));

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(graph_type)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .data(points);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        )
        .x_axis(
            Axis::default()
                .title(x_title.to_string())
                .style(Style::default().fg(Color::DarkGray))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds(y_bounds)
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}

/// Bounds with a little headroom, plus min/mid/max labels.
fn axis_bounds(values: impl Iterator<Item = f64>) -> ([f64; 2], Vec<String>) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    if !min.is_finite() || !max.is_finite() {
        return ([0.0, 1.0], vec!["0".to_string(), "1".to_string()]);
    }
    let pad = ((max - min) * 0.1).max(1.0);
    let (low, high) = (min - pad, max + pad);
    let labels = vec![
        format!("{:.0}", low),
        format!("{:.0}", (low + high) / 2.0),
        format!("{:.0}", high),
    ];
    ([low, high], labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_bounds_pad_the_value_range() {
        let ([low, high], labels) = axis_bounds([10.0, 20.0, 30.0].into_iter());
        assert!(low < 10.0);
        assert!(high > 30.0);
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn axis_bounds_handle_empty_series() {
        let ([low, high], _) = axis_bounds(std::iter::empty());
        assert_eq!((low, high), (0.0, 1.0));
    }
}
