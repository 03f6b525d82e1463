//! Hospital map component
//!
//! Plots the fixed hospital coordinates on a canvas. The points are
//! hardcoded and unrelated to any uploaded location data.

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, BorderType, Borders};

/// Render the map. `points` are (latitude, longitude) pairs.
pub fn render_map(f: &mut Frame, area: ratatui::layout::Rect, points: &[(f64, f64)]) {
    // Canvas coordinates are (x, y) = (longitude, latitude)
    let coords: Vec<(f64, f64)> = points.iter().map(|(lat, lon)| (*lon, *lat)).collect();

    let (mut min_lon, mut max_lon) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
    for (lon, lat) in &coords {
        min_lon = min_lon.min(*lon);
        max_lon = max_lon.max(*lon);
        min_lat = min_lat.min(*lat);
        max_lat = max_lat.max(*lat);
    }
    if coords.is_empty() {
        (min_lon, max_lon, min_lat, max_lat) = (-1.0, 1.0, -1.0, 1.0);
    }
    const MARGIN: f64 = 0.02;

    let title = format!("NEARBY HOSPITAL LOCATIONS ({})", points.len());
    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .marker(Marker::Braille)
        .x_bounds([min_lon - MARGIN, max_lon + MARGIN])
        .y_bounds([min_lat - MARGIN, max_lat + MARGIN])
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &coords,
                color: Color::LightRed,
            });
        });
    f.render_widget(canvas, area);
}
