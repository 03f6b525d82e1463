//! Uploaded data table component

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Wrap};

/// Render the uploaded dataset as a table, or a placeholder when no data
/// file was supplied.
pub fn render_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let Some(dataset) = &state.dataset else {
        let placeholder = Paragraph::new("No patient data uploaded.\nStart with --data <FILE> or press [R] to reload.")
            .style(Style::default().fg(Color::DarkGray))
            .block(titled_block("UPLOADED PATIENT DATA"))
            .wrap(Wrap { trim: true });
        f.render_widget(placeholder, area);
        return;
    };

    let header = Row::new(
        dataset
            .columns
            .iter()
            .map(|column| Cell::from(column.clone()))
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    );

    // Rows beyond the visible area are clipped by the widget
    let rows: Vec<Row> = (0..dataset.row_count())
        .map(|row| {
            Row::new(
                (0..dataset.columns.len())
                    .map(|column| Cell::from(dataset.cell_text(row, column)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let column_count = dataset.columns.len().max(1) as u32;
    let widths = vec![Constraint::Ratio(1, column_count); dataset.columns.len()];

    let title = format!(
        "UPLOADED PATIENT DATA - {} ({}, {} rows)",
        dataset.source,
        dataset.format,
        dataset.row_count()
    );
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(titled_block(&title));
    f.render_widget(table, area);
}

fn titled_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}
