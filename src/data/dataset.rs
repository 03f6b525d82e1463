//! In-memory tabular dataset.

use super::format::DataFormat;
use crate::consts::cli_consts::columns;
use crate::error::DataError;
use chrono::NaiveDate;
use serde_json::Value;

/// An uploaded dataset: ordered columns and rows of values. Lives in memory
/// for the duration of the session and is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub format: DataFormat,
    /// Path the data was loaded from, for display.
    pub source: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Dataset {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cell rendered for the table view. Strings print without quotes.
    pub fn cell_text(&self, row: usize, column: usize) -> String {
        match self.rows.get(row).and_then(|cells| cells.get(column)) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    /// Numeric time series for `column`, indexed by the `Date` column.
    ///
    /// The x value is days since the first parseable date, or the row index
    /// when the date does not parse. Rows whose cell has no numeric reading
    /// are skipped. A missing `Date` or `column` is an error, which halts
    /// the render pass at the failing chart.
    pub fn series(&self, column: &str) -> Result<Vec<(f64, f64)>, DataError> {
        let date_idx = self
            .column_index(columns::DATE)
            .ok_or_else(|| DataError::MissingColumn(columns::DATE.to_string()))?;
        let value_idx = self
            .column_index(column)
            .ok_or_else(|| DataError::MissingColumn(column.to_string()))?;

        let dates: Vec<Option<NaiveDate>> = self
            .rows
            .iter()
            .map(|cells| cells.get(date_idx).and_then(parse_date))
            .collect();
        let epoch = dates.iter().flatten().next().copied();

        let mut points = Vec::with_capacity(self.rows.len());
        for (row, cells) in self.rows.iter().enumerate() {
            let Some(reading) = cells.get(value_idx).and_then(numeric_reading) else {
                continue;
            };
            let x = match (dates[row], epoch) {
                (Some(date), Some(epoch)) => (date - epoch).num_days() as f64,
                _ => row as f64,
            };
            points.push((x, reading));
        }
        Ok(points)
    }
}

fn parse_date(value: &Value) -> Option<NaiveDate> {
    let text = value.as_str()?;
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

/// Numeric value of a cell: a JSON number, a numeric string, or the
/// systolic component of a "120/80" blood pressure reading.
fn numeric_reading(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let text = text.trim();
            if let Ok(parsed) = text.parse::<f64>() {
                return Some(parsed);
            }
            text.split('/').next()?.trim().parse::<f64>().ok()
        }
        _ => None,
    }
}
