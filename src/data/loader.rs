//! Data file loading and parsing.

use super::dataset::Dataset;
use super::format::DataFormat;
use crate::error::DataError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse a data file into a [`Dataset`].
///
/// The format tag is resolved from the extension before reading; the read
/// itself is synchronous. Parse failures are not recovered here, they
/// surface on the dashboard's error panel.
pub fn load_dataset(path: &Path) -> Result<Dataset, DataError> {
    let format = DataFormat::from_path(path);
    let source = path.display().to_string();

    let text = fs::read_to_string(path).map_err(|io| DataError::Io {
        path: source.clone(),
        source: io,
    })?;

    let (columns, rows) = match format {
        DataFormat::Csv => parse_csv(&text, &source)?,
        DataFormat::Json | DataFormat::Unsupported => parse_json(&text, &source)?,
    };

    Ok(Dataset {
        format,
        source,
        columns,
        rows,
    })
}

type Columns = Vec<String>;
type Rows = Vec<Vec<Value>>;

fn parse_csv(text: &str, path: &str) -> Result<(Columns, Rows), DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let columns: Columns = reader
        .headers()
        .map_err(|e| malformed_csv(path, e))?
        .iter()
        .map(String::from)
        .collect();
    if columns.iter().all(|column| column.is_empty()) {
        return Err(DataError::MalformedCsv {
            path: path.to_string(),
            message: "missing header row".to_string(),
        });
    }

    let mut rows = Rows::new();
    for record in reader.records() {
        let record = record.map_err(|e| malformed_csv(path, e))?;
        rows.push(record.iter().map(cell_value).collect());
    }
    Ok((columns, rows))
}

fn malformed_csv(path: &str, error: csv::Error) -> DataError {
    DataError::MalformedCsv {
        path: path.to_string(),
        message: error.to_string(),
    }
}

/// CSV cells carry no type information; numeric-looking cells become JSON
/// numbers so both formats produce the same dataset shape.
fn cell_value(cell: &str) -> Value {
    if let Ok(parsed) = cell.parse::<f64>() {
        if let Some(number) = serde_json::Number::from_f64(parsed) {
            return Value::Number(number);
        }
    }
    Value::String(cell.to_string())
}

fn parse_json(text: &str, path: &str) -> Result<(Columns, Rows), DataError> {
    let malformed = |message: String| DataError::MalformedJson {
        path: path.to_string(),
        message,
    };

    let parsed: Value =
        serde_json::from_str(text).map_err(|e| malformed(e.to_string()))?;
    let records = parsed
        .as_array()
        .ok_or_else(|| malformed("expected an array of row objects".to_string()))?;

    // Column order: first appearance across the records.
    let mut columns = Columns::new();
    let mut objects = Vec::with_capacity(records.len());
    for record in records {
        let object = record
            .as_object()
            .ok_or_else(|| malformed("expected every row to be an object".to_string()))?;
        for key in object.keys() {
            if !columns.iter().any(|column| column == key) {
                columns.push(key.clone());
            }
        }
        objects.push(object);
    }

    let rows = objects
        .iter()
        .map(|object| {
            columns
                .iter()
                .map(|column| object.get(column).cloned().unwrap_or(Value::Null))
                .collect()
        })
        .collect();
    Ok((columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fixture(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("create fixture");
        file.write_all(content.as_bytes()).expect("write fixture");
        file
    }

    #[test]
    fn loads_csv_with_conventional_columns() {
        let file = write_fixture(
            ".csv",
            "Date,Blood Pressure,Heart Rate,Weight\n\
             2024-03-01,120/80,72,70.5\n\
             2024-03-02,125/82,75,70.1\n",
        );
        let dataset = load_dataset(file.path()).expect("load csv");

        assert_eq!(dataset.format, DataFormat::Csv);
        assert_eq!(
            dataset.columns,
            vec!["Date", "Blood Pressure", "Heart Rate", "Weight"]
        );
        assert_eq!(dataset.row_count(), 2);
        // Typed cells: numbers where they parse, strings elsewhere
        assert_eq!(dataset.rows[0][1], json!("120/80"));
        assert_eq!(dataset.rows[0][2], json!(72.0));
    }

    #[test]
    fn loads_json_row_records() {
        let file = write_fixture(
            ".json",
            r#"[
                {"Date": "2024-03-01", "Heart Rate": 72},
                {"Date": "2024-03-02", "Heart Rate": 75, "Weight": 70.1}
            ]"#,
        );
        let dataset = load_dataset(file.path()).expect("load json");

        assert_eq!(dataset.format, DataFormat::Json);
        assert_eq!(dataset.columns, vec!["Date", "Heart Rate", "Weight"]);
        assert_eq!(dataset.rows[0][2], Value::Null);
    }

    #[test]
    fn unknown_extension_parses_as_json() {
        let file = write_fixture(".dat", r#"[{"Date": "2024-03-01", "Weight": 70}]"#);
        let dataset = load_dataset(file.path()).expect("load");
        assert_eq!(dataset.format, DataFormat::Unsupported);
        assert_eq!(dataset.row_count(), 1);
    }

    #[test]
    fn unknown_extension_with_non_json_content_fails() {
        let file = write_fixture(".txt", "not json at all");
        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, DataError::MalformedJson { .. }));
    }

    #[test]
    fn empty_csv_is_malformed() {
        let file = write_fixture(".csv", "");
        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, DataError::MalformedCsv { .. }));
    }

    #[test]
    fn json_rows_must_be_objects() {
        let file = write_fixture(".json", "[1, 2, 3]");
        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, DataError::MalformedJson { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_dataset(Path::new("/nonexistent/vitals.csv")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
