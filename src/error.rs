//! Data error taxonomy and classification.

use log::LevelFilter;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

/// Errors from loading or charting uploaded patient data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {path}: {message}")]
    MalformedCsv { path: String, message: String },

    #[error("malformed JSON in {path}: {message}")]
    MalformedJson { path: String, message: String },

    #[error("column `{0}` not found in uploaded data")]
    MissingColumn(String),

    /// Never produced by real file I/O. Constructed only for the scripted
    /// exception display on each render pass.
    #[error("patient data file not found: {0}")]
    FileNotFound(String),
}

impl DataError {
    /// Short variant name for the structured exception viewer.
    pub fn kind(&self) -> &'static str {
        match self {
            DataError::Io { .. } => "Io",
            DataError::MalformedCsv { .. } => "MalformedCsv",
            DataError::MalformedJson { .. } => "MalformedJson",
            DataError::MissingColumn(_) => "MissingColumn",
            DataError::FileNotFound(_) => "FileNotFound",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_load_error(&self, error: &DataError) -> LogLevel {
        match error {
            // Filesystem hiccups may clear on reload
            DataError::Io { .. } => LogLevel::Warn,

            // Critical: the file content itself is bad
            DataError::MalformedCsv { .. } => LogLevel::Error,
            DataError::MalformedJson { .. } => LogLevel::Error,

            _ => LogLevel::Error,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_classify_as_warnings() {
        let classifier = ErrorClassifier::new();
        let err = DataError::Io {
            path: "vitals.csv".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(classifier.classify_load_error(&err), LogLevel::Warn);
    }

    #[test]
    fn parse_errors_classify_as_errors() {
        let classifier = ErrorClassifier::new();
        let err = DataError::MalformedJson {
            path: "vitals.json".to_string(),
            message: "expected value at line 1".to_string(),
        };
        assert_eq!(classifier.classify_load_error(&err), LogLevel::Error);
    }

    #[test]
    fn missing_column_classifies_as_error() {
        let classifier = ErrorClassifier::new();
        let err = DataError::MissingColumn("Weight".to_string());
        assert_eq!(classifier.classify_load_error(&err), LogLevel::Error);
    }

    #[test]
    fn display_includes_column_name() {
        let err = DataError::MissingColumn("Weight".to_string());
        assert_eq!(err.to_string(), "column `Weight` not found in uploaded data");
        assert_eq!(err.kind(), "MissingColumn");
    }
}
