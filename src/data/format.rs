//! Data file format classification.

use std::fmt::Display;
use std::path::Path;

/// File format tag, resolved once from the file extension at load time.
///
/// `Unsupported` extensions still parse as JSON, so a file with neither a
/// `.csv` nor a `.json` extension fails only if its content is not valid
/// JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Json,
    Unsupported,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
        {
            Some(ext) if ext == "csv" => DataFormat::Csv,
            Some(ext) if ext == "json" => DataFormat::Json,
            _ => DataFormat::Unsupported,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DataFormat::Csv => "CSV",
            DataFormat::Json => "JSON",
            DataFormat::Unsupported => "unknown (parsed as JSON)",
        }
    }
}

impl Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_extensions() {
        assert_eq!(DataFormat::from_path(Path::new("vitals.csv")), DataFormat::Csv);
        assert_eq!(DataFormat::from_path(Path::new("vitals.json")), DataFormat::Json);
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        assert_eq!(DataFormat::from_path(Path::new("VITALS.CSV")), DataFormat::Csv);
        assert_eq!(DataFormat::from_path(Path::new("Vitals.Json")), DataFormat::Json);
    }

    #[test]
    fn unknown_extensions_are_tagged_unsupported() {
        assert_eq!(
            DataFormat::from_path(Path::new("vitals.txt")),
            DataFormat::Unsupported
        );
        assert_eq!(DataFormat::from_path(Path::new("vitals")), DataFormat::Unsupported);
    }
}
