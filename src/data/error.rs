use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Failure to turn a source file into a typed collection.
///
/// Every variant is fatal for the section that depends on the source; the
/// UI shows the message in place of the section's content.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl DataLoadError {
    /// The structurally-valid-but-wrong-shape case, if that is what this is.
    pub fn as_schema(&self) -> Option<&SchemaError> {
        match self {
            DataLoadError::Schema(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_schema(&self) -> bool {
        self.as_schema().is_some()
    }
}

// ---------------------------------------------------------------------------
// SchemaError – file parsed, but a required field is missing or mistyped
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaError {
    pub path: PathBuf,
    /// Zero-based record (JSON) or data-row (CSV) index, when one applies.
    pub record: Option<usize>,
    pub reason: String,
}

impl SchemaError {
    pub fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            record: None,
            reason: reason.into(),
        }
    }

    pub fn at_record(path: impl Into<PathBuf>, record: usize, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            record: Some(record),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.record {
            Some(i) => write!(
                f,
                "schema error in {} (record {i}): {}",
                self.path.display(),
                self.reason
            ),
            None => write!(f, "schema error in {}: {}", self.path.display(), self.reason),
        }
    }
}

impl std::error::Error for SchemaError {}

pub type Result<T> = std::result::Result<T, DataLoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_message_names_record() {
        let err = SchemaError::at_record("plans.json", 3, "missing field `premium_index`");
        assert_eq!(
            err.to_string(),
            "schema error in plans.json (record 3): missing field `premium_index`"
        );
    }

    #[test]
    fn schema_error_converts_into_load_error() {
        let err: DataLoadError = SchemaError::new("market_share.csv", "missing column").into();
        assert!(err.is_schema());
        assert_eq!(err.to_string(), "schema error in market_share.csv: missing column");
    }

    #[test]
    fn io_error_is_not_schema() {
        let err = DataLoadError::Io {
            path: PathBuf::from("nope.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(!err.is_schema());
        assert!(err.to_string().starts_with("cannot read nope.csv"));
    }
}
