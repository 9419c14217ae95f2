//! Error types for everything around the generator.
//! The generator itself never fails; these cover parsing user input and
//! loading descriptors or settings from disk.

use std::path::PathBuf;

pub type ConditionResult<T> = std::result::Result<T, ConditionError>;

#[derive(Debug, thiserror::Error)]
pub enum ConditionError {
    #[error("Unknown operator '{value}'. Expected one of: =, !=, >, <, >=, <=, LIKE, IN, NOT IN, BETWEEN, NOT BETWEEN, IS NULL, NOT NULL (or their names, e.g. NOT_EQ).")]
    UnknownOperator { value: String },

    #[error("Unknown dialect '{value}'. Expected one of: mysql, postgresql, oracle.")]
    UnknownDialect { value: String },

    #[error("Cannot read type '{text}' of field '{field}'. Expected a type name, e.g. java.util.List<java.lang.Long>.")]
    InvalidTypeText { field: String, text: String },

    #[error("Invalid field #{index}: {reason}")]
    InvalidField { index: usize, reason: String },

    #[error("Field '{field}' is declared more than once.")]
    DuplicateField { field: String },

    #[error("No field named '{field}'. Known fields: {known}")]
    UnknownField { field: String, known: String },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConditionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
