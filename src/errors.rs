//! Error types for tweet_preprocess
//!
//! Null input is never an error: it is carried as `None` through the
//! pipeline. The variants here cover what can actually go wrong: lexical
//! resources that fail to load, rows that are not text, and bad configuration.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PreprocessError>;

/// Main error type for tweet_preprocess
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreprocessError {
    /// A lexical resource (stopword list, lemma table, vocabulary) could not
    /// be loaded. Fatal: surfaced once when resources are built.
    #[error("Resource unavailable: {resource}: {message}")]
    ResourceUnavailable { resource: String, message: String },

    /// A row held a value that is not text (number, object, array, bool)
    #[error("Malformed input in row {row}: {message}")]
    MalformedInput { row: usize, message: String },

    /// The requested column does not exist in the input table
    #[error("Missing column: {column}")]
    MissingColumn { column: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Internal error (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PreprocessError {
    /// Create a resource unavailable error
    pub fn resource_unavailable(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Create a malformed input error for a row
    pub fn malformed_input(row: usize, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            row,
            message: message.into(),
        }
    }

    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error only affects a single row
    /// (the rest of a batch is still usable)
    pub fn is_row_error(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }

    /// Row index for row-scoped errors
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::MalformedInput { row, .. } => Some(*row),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PreprocessError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PreprocessError::resource_unavailable("stopwords", "unsupported language 'xx'");
        assert!(err.to_string().contains("Resource unavailable"));
        assert!(err.to_string().contains("stopwords"));
        assert!(err.to_string().contains("'xx'"));

        let err = PreprocessError::malformed_input(7, "expected string, found number");
        assert!(err.to_string().contains("row 7"));
    }

    #[test]
    fn test_is_row_error() {
        let err = PreprocessError::malformed_input(3, "not text");
        assert!(err.is_row_error());
        assert_eq!(err.row(), Some(3));

        let err = PreprocessError::missing_column("full_text");
        assert!(!err.is_row_error());
        assert_eq!(err.row(), None);
    }

    #[test]
    fn test_from_serde_json() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: PreprocessError = parse.unwrap_err().into();
        assert!(matches!(err, PreprocessError::Serialization { .. }));
    }
}
