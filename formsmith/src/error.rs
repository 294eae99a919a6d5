//! Error types for the schema lifecycle.

use thiserror::Error;

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Top-level error for schema operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Input bytes were not a JSON value at all
    #[error("schema is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A parsed JSON value failed import validation
    #[error(transparent)]
    Import(#[from] ImportError),

    /// A draft failed commit-time validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while importing a parsed JSON value.
///
/// Each variant carries the index of the offending element; import is
/// all-or-nothing, so the first failure aborts the whole import.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The root value is not an array
    #[error("schema root must be an array of field objects")]
    NotAnArray,

    /// `label` or `type` absent or not a string
    #[error("field {index}: missing required attribute `label` or `type`")]
    MissingRequiredField { index: usize },

    /// `type` is a string outside the fixed enumeration
    #[error("field {index}: unknown field type `{found}`")]
    UnknownType { index: usize, found: String },

    /// A value-carrying type without a placeholder
    #[error("field {index}: missing placeholder")]
    MissingPlaceholder { index: usize },

    /// A choice type whose options are absent, not an array of strings, or empty
    #[error("field {index}: missing or empty options")]
    MissingOptions { index: usize },
}

/// Errors raised when committing an edit draft.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The draft label is empty
    #[error("label must not be empty")]
    LabelRequired,

    /// A value-carrying type with an empty placeholder
    #[error("placeholder must not be empty")]
    PlaceholderRequired,

    /// A choice type with no options
    #[error("at least one option is required")]
    OptionsRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_error_display_carries_index() {
        let err = ImportError::MissingOptions { index: 1 };
        assert_eq!(err.to_string(), "field 1: missing or empty options");

        let err = ImportError::UnknownType {
            index: 3,
            found: "textarea".into(),
        };
        assert!(err.to_string().contains("textarea"));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::LabelRequired.to_string(),
            "label must not be empty"
        );
    }

    #[test]
    fn test_schema_error_is_transparent_for_import() {
        let err = SchemaError::from(ImportError::NotAnArray);
        assert_eq!(err.to_string(), "schema root must be an array of field objects");
    }
}
