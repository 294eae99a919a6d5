//! Schema import: a parsed JSON value becomes a sequence of field definitions.
//!
//! Import walks the array by hand rather than leaning on a serde derive so
//! every diagnostic carries the index of the offending element. Validation is
//! all-or-nothing: the first bad element aborts the import, and callers apply
//! the result to a collection in one step, so a failed import leaves prior
//! state untouched.

use serde_json::Value;
use tracing::debug;

use crate::error::{ImportError, Result};
use crate::types::{ControlType, FieldDef, FieldKind};

/// Parse a JSON document and import it as a field schema.
///
/// Covers the full boundary from raw text: malformed JSON surfaces as
/// [`SchemaError::Parse`](crate::SchemaError::Parse), a well-formed value
/// that is not a valid schema as [`SchemaError::Import`](crate::SchemaError::Import).
pub fn parse_schema(input: &str) -> Result<Vec<FieldDef>> {
    let value: Value = serde_json::from_str(input)?;
    Ok(import_fields(&value)?)
}

/// Validate and normalize a parsed JSON value into field definitions.
pub fn import_fields(value: &Value) -> std::result::Result<Vec<FieldDef>, ImportError> {
    let Some(items) = value.as_array() else {
        return Err(ImportError::NotAnArray);
    };

    let mut fields = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        fields.push(import_one(index, item)?);
    }

    debug!(count = fields.len(), "imported field definitions");
    Ok(fields)
}

fn import_one(index: usize, item: &Value) -> std::result::Result<FieldDef, ImportError> {
    // Committed fields must have a non-empty label, so an empty string is
    // rejected exactly like an absent one.
    let label = item
        .get("label")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(ImportError::MissingRequiredField { index })?;

    let tag = item
        .get("type")
        .and_then(Value::as_str)
        .ok_or(ImportError::MissingRequiredField { index })?;
    let control = ControlType::parse_tag(tag).ok_or_else(|| ImportError::UnknownType {
        index,
        found: tag.to_string(),
    })?;

    let placeholder = item.get("placeholder").and_then(Value::as_str);

    let kind = if control.is_choice() {
        let placeholder = placeholder.unwrap_or_default();
        FieldKind::from_parts(control, placeholder.to_string(), read_options(index, item)?)
    } else {
        // Date is exempt from the import-time placeholder requirement;
        // commit-time validation still enforces it on edit.
        let placeholder = match control {
            ControlType::Date => placeholder.unwrap_or_default(),
            _ => placeholder
                .filter(|s| !s.is_empty())
                .ok_or(ImportError::MissingPlaceholder { index })?,
        };
        FieldKind::from_parts(control, placeholder.to_string(), Vec::new())
    };

    let name = item
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(FieldDef {
        label: label.to_string(),
        name,
        required: item.get("required").and_then(Value::as_bool).unwrap_or(false),
        kind,
    })
}

fn read_options(index: usize, item: &Value) -> std::result::Result<Vec<String>, ImportError> {
    let raw = item
        .get("options")
        .and_then(Value::as_array)
        .ok_or(ImportError::MissingOptions { index })?;

    let mut options = Vec::with_capacity(raw.len());
    for entry in raw {
        let opt = entry.as_str().ok_or(ImportError::MissingOptions { index })?;
        options.push(opt.to_string());
    }
    if options.is_empty() {
        return Err(ImportError::MissingOptions { index });
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_imports_a_simple_schema() {
        let value = json!([
            {"label": "First Name", "type": "text", "placeholder": "e.g. Ada"},
            {"label": "Role", "type": "select", "options": ["Admin", "User"], "required": true}
        ]);
        let fields = import_fields(&value).unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].label, "First Name");
        assert_eq!(fields[0].kind.placeholder(), Some("e.g. Ada"));
        assert!(!fields[0].required);
        assert!(fields[1].required);
        assert_eq!(fields[1].kind.options().unwrap(), ["Admin", "User"]);
    }

    #[test]
    fn test_rejects_non_array_root() {
        assert_eq!(
            import_fields(&json!({"label": "A"})),
            Err(ImportError::NotAnArray)
        );
        assert_eq!(import_fields(&json!("nope")), Err(ImportError::NotAnArray));
    }

    #[test]
    fn test_rejects_missing_label_or_type() {
        let value = json!([{"type": "text", "placeholder": "x"}]);
        assert_eq!(
            import_fields(&value),
            Err(ImportError::MissingRequiredField { index: 0 })
        );

        let value = json!([{"label": "A", "placeholder": "x"}]);
        assert_eq!(
            import_fields(&value),
            Err(ImportError::MissingRequiredField { index: 0 })
        );
    }

    #[test]
    fn test_rejects_empty_label() {
        let value = json!([{"label": "", "type": "text", "placeholder": "x"}]);
        assert_eq!(
            import_fields(&value),
            Err(ImportError::MissingRequiredField { index: 0 })
        );
    }

    #[test]
    fn test_rejects_unknown_type() {
        let value = json!([{"label": "A", "type": "textarea"}]);
        assert_eq!(
            import_fields(&value),
            Err(ImportError::UnknownType {
                index: 0,
                found: "textarea".into()
            })
        );
    }

    #[test]
    fn test_rejects_missing_placeholder_on_value_types() {
        for tag in ["text", "number", "email", "password"] {
            let value = json!([{"label": "A", "type": tag}]);
            assert_eq!(
                import_fields(&value),
                Err(ImportError::MissingPlaceholder { index: 0 }),
                "type {tag}"
            );
        }
    }

    #[test]
    fn test_date_placeholder_is_optional_at_import() {
        let value = json!([{"label": "Born", "type": "date"}]);
        let fields = import_fields(&value).unwrap();
        assert_eq!(fields[0].kind.placeholder(), Some(""));
    }

    #[test]
    fn test_rejects_bad_options() {
        // Absent
        let value = json!([{"label": "A", "type": "select"}]);
        assert_eq!(
            import_fields(&value),
            Err(ImportError::MissingOptions { index: 0 })
        );
        // Not an array
        let value = json!([{"label": "A", "type": "radio", "options": "x,y"}]);
        assert_eq!(
            import_fields(&value),
            Err(ImportError::MissingOptions { index: 0 })
        );
        // Empty
        let value = json!([{"label": "A", "type": "checkbox", "options": []}]);
        assert_eq!(
            import_fields(&value),
            Err(ImportError::MissingOptions { index: 0 })
        );
        // Non-string entry
        let value = json!([{"label": "A", "type": "select", "options": ["x", 3]}]);
        assert_eq!(
            import_fields(&value),
            Err(ImportError::MissingOptions { index: 0 })
        );
    }

    #[test]
    fn test_import_is_all_or_nothing() {
        let value = json!([
            {"label": "A", "type": "text", "placeholder": "x"},
            {"label": "B", "type": "select"}
        ]);
        assert_eq!(
            import_fields(&value),
            Err(ImportError::MissingOptions { index: 1 })
        );
    }

    #[test]
    fn test_explicit_name_is_kept() {
        let value = json!([
            {"label": "First Name", "type": "text", "placeholder": "x", "name": "given_name"}
        ]);
        let fields = import_fields(&value).unwrap();
        assert_eq!(fields[0].name.as_deref(), Some("given_name"));
        assert_eq!(fields[0].effective_name(), "given_name");
    }

    #[test]
    fn test_empty_name_falls_back_to_derived() {
        let value = json!([
            {"label": "First Name", "type": "text", "placeholder": "x", "name": ""}
        ]);
        let fields = import_fields(&value).unwrap();
        assert_eq!(fields[0].name, None);
        assert_eq!(fields[0].effective_name(), "first_name");
    }

    #[test]
    fn test_select_keeps_its_placeholder() {
        let value = json!([
            {"label": "Role", "type": "select", "placeholder": "Pick a role", "options": ["A"]}
        ]);
        let fields = import_fields(&value).unwrap();
        assert_eq!(fields[0].kind.placeholder(), Some("Pick a role"));
    }

    #[test]
    fn test_parse_schema_classifies_malformed_json() {
        let err = parse_schema("not json").unwrap_err();
        assert!(matches!(err, crate::SchemaError::Parse(_)));

        let err = parse_schema("{}").unwrap_err();
        assert!(matches!(
            err,
            crate::SchemaError::Import(ImportError::NotAnArray)
        ));
    }
}
