//! Core field definition types.
//!
//! A field's `type` determines which other attributes are meaningful, so the
//! type-specific payload lives inside [`FieldKind`]: value-carrying kinds own
//! a placeholder, choice kinds own an options list. [`FieldDef`] flattens the
//! kind so the wire shape stays a flat JSON object.

use serde::{Deserialize, Serialize};

/// The fixed enumeration of field types.
///
/// This is the bare tag, without the per-type payload — used wherever a type
/// is selected or reported before its attributes are known (the edit draft,
/// import diagnostics, control descriptors).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ControlType {
    Text,
    Number,
    Email,
    Password,
    Date,
    Select,
    Radio,
    Checkbox,
}

impl ControlType {
    /// Parse a wire tag. Returns `None` for anything outside the enumeration.
    pub fn parse_tag(tag: &str) -> Option<Self> {
        match tag {
            "text" => Some(Self::Text),
            "number" => Some(Self::Number),
            "email" => Some(Self::Email),
            "password" => Some(Self::Password),
            "date" => Some(Self::Date),
            "select" => Some(Self::Select),
            "radio" => Some(Self::Radio),
            "checkbox" => Some(Self::Checkbox),
            _ => None,
        }
    }

    /// The wire tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Email => "email",
            Self::Password => "password",
            Self::Date => "date",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
        }
    }

    /// True for kinds rendered as a single value-carrying input.
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::Number | Self::Email | Self::Password | Self::Date
        )
    }

    /// True for kinds rendered as a choice over an options list.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Select | Self::Radio | Self::Checkbox)
    }
}

impl std::fmt::Display for ControlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The type of a field together with its type-specific attributes.
///
/// Value-carrying kinds hold the placeholder hint; choice kinds hold the
/// ordered options list. A select additionally keeps an optional placeholder,
/// used as the text of its implicit empty choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Text {
        #[serde(default, skip_serializing_if = "String::is_empty")]
        placeholder: String,
    },
    Number {
        #[serde(default, skip_serializing_if = "String::is_empty")]
        placeholder: String,
    },
    Email {
        #[serde(default, skip_serializing_if = "String::is_empty")]
        placeholder: String,
    },
    Password {
        #[serde(default, skip_serializing_if = "String::is_empty")]
        placeholder: String,
    },
    Date {
        #[serde(default, skip_serializing_if = "String::is_empty")]
        placeholder: String,
    },
    Select {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        options: Vec<String>,
    },
    Radio {
        options: Vec<String>,
    },
    Checkbox {
        options: Vec<String>,
    },
}

impl FieldKind {
    /// Assemble a kind from the uniform attribute superset.
    ///
    /// Attributes that are meaningless for the target type are dropped:
    /// a text field keeps no options, a radio group keeps no placeholder.
    pub fn from_parts(
        control: ControlType,
        placeholder: String,
        options: Vec<String>,
    ) -> Self {
        match control {
            ControlType::Text => Self::Text { placeholder },
            ControlType::Number => Self::Number { placeholder },
            ControlType::Email => Self::Email { placeholder },
            ControlType::Password => Self::Password { placeholder },
            ControlType::Date => Self::Date { placeholder },
            ControlType::Select => Self::Select {
                placeholder: if placeholder.is_empty() {
                    None
                } else {
                    Some(placeholder)
                },
                options,
            },
            ControlType::Radio => Self::Radio { options },
            ControlType::Checkbox => Self::Checkbox { options },
        }
    }

    /// The bare type tag.
    pub fn control_type(&self) -> ControlType {
        match self {
            Self::Text { .. } => ControlType::Text,
            Self::Number { .. } => ControlType::Number,
            Self::Email { .. } => ControlType::Email,
            Self::Password { .. } => ControlType::Password,
            Self::Date { .. } => ControlType::Date,
            Self::Select { .. } => ControlType::Select,
            Self::Radio { .. } => ControlType::Radio,
            Self::Checkbox { .. } => ControlType::Checkbox,
        }
    }

    /// The placeholder hint, where the type carries one.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::Text { placeholder }
            | Self::Number { placeholder }
            | Self::Email { placeholder }
            | Self::Password { placeholder }
            | Self::Date { placeholder } => Some(placeholder),
            Self::Select { placeholder, .. } => placeholder.as_deref(),
            Self::Radio { .. } | Self::Checkbox { .. } => None,
        }
    }

    /// The options list, where the type carries one.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::Select { options, .. }
            | Self::Radio { options }
            | Self::Checkbox { options } => Some(options),
            _ => None,
        }
    }
}

/// One committed form field.
///
/// `name` is stored only when the user set it explicitly; otherwise the wire
/// identifier is derived from `label` on demand, so it can never drift out of
/// sync with a relabeled field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldDef {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(flatten)]
    pub kind: FieldKind,
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl FieldDef {
    /// The wire identifier: the explicit name if set, otherwise derived from
    /// the label.
    pub fn effective_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => derive_name(&self.label),
        }
    }
}

/// Derive a wire identifier from a display label.
///
/// Lower-cases the label and collapses each whitespace run into a single
/// underscore. Punctuation passes through untouched. Idempotent: a derived
/// name contains no whitespace, so re-deriving it is a fixed point.
pub fn derive_name(label: &str) -> String {
    let mut name = String::with_capacity(label.len());
    let mut in_run = false;
    for ch in label.chars() {
        if ch.is_whitespace() {
            if !in_run {
                name.push('_');
            }
            in_run = true;
        } else {
            name.extend(ch.to_lowercase());
            in_run = false;
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_name_basic() {
        assert_eq!(derive_name("First Name"), "first_name");
    }

    #[test]
    fn test_derive_name_collapses_whitespace_runs() {
        assert_eq!(derive_name("First  Name"), "first_name");
        assert_eq!(derive_name("a \t b"), "a_b");
    }

    #[test]
    fn test_derive_name_preserves_punctuation() {
        assert_eq!(derive_name("First  Name!"), "first_name!");
        assert_eq!(derive_name("E-mail (work)"), "e-mail_(work)");
    }

    #[test]
    fn test_derive_name_is_idempotent() {
        let once = derive_name("First  Name!");
        assert_eq!(derive_name(&once), once);
    }

    #[test]
    fn test_derive_name_empty_label() {
        assert_eq!(derive_name(""), "");
    }

    #[test]
    fn test_effective_name_prefers_explicit() {
        let def = FieldDef {
            label: "First Name".into(),
            name: Some("given_name".into()),
            required: false,
            kind: FieldKind::Text {
                placeholder: "e.g. Ada".into(),
            },
        };
        assert_eq!(def.effective_name(), "given_name");
    }

    #[test]
    fn test_effective_name_derives_when_unset() {
        let def = FieldDef {
            label: "First Name".into(),
            name: None,
            required: false,
            kind: FieldKind::Text {
                placeholder: "e.g. Ada".into(),
            },
        };
        assert_eq!(def.effective_name(), "first_name");
    }

    #[test]
    fn test_control_type_tag_round_trip() {
        for tag in [
            "text", "number", "email", "password", "date", "select", "radio", "checkbox",
        ] {
            let control = ControlType::parse_tag(tag).unwrap();
            assert_eq!(control.as_str(), tag);
        }
        assert_eq!(ControlType::parse_tag("textarea"), None);
    }

    #[test]
    fn test_control_type_families() {
        assert!(ControlType::Date.is_value());
        assert!(!ControlType::Date.is_choice());
        assert!(ControlType::Checkbox.is_choice());
        assert!(!ControlType::Checkbox.is_value());
    }

    #[test]
    fn test_field_def_serializes_flat() {
        let def = FieldDef {
            label: "Email".into(),
            name: None,
            required: true,
            kind: FieldKind::Email {
                placeholder: "you@example.com".into(),
            },
        };
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["label"], "Email");
        assert_eq!(json["type"], "email");
        assert_eq!(json["placeholder"], "you@example.com");
        assert_eq!(json["required"], true);
        assert!(json.get("name").is_none());
        assert!(json.get("options").is_none());
    }

    #[test]
    fn test_field_def_skips_defaults() {
        let def = FieldDef {
            label: "Color".into(),
            name: None,
            required: false,
            kind: FieldKind::Select {
                placeholder: None,
                options: vec!["Red".into(), "Blue".into()],
            },
        };
        let json = serde_json::to_value(&def).unwrap();
        assert!(json.get("required").is_none());
        assert!(json.get("placeholder").is_none());
        assert_eq!(json["options"][1], "Blue");
    }

    #[test]
    fn test_field_def_deserializes_flat() {
        let def: FieldDef = serde_json::from_str(
            r#"{"label": "Role", "type": "radio", "options": ["Admin", "User"], "required": true}"#,
        )
        .unwrap();
        assert_eq!(def.label, "Role");
        assert!(def.required);
        assert_eq!(def.kind.control_type(), ControlType::Radio);
        assert_eq!(def.kind.options().unwrap().len(), 2);
    }

    #[test]
    fn test_from_parts_drops_meaningless_attributes() {
        let kind = FieldKind::from_parts(
            ControlType::Text,
            "hint".into(),
            vec!["leftover".into()],
        );
        assert_eq!(kind.options(), None);

        let kind = FieldKind::from_parts(ControlType::Radio, "hint".into(), vec!["A".into()]);
        assert_eq!(kind.placeholder(), None);

        let kind = FieldKind::from_parts(ControlType::Select, "Pick one".into(), vec!["A".into()]);
        assert_eq!(kind.placeholder(), Some("Pick one"));
    }
}
