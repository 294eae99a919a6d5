//! Control descriptors: what a renderer needs to draw each field.
//!
//! The mapping is pure and total over committed fields. The core decides the
//! control family and the attributes it must carry; drawing actual widgets is
//! the rendering collaborator's problem.

use crate::collection::FieldCollection;
use crate::types::{ControlType, FieldDef, FieldKind};

/// The text of a select's implicit empty choice when the field itself
/// carries no placeholder.
const DEFAULT_EMPTY_CHOICE: &str = "Select an option";

/// Renderable description of one control, addressed by the field's wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlDescriptor {
    /// A single value-carrying input (text, number, email, password, date).
    Input {
        kind: ControlType,
        name: String,
        placeholder: String,
        required: bool,
    },
    /// One chooser over the options. `empty_choice` is the implicit
    /// unselected entry, present only when the field is not required.
    Select {
        name: String,
        options: Vec<String>,
        empty_choice: Option<String>,
        required: bool,
    },
    /// An exclusive-choice group; every choice shares the name and is
    /// individually marked required.
    RadioGroup {
        name: String,
        options: Vec<String>,
        required: bool,
    },
    /// A multi-choice group; `required` does not propagate to individual
    /// choices.
    CheckboxGroup { name: String, options: Vec<String> },
}

impl ControlDescriptor {
    /// The submission key every control in this descriptor reports under.
    pub fn name(&self) -> &str {
        match self {
            Self::Input { name, .. }
            | Self::Select { name, .. }
            | Self::RadioGroup { name, .. }
            | Self::CheckboxGroup { name, .. } => name,
        }
    }

    /// Whether this descriptor contributes multiple values under its name.
    pub fn is_multi(&self) -> bool {
        matches!(self, Self::CheckboxGroup { .. })
    }
}

/// Map one committed field to its control descriptor.
pub fn render_field(def: &FieldDef) -> ControlDescriptor {
    let name = def.effective_name();
    match &def.kind {
        FieldKind::Text { placeholder }
        | FieldKind::Number { placeholder }
        | FieldKind::Email { placeholder }
        | FieldKind::Password { placeholder }
        | FieldKind::Date { placeholder } => ControlDescriptor::Input {
            kind: def.kind.control_type(),
            name,
            placeholder: placeholder.clone(),
            required: def.required,
        },
        FieldKind::Select {
            placeholder,
            options,
        } => ControlDescriptor::Select {
            name,
            options: options.clone(),
            empty_choice: if def.required {
                None
            } else {
                Some(
                    placeholder
                        .clone()
                        .unwrap_or_else(|| DEFAULT_EMPTY_CHOICE.to_string()),
                )
            },
            required: def.required,
        },
        FieldKind::Radio { options } => ControlDescriptor::RadioGroup {
            name,
            options: options.clone(),
            required: def.required,
        },
        FieldKind::Checkbox { options } => ControlDescriptor::CheckboxGroup {
            name,
            options: options.clone(),
        },
    }
}

/// Map the whole collection to descriptors, in order, skipping entries with
/// no committed view.
pub fn render_form(collection: &FieldCollection) -> Vec<ControlDescriptor> {
    collection.committed_fields().map(render_field).collect()
}
