//! The in-place edit draft.
//!
//! While a field is mid-edit it is held as a [`FieldDraft`]: a uniform
//! superset of every attribute, so the user can switch the type freely
//! without losing what they already entered. Validation happens at commit
//! time, not per keystroke — intermediate invalid states are expected while
//! typing. [`FieldDraft::validate`] reduces the draft back to a typed
//! [`FieldDef`], dropping the attributes the final type does not carry.

use crate::error::ValidationError;
use crate::types::{derive_name, ControlType, FieldDef, FieldKind};

/// An in-progress edit of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDraft {
    label: String,
    name: Option<String>,
    control: ControlType,
    placeholder: String,
    required: bool,
    options: Vec<String>,
}

impl FieldDraft {
    /// A draft with safe defaults — what a newly added field starts as.
    pub fn new() -> Self {
        Self {
            label: String::new(),
            name: None,
            control: ControlType::Text,
            placeholder: String::new(),
            required: false,
            options: Vec::new(),
        }
    }

    /// Open a committed field for editing.
    pub fn from_def(def: &FieldDef) -> Self {
        Self {
            label: def.label.clone(),
            name: def.name.clone(),
            control: def.kind.control_type(),
            placeholder: def.kind.placeholder().unwrap_or_default().to_string(),
            required: def.required,
            options: def.kind.options().map(<[String]>::to_vec).unwrap_or_default(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The explicit name, if the user set one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The wire identifier the draft currently resolves to.
    pub fn effective_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => derive_name(&self.label),
        }
    }

    pub fn control(&self) -> ControlType {
        self.control
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Set the display label. A derived name follows automatically because
    /// derivation is computed from the label, never stored.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Set an explicit wire name. A blank name reverts the field to derived
    /// naming.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.name = if name.trim().is_empty() { None } else { Some(name) };
    }

    pub fn set_control(&mut self, control: ControlType) {
        self.control = control;
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Replace the options list. Entries are trimmed and empty ones
    /// discarded; order is preserved.
    pub fn set_options<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options = options
            .into_iter()
            .map(|o| o.as_ref().trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
    }

    /// Replace the options list from raw comma-separated input.
    pub fn set_options_raw(&mut self, raw: &str) {
        self.set_options(raw.split(','));
    }

    /// Validate the draft and reduce it to a committed field definition.
    pub fn validate(&self) -> Result<FieldDef, ValidationError> {
        if self.label.is_empty() {
            return Err(ValidationError::LabelRequired);
        }
        if self.control.is_value() && self.placeholder.is_empty() {
            return Err(ValidationError::PlaceholderRequired);
        }
        if self.control.is_choice() && self.options.is_empty() {
            return Err(ValidationError::OptionsRequired);
        }

        Ok(FieldDef {
            label: self.label.clone(),
            name: self.name.clone(),
            required: self.required,
            kind: FieldKind::from_parts(
                self.control,
                self.placeholder.clone(),
                self.options.clone(),
            ),
        })
    }
}

impl Default for FieldDraft {
    fn default() -> Self {
        Self::new()
    }
}
