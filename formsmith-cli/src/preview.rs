//! `formsmith preview` — print the control descriptors a renderer would
//! receive for each field.

use std::fs;
use std::path::Path;

use formsmith::{render_form, ControlDescriptor, FieldCollection, Result};

/// One line per control: family, submission name, and the attributes the
/// renderer must honor.
pub fn describe(descriptor: &ControlDescriptor) -> String {
    match descriptor {
        ControlDescriptor::Input {
            kind,
            name,
            placeholder,
            required,
        } => {
            let mut line = format!("input[{kind}] name={name}");
            if !placeholder.is_empty() {
                line.push_str(&format!(" placeholder=\"{placeholder}\""));
            }
            if *required {
                line.push_str(" required");
            }
            line
        }
        ControlDescriptor::Select {
            name,
            options,
            empty_choice,
            required,
        } => {
            let mut line = format!("select name={name} options=[{}]", options.join(", "));
            if let Some(choice) = empty_choice {
                line.push_str(&format!(" empty-choice=\"{choice}\""));
            }
            if *required {
                line.push_str(" required");
            }
            line
        }
        ControlDescriptor::RadioGroup {
            name,
            options,
            required,
        } => {
            let mut line = format!("radio-group name={name} options=[{}]", options.join(", "));
            if *required {
                line.push_str(" required");
            }
            line
        }
        ControlDescriptor::CheckboxGroup { name, options } => {
            format!("checkbox-group name={name} options=[{}]", options.join(", "))
        }
    }
}

pub fn run_preview(file: &Path) -> Result<()> {
    let input = fs::read_to_string(file)?;
    let fields = formsmith::parse_schema(&input)?;

    let mut collection = FieldCollection::new();
    collection.replace_all(fields);

    for descriptor in render_form(&collection) {
        println!("{}", describe(&descriptor));
    }
    Ok(())
}
