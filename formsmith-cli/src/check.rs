//! `formsmith check` — validate a schema file and summarize its fields.

use std::fs;
use std::path::Path;

use formsmith::{FieldDef, Result};
use tracing::debug;

/// One summary line per field: label, type, required marker, and the
/// type-specific attribute.
pub fn summarize(def: &FieldDef) -> String {
    let requirement = if def.required { "required" } else { "optional" };
    let mut line = format!("{} ({}, {})", def.label, def.kind.control_type(), requirement);

    if let Some(placeholder) = def.kind.placeholder().filter(|p| !p.is_empty()) {
        line.push_str(&format!(" placeholder: \"{placeholder}\""));
    }
    if let Some(options) = def.kind.options() {
        line.push_str(&format!(" options: {}", options.join(", ")));
    }
    line
}

pub fn run_check(file: &Path) -> Result<()> {
    let input = fs::read_to_string(file)?;
    let fields = formsmith::parse_schema(&input)?;
    debug!(file = %file.display(), count = fields.len(), "schema checked");

    println!("{}: {} field(s)", file.display(), fields.len());
    for def in &fields {
        println!("  {}", summarize(def));
    }
    Ok(())
}
