//! `formsmith normalize` — rewrite a schema file in canonical form.
//!
//! The output carries only semantic attributes, so hand-written schemas with
//! redundant defaults (`"required": false`, empty option lists, derivable
//! names) come out clean. Normalizing a canonical file is a fixed point.

use std::fs;
use std::path::Path;

use formsmith::{export_schema, FieldCollection, Result};
use tracing::debug;

pub fn run_normalize(file: &Path, output: Option<&Path>) -> Result<()> {
    let input = fs::read_to_string(file)?;
    let fields = formsmith::parse_schema(&input)?;

    let mut collection = FieldCollection::new();
    collection.replace_all(fields);
    let canonical = export_schema(&collection)?;

    match output {
        Some(path) => {
            fs::write(path, canonical + "\n")?;
            debug!(output = %path.display(), "wrote canonical schema");
        }
        None => println!("{canonical}"),
    }
    Ok(())
}
