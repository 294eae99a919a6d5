//! Schema export: the collection reduced to canonical JSON.
//!
//! Only semantic attributes are written — `label`, `type`, `placeholder`
//! (when non-empty), `required` (when true), `options` (when non-empty), and
//! `name` when it was set explicitly. Editor state never reaches the wire:
//! a mid-edit entry exports its last committed snapshot, and a new,
//! never-committed entry exports nothing.

use serde_json::Value;
use tracing::debug;

use crate::collection::FieldCollection;
use crate::error::Result;

/// Reduce the collection to an ordered JSON array of field records.
pub fn export_fields(collection: &FieldCollection) -> Result<Value> {
    let mut items = Vec::with_capacity(collection.len());
    for def in collection.committed_fields() {
        items.push(serde_json::to_value(def)?);
    }
    debug!(count = items.len(), "exported field definitions");
    Ok(Value::Array(items))
}

/// The canonical pretty-printed schema document.
pub fn export_schema(collection: &FieldCollection) -> Result<String> {
    Ok(serde_json::to_string_pretty(&export_fields(collection)?)?)
}
