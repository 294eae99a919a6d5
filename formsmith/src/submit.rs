//! Submission collection: entered values reduced to one flat record.
//!
//! This is a collection step, not a re-validation step — whatever the
//! rendered controls enforced structurally is trusted here. Checkbox groups
//! contribute every checked value under their shared name; every other
//! control contributes a single value, last write winning, which is the flat
//! form-submission semantics the descriptors imply.

use indexmap::IndexMap;

use crate::render::ControlDescriptor;

/// The value(s) submitted under one field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmittedValue {
    One(String),
    Many(Vec<String>),
}

/// Reduce the (name, value) pairs from rendered controls into a flat record,
/// keyed by wire name in first-seen order.
///
/// Pairs whose name matches no descriptor did not come from this form and
/// are ignored.
pub fn collect<I>(
    descriptors: &[ControlDescriptor],
    pairs: I,
) -> IndexMap<String, SubmittedValue>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut record = IndexMap::new();

    for (name, value) in pairs {
        let Some(descriptor) = descriptors.iter().find(|d| d.name() == name) else {
            continue;
        };
        if descriptor.is_multi() {
            // The descriptor decides the shape before any value lands, so a
            // multi name always holds a sequence.
            let entry = record
                .entry(name)
                .or_insert_with(|| SubmittedValue::Many(Vec::new()));
            if let SubmittedValue::Many(values) = entry {
                values.push(value);
            }
        } else {
            record.insert(name, SubmittedValue::One(value));
        }
    }

    record
}
