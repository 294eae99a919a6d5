//! Form field schema engine
//!
//! `formsmith` owns the lifecycle of declarative form field definitions:
//! importing them from a JSON document with per-element validation, editing
//! them through a commit/rollback transaction, reducing them back to
//! canonical JSON, and describing the controls a renderer needs to draw.
//!
//! # Architecture
//!
//! - **Typed definitions**: a field's type-specific attributes live inside
//!   [`FieldKind`], so a select without options or a text input without a
//!   placeholder is unrepresentable once committed
//! - **Commit-time validation**: drafts may be invalid while the user types;
//!   invariants are enforced when an edit is saved, and a brand-new field
//!   that fails its first commit is removed rather than littering the
//!   collection
//! - **Snapshot rollback**: cancel restores the last committed state; export
//!   and render read committed views only, so unsaved edits never leak
//! - **Presentation-agnostic**: rendering widgets, file dialogs, and error
//!   display are collaborator concerns; the core classifies and reports
//!
//! # Quick start
//!
//! ```rust
//! use formsmith::{parse_schema, export_schema, render_form, FieldCollection};
//!
//! let mut fields = FieldCollection::new();
//! fields.replace_all(parse_schema(
//!     r#"[{"label": "Email", "type": "email", "placeholder": "you@example.com"}]"#,
//! )?);
//!
//! let descriptors = render_form(&fields);
//! assert_eq!(descriptors[0].name(), "email");
//!
//! let canonical = export_schema(&fields)?;
//! assert!(canonical.contains("\"type\": \"email\""));
//! # Ok::<(), formsmith::SchemaError>(())
//! ```

pub mod collection;
pub mod edit;
pub mod error;
pub mod export;
pub mod import;
pub mod render;
pub mod submit;
pub mod types;

pub use collection::{FieldCollection, FieldEntry};
pub use edit::FieldDraft;
pub use error::{ImportError, Result, SchemaError, ValidationError};
pub use export::{export_fields, export_schema};
pub use import::{import_fields, parse_schema};
pub use render::{render_field, render_form, ControlDescriptor};
pub use submit::{collect, SubmittedValue};
pub use types::{derive_name, ControlType, FieldDef, FieldKind};
