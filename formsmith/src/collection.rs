//! The field collection and its edit lifecycle.
//!
//! [`FieldCollection`] exclusively owns the ordered sequence of fields; the
//! presentation layer sees read snapshots and drives mutation through the
//! operations here. Each entry is either committed or mid-edit, and a
//! mid-edit entry remembers its last committed state for rollback — a brand
//! new field has none, which is what distinguishes "delete on failed commit"
//! from "stay in edit mode for retry".

use tracing::{debug, warn};

use crate::edit::FieldDraft;
use crate::error::ValidationError;
use crate::types::FieldDef;

/// One slot in the collection: a committed field, or an edit in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEntry {
    Committed(FieldDef),
    Editing {
        draft: FieldDraft,
        /// The last committed state, restored on cancel. `None` marks a
        /// newly added field that has never been committed.
        snapshot: Option<FieldDef>,
    },
}

impl FieldEntry {
    /// Whether this entry is currently mid-edit.
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Whether this is a newly added field that has never been committed.
    pub fn is_new(&self) -> bool {
        matches!(self, Self::Editing { snapshot: None, .. })
    }

    /// The last committed view of this entry, if it has one.
    ///
    /// For a mid-edit entry this is the rollback snapshot, never the unsaved
    /// draft — export and render consume this, so drafts cannot leak.
    pub fn committed(&self) -> Option<&FieldDef> {
        match self {
            Self::Committed(def) => Some(def),
            Self::Editing { snapshot, .. } => snapshot.as_ref(),
        }
    }

    /// The draft, while mid-edit.
    pub fn draft(&self) -> Option<&FieldDraft> {
        match self {
            Self::Editing { draft, .. } => Some(draft),
            Self::Committed(_) => None,
        }
    }
}

/// The ordered sequence of field definitions owned by the running session.
///
/// Order is meaningful: it is render order and submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldCollection {
    entries: Vec<FieldEntry>,
}

impl FieldCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&FieldEntry> {
        self.entries.get(index)
    }

    /// Iterate the committed views, in order. Mid-edit entries yield their
    /// snapshot; never-committed entries are skipped.
    pub fn committed_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.entries.iter().filter_map(FieldEntry::committed)
    }

    /// Replace the whole collection with freshly imported definitions.
    ///
    /// This is the single application point for an import: callers import
    /// first, and only a fully validated result ever reaches the collection.
    pub fn replace_all(&mut self, fields: Vec<FieldDef>) {
        debug!(count = fields.len(), "replacing field collection");
        self.entries = fields.into_iter().map(FieldEntry::Committed).collect();
    }

    /// Append a new field, already open for editing, and return its index.
    pub fn add_field(&mut self) -> usize {
        self.entries.push(FieldEntry::Editing {
            draft: FieldDraft::new(),
            snapshot: None,
        });
        self.entries.len() - 1
    }

    /// Replace the entry at `index` with a committed definition in one step.
    ///
    /// Any in-progress edit at that slot is discarded. Returns false if the
    /// index is out of range.
    pub fn replace(&mut self, index: usize, def: FieldDef) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                *entry = FieldEntry::Committed(def);
                true
            }
            None => false,
        }
    }

    /// Delete a field outright, whatever its state.
    pub fn remove(&mut self, index: usize) -> Option<FieldEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Open a committed field for editing, capturing the rollback snapshot.
    /// No-op if the entry is already mid-edit.
    pub fn begin_edit(&mut self, index: usize) {
        let Some(entry) = self.entries.get_mut(index) else {
            return;
        };
        if let FieldEntry::Committed(def) = entry {
            let draft = FieldDraft::from_def(def);
            let snapshot = Some(def.clone());
            *entry = FieldEntry::Editing { draft, snapshot };
        }
    }

    /// The mutable draft of a mid-edit entry.
    pub fn draft_mut(&mut self, index: usize) -> Option<&mut FieldDraft> {
        match self.entries.get_mut(index) {
            Some(FieldEntry::Editing { draft, .. }) => Some(draft),
            _ => None,
        }
    }

    /// Attempt to commit the draft at `index`.
    ///
    /// On success the draft becomes the new committed state. On validation
    /// failure a never-committed field is deleted from the collection as part
    /// of the failed commit; a previously committed field stays mid-edit,
    /// draft intact, for the user to retry. Committing an entry that is not
    /// mid-edit is a no-op.
    pub fn commit(&mut self, index: usize) -> Result<(), ValidationError> {
        let Some(FieldEntry::Editing { draft, snapshot }) = self.entries.get_mut(index) else {
            return Ok(());
        };
        let is_new = snapshot.is_none();

        match draft.validate() {
            Ok(def) => {
                debug!(index, label = %def.label, "committed field");
                self.entries[index] = FieldEntry::Committed(def);
                Ok(())
            }
            Err(err) => {
                warn!(index, %err, "rejected field commit");
                if is_new {
                    self.entries.remove(index);
                }
                Err(err)
            }
        }
    }

    /// Abandon the edit at `index`.
    ///
    /// A never-committed field is deleted; an existing field is restored
    /// from its snapshot, discarding the draft.
    pub fn cancel(&mut self, index: usize) {
        let Some(FieldEntry::Editing { snapshot, .. }) = self.entries.get_mut(index) else {
            return;
        };
        match snapshot.take() {
            Some(def) => self.entries[index] = FieldEntry::Committed(def),
            None => {
                self.entries.remove(index);
            }
        }
    }

    /// The edit/save toggle: a committed entry opens for editing, a mid-edit
    /// entry commits, surfacing commit's failure behavior.
    pub fn toggle(&mut self, index: usize) -> Result<(), ValidationError> {
        match self.entries.get(index) {
            Some(FieldEntry::Committed(_)) => {
                self.begin_edit(index);
                Ok(())
            }
            Some(FieldEntry::Editing { .. }) => self.commit(index),
            None => Ok(()),
        }
    }
}
