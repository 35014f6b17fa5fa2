//! Workspace state engine.
//!
//! # Responsibility
//! - Hold notes, categories and session state (active category, active
//!   note, search query) for one user session.
//! - Provide the mutation operations and the read-only snapshot accessor.
//!
//! # Invariants
//! - `active_note_id` is `None` or present in `filtered_notes` after every
//!   public operation; the fix-up step runs inside the same operation, so
//!   callers never observe a dangling selection.
//! - Category counts match actual membership after every mutation.
//! - Unknown category/note references are rejected with no state change;
//!   operations targeting a missing active note are successful no-ops.

use crate::model::category::{Category, CategoryId, ALL_CATEGORY_ID};
use crate::model::note::{Note, NoteId, NotePatch};
use crate::persist::{NotesBackend, PersistError};
use crate::query::filter::{compute_category_counts, filter_notes};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

/// Error for workspace operations that target invalid references.
///
/// Every variant leaves the workspace unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    /// Operation named a category id that does not exist.
    UnknownCategory(CategoryId),
    /// Operation named a note id that is not in the current filtered list.
    UnknownNote(NoteId),
    /// Attempt to assign a note to the synthetic `"all"` pseudo-category.
    ReservedCategory,
}

impl Display for WorkspaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCategory(id) => write!(f, "unknown category: `{id}`"),
            Self::UnknownNote(id) => write!(f, "note not in filtered list: {id}"),
            Self::ReservedCategory => {
                write!(f, "`{ALL_CATEGORY_ID}` is synthetic and cannot own notes")
            }
        }
    }
}

impl Error for WorkspaceError {}

/// Owned, immutable snapshot of the full workspace state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSnapshot {
    pub notes: Vec<Note>,
    pub categories: Vec<Category>,
    pub active_category_id: CategoryId,
    pub active_note_id: Option<NoteId>,
    pub search_query: String,
    pub filtered_notes: Vec<Note>,
}

/// Single-session note/category store.
///
/// All mutation goes through the operations below; each ends with one
/// internal refresh that recomputes the filtered list, fixes up the active
/// selection and recomputes category counts.
pub struct Workspace {
    notes: Vec<Note>,
    categories: Vec<Category>,
    active_category_id: CategoryId,
    active_note_id: Option<NoteId>,
    search_query: String,
    filtered_notes: Vec<Note>,
    backend: Option<Box<dyn NotesBackend>>,
}

impl Workspace {
    /// Seeds a workspace from initial categories and notes.
    ///
    /// The synthetic `"all"` category is prepended when absent. Seed notes
    /// referencing a category that does not exist are normalized to
    /// uncategorized with a warning, keeping the referential invariant
    /// without failing initialization.
    pub fn initialize(categories: Vec<Category>, mut notes: Vec<Note>) -> Self {
        let mut categories = categories;
        if !categories.iter().any(Category::is_all) {
            categories.insert(0, Category::all_notes());
        }

        for note in &mut notes {
            let dangling = note
                .category_id
                .as_deref()
                .is_some_and(|id| id == ALL_CATEGORY_ID || !categories.iter().any(|c| c.id == id));
            if dangling {
                warn!(
                    "event=seed_normalized module=store status=ok note={} dropped_category={}",
                    note.id,
                    note.category_id.as_deref().unwrap_or_default()
                );
                note.category_id = None;
            }
        }

        let active_note_id = notes.first().map(|note| note.id);
        let mut workspace = Self {
            notes,
            categories,
            active_category_id: ALL_CATEGORY_ID.to_string(),
            active_note_id,
            search_query: String::new(),
            filtered_notes: Vec::new(),
            backend: None,
        };
        workspace.refresh_derived();
        info!(
            "event=workspace_init module=store status=ok notes={} categories={}",
            workspace.notes.len(),
            workspace.categories.len()
        );
        workspace
    }

    /// Loads initial state from a persistence backend and attaches it.
    ///
    /// After this, mutations notify the backend fire-and-forget: a failed
    /// write is logged and never rolls back the in-memory change.
    pub fn open<B: NotesBackend + 'static>(backend: B) -> Result<Self, PersistError> {
        let (categories, notes) = backend.load_initial()?;
        let mut workspace = Self::initialize(categories, notes);
        workspace.backend = Some(Box::new(backend));
        Ok(workspace)
    }

    /// Attaches a persistence backend to an already-seeded workspace.
    pub fn with_backend<B: NotesBackend + 'static>(mut self, backend: B) -> Self {
        self.backend = Some(Box::new(backend));
        self
    }

    /// Returns an owned snapshot of the full state. No side effects.
    pub fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            notes: self.notes.clone(),
            categories: self.categories.clone(),
            active_category_id: self.active_category_id.clone(),
            active_note_id: self.active_note_id,
            search_query: self.search_query.clone(),
            filtered_notes: self.filtered_notes.clone(),
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn filtered_notes(&self) -> &[Note] {
        &self.filtered_notes
    }

    pub fn active_category_id(&self) -> &str {
        &self.active_category_id
    }

    pub fn active_note_id(&self) -> Option<NoteId> {
        self.active_note_id
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Returns the currently active note, if any.
    pub fn active_note(&self) -> Option<&Note> {
        let id = self.active_note_id?;
        self.notes.iter().find(|note| note.id == id)
    }

    /// Selects the browsing category and re-filters with the current query.
    ///
    /// An unknown id is rejected with no state change; it is never treated
    /// as `"all"`.
    pub fn select_category(&mut self, category_id: &str) -> WorkspaceResult<()> {
        if !self.categories.iter().any(|c| c.id == category_id) {
            return Err(WorkspaceError::UnknownCategory(category_id.to_string()));
        }
        self.active_category_id = category_id.to_string();
        self.refresh_derived();
        Ok(())
    }

    /// Selects a note from the current filtered list. Does not re-filter.
    pub fn select_note(&mut self, note_id: NoteId) -> WorkspaceResult<()> {
        if !self.filtered_notes.iter().any(|note| note.id == note_id) {
            return Err(WorkspaceError::UnknownNote(note_id));
        }
        self.active_note_id = Some(note_id);
        Ok(())
    }

    /// Replaces the search query and re-filters the current category.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.refresh_derived();
    }

    /// Creates an empty note and prepends it (newest first).
    ///
    /// The note inherits the active category, or stays uncategorized when
    /// browsing `"all"`. The new note is preferred as the active selection;
    /// the fix-up still applies, so an active search that excludes the
    /// empty note falls back to a valid selection instead.
    pub fn create_note(&mut self) -> NoteId {
        let category_id = if self.active_category_id == ALL_CATEGORY_ID {
            None
        } else {
            Some(self.active_category_id.clone())
        };
        let note = Note::new(category_id);
        let note_id = note.id;
        self.notify_saved(&note);
        self.notes.insert(0, note);
        self.active_note_id = Some(note_id);
        self.refresh_derived();
        info!("event=note_created module=store status=ok note={note_id}");
        note_id
    }

    /// Merges a partial update into the active note.
    ///
    /// A patch naming an unknown or reserved category is rejected whole.
    /// Without an active note this is a successful no-op.
    pub fn update_note(&mut self, patch: NotePatch) -> WorkspaceResult<()> {
        let Some(note_id) = self.active_note_id else {
            return Ok(());
        };
        if let Some(Some(target)) = patch.category_id.as_ref() {
            self.ensure_assignable(target)?;
        }

        if let Some(note) = self.notes.iter_mut().find(|note| note.id == note_id) {
            note.apply(patch);
            let saved = note.clone();
            self.notify_saved(&saved);
        }
        self.refresh_derived();
        Ok(())
    }

    /// Deletes the active note. No-op without an active note.
    pub fn delete_note(&mut self) {
        let Some(note_id) = self.active_note_id else {
            return;
        };
        self.notes.retain(|note| note.id != note_id);
        self.notify_removed(note_id);
        self.refresh_derived();
        info!("event=note_deleted module=store status=ok note={note_id}");
    }

    /// Moves the active note into a category (`None` uncategorizes).
    ///
    /// No-op without an active note. Unknown targets are rejected, as is
    /// the synthetic `"all"` pseudo-category.
    pub fn move_note_to_category(&mut self, target: Option<CategoryId>) -> WorkspaceResult<()> {
        let Some(note_id) = self.active_note_id else {
            return Ok(());
        };
        if let Some(target) = target.as_ref() {
            self.ensure_assignable(target)?;
        }

        if let Some(note) = self.notes.iter_mut().find(|note| note.id == note_id) {
            note.category_id = target;
            note.touch();
            let saved = note.clone();
            self.notify_saved(&saved);
        }
        self.refresh_derived();
        Ok(())
    }

    fn ensure_assignable(&self, category_id: &str) -> WorkspaceResult<()> {
        if category_id == ALL_CATEGORY_ID {
            return Err(WorkspaceError::ReservedCategory);
        }
        if !self.categories.iter().any(|c| c.id == category_id) {
            return Err(WorkspaceError::UnknownCategory(category_id.to_string()));
        }
        Ok(())
    }

    /// Recomputes every derived view and fixes up the active selection.
    ///
    /// Runs as the last step of every mutation so intermediate states are
    /// never observable from outside an operation.
    fn refresh_derived(&mut self) {
        self.filtered_notes = filter_notes(
            &self.notes,
            &self.active_category_id,
            &self.search_query,
        );

        let still_visible = self
            .active_note_id
            .is_some_and(|id| self.filtered_notes.iter().any(|note| note.id == id));
        if !still_visible {
            self.active_note_id = self.filtered_notes.first().map(|note| note.id);
        }

        let counts = compute_category_counts(&self.notes, &self.categories);
        for category in &mut self.categories {
            category.count = counts.get(&category.id).copied().unwrap_or(0);
        }
    }

    fn notify_saved(&self, note: &Note) {
        if let Some(backend) = self.backend.as_deref() {
            if let Err(err) = backend.save_note(note) {
                warn!(
                    "event=persist_note module=store status=error note={} error={err}",
                    note.id
                );
            }
        }
    }

    fn notify_removed(&self, note_id: NoteId) {
        if let Some(backend) = self.backend.as_deref() {
            if let Err(err) = backend.remove_note(note_id) {
                warn!(
                    "event=persist_remove module=store status=error note={note_id} error={err}"
                );
            }
        }
    }
}
