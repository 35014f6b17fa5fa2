//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and its partial-update shape.
//! - Provide lifecycle helpers for creation and timestamp bumping.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `updated_at` is bumped on every mutation that changes the note.
//! - `tags` keeps insertion order; relevance order is insertion order.

use crate::model::category::CategoryId;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every note in the workspace.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Canonical note record.
///
/// Content is an opaque string for the engine; no markup interpretation
/// happens anywhere in core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable global ID used for selection, persistence and export.
    pub id: NoteId,
    /// Display title; may be empty (see [`Note::display_title`]).
    pub title: String,
    /// Opaque note body.
    pub content: String,
    /// `None` means uncategorized. Never the synthetic `"all"` id.
    pub category_id: Option<CategoryId>,
    /// Ordered tag labels; empty when absent in external data.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Unix epoch milliseconds. Set on creation and on every mutation.
    pub updated_at: i64,
}

impl Note {
    /// Creates an empty note with a generated stable ID.
    ///
    /// # Invariants
    /// - Title and content start empty, tags start empty.
    /// - `updated_at` is set to the current wall clock.
    pub fn new(category_id: Option<CategoryId>) -> Self {
        Self::with_id(Uuid::new_v4(), category_id)
    }

    /// Creates an empty note with a caller-provided stable ID.
    ///
    /// Used by seeding and persistence paths where identity already exists.
    pub fn with_id(id: NoteId, category_id: Option<CategoryId>) -> Self {
        Self {
            id,
            title: String::new(),
            content: String::new(),
            category_id,
            tags: Vec::new(),
            updated_at: now_epoch_ms(),
        }
    }

    /// Merges a partial update into this note and bumps `updated_at`.
    ///
    /// Absent patch fields leave the current values untouched. Category
    /// validity is the store's concern; this helper applies blindly.
    pub fn apply(&mut self, patch: NotePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        self.touch();
    }

    /// Bumps `updated_at` to the current wall clock.
    pub fn touch(&mut self) {
        self.updated_at = now_epoch_ms();
    }

    /// Returns the title, substituting `"Untitled"` for an empty one.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            self.title.as_str()
        }
    }
}

/// Partial update for one note; absent fields stay unchanged.
///
/// `category_id` is doubly optional: outer `None` leaves membership alone,
/// `Some(None)` uncategorizes, `Some(Some(id))` recategorizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category_id: Option<Option<CategoryId>>,
}

impl NotePatch {
    /// Sets a new title.
    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    /// Sets new content.
    pub fn content(mut self, value: impl Into<String>) -> Self {
        self.content = Some(value.into());
        self
    }

    /// Replaces the full tag list.
    pub fn tags(mut self, values: Vec<String>) -> Self {
        self.tags = Some(values);
        self
    }

    /// Sets category membership (`None` uncategorizes).
    pub fn category(mut self, value: Option<CategoryId>) -> Self {
        self.category_id = Some(value);
        self
    }

    /// Returns whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && self.category_id.is_none()
    }
}

/// Current wall clock in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
