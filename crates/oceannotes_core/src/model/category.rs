//! Category domain model.
//!
//! # Responsibility
//! - Define the category record used for grouping and counting notes.
//! - Reserve the synthetic `"all"` pseudo-category.
//!
//! # Invariants
//! - `id` is unique within a workspace.
//! - `count` is derived by the query engine and never hand-edited.

use serde::{Deserialize, Serialize};

/// Identifier for a category. Human-assigned slugs like `"work"`.
pub type CategoryId = String;

/// Reserved id of the synthetic all-notes pseudo-category.
///
/// It is selectable for browsing but never appears as a real note's
/// `category_id`.
pub const ALL_CATEGORY_ID: &str = "all";

/// Category record with its derived note count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique id; `"all"` is reserved for the synthetic pseudo-category.
    pub id: CategoryId,
    /// Display label.
    pub name: String,
    /// Optional display color, cosmetic only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Derived, non-authoritative note count; recomputed after mutations.
    #[serde(default)]
    pub count: usize,
}

impl Category {
    /// Creates a category without a display color.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
            count: 0,
        }
    }

    /// Creates a category with a display color.
    pub fn with_color(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::new(id, name)
        }
    }

    /// Returns the synthetic all-notes pseudo-category.
    pub fn all_notes() -> Self {
        Self::new(ALL_CATEGORY_ID, "All Notes")
    }

    /// Returns whether this is the synthetic `"all"` pseudo-category.
    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORY_ID
    }
}
