//! Core state engine for the Ocean Notes workspace.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod persist;
pub mod query;
pub mod store;

pub use export::{export_file_name, export_note_json, ExportError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryId, ALL_CATEGORY_ID};
pub use model::note::{Note, NoteId, NotePatch};
pub use persist::{NotesBackend, PersistError, PersistResult, SqliteNotesBackend};
pub use query::filter::{compute_category_counts, filter_notes, normalize_query};
pub use store::workspace::{Workspace, WorkspaceError, WorkspaceResult, WorkspaceSnapshot};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
