//! Persistence collaborator contracts and implementations.
//!
//! # Responsibility
//! - Define the outbound storage interface the workspace notifies after
//!   in-memory mutations.
//! - Isolate SQL details from the store and query layers.
//!
//! # Invariants
//! - The workspace never awaits the backend for correctness: writes are
//!   fire-and-forget and failures never roll back in-memory state.
//! - Backends store real categories only; the synthetic `"all"` id is an
//!   in-memory construct.

use crate::db::DbError;
use crate::model::category::Category;
use crate::model::note::{Note, NoteId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod sqlite;

pub use sqlite::SqliteNotesBackend;

pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence-layer error for storage interaction and row decoding.
#[derive(Debug)]
pub enum PersistError {
    Db(DbError),
    /// Persisted state cannot be decoded into domain records.
    InvalidData(String),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for PersistError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Outbound storage interface for the workspace.
///
/// Implementations are synchronous sinks; the store invokes them after the
/// in-memory state has already been updated.
pub trait NotesBackend {
    /// Loads seed categories and notes for workspace initialization.
    fn load_initial(&self) -> PersistResult<(Vec<Category>, Vec<Note>)>;
    /// Inserts or replaces one note.
    fn save_note(&self, note: &Note) -> PersistResult<()>;
    /// Removes one note; removing an unknown id is not an error.
    fn remove_note(&self, note_id: NoteId) -> PersistResult<()>;
}
