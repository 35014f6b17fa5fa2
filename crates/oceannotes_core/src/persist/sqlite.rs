//! SQLite implementation of the notes backend.
//!
//! # Responsibility
//! - Persist categories and notes over a migrated connection.
//! - Decode rows back into domain records, rejecting invalid state.
//!
//! # Invariants
//! - `load_initial` returns notes ordered `updated_at DESC, id ASC`.
//! - Tags are persisted as a JSON array column.
//! - The synthetic `"all"` category is never written.

use crate::model::category::{Category, ALL_CATEGORY_ID};
use crate::model::note::{Note, NoteId};
use crate::persist::{NotesBackend, PersistError, PersistResult};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

/// SQLite-backed notes storage.
pub struct SqliteNotesBackend {
    conn: Connection,
}

impl SqliteNotesBackend {
    /// Constructs a backend from a migrated/ready connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Inserts or replaces one real category. Used for seeding.
    pub fn save_category(&self, category: &Category) -> PersistResult<()> {
        if category.is_all() {
            return Err(PersistError::InvalidData(format!(
                "refusing to persist synthetic category `{ALL_CATEGORY_ID}`"
            )));
        }

        self.conn.execute(
            "INSERT INTO categories (id, name, color)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (id) DO UPDATE SET name = excluded.name, color = excluded.color;",
            params![
                category.id.as_str(),
                category.name.as_str(),
                category.color.as_deref(),
            ],
        )?;
        Ok(())
    }
}

impl NotesBackend for SqliteNotesBackend {
    fn load_initial(&self) -> PersistResult<(Vec<Category>, Vec<Note>)> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, color FROM categories ORDER BY name COLLATE NOCASE ASC;")?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(Category {
                id: row.get("id")?,
                name: row.get("name")?,
                color: row.get("color")?,
                count: 0,
            });
        }

        let mut stmt = self.conn.prepare(
            "SELECT id, title, content, category_id, tags, updated_at
             FROM notes
             ORDER BY updated_at DESC, id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }

        Ok((categories, notes))
    }

    fn save_note(&self, note: &Note) -> PersistResult<()> {
        let tags = serde_json::to_string(&note.tags)
            .map_err(|err| PersistError::InvalidData(format!("unserializable tags: {err}")))?;

        self.conn.execute(
            "INSERT INTO notes (id, title, content, category_id, tags, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT (id) DO UPDATE SET
                title = excluded.title,
                content = excluded.content,
                category_id = excluded.category_id,
                tags = excluded.tags,
                updated_at = excluded.updated_at;",
            params![
                note.id.to_string(),
                note.title.as_str(),
                note.content.as_str(),
                note.category_id.as_deref(),
                tags,
                note.updated_at,
            ],
        )?;
        Ok(())
    }

    fn remove_note(&self, note_id: NoteId) -> PersistResult<()> {
        self.conn
            .execute("DELETE FROM notes WHERE id = ?1;", [note_id.to_string()])?;
        Ok(())
    }
}

fn parse_note_row(row: &Row<'_>) -> PersistResult<Note> {
    let id_text: String = row.get("id")?;
    let id: NoteId = Uuid::parse_str(&id_text).map_err(|_| {
        PersistError::InvalidData(format!("invalid uuid value `{id_text}` in notes.id"))
    })?;

    let tags_text: String = row.get("tags")?;
    let tags: Vec<String> = serde_json::from_str(&tags_text).map_err(|_| {
        PersistError::InvalidData(format!("invalid tags value `{tags_text}` in notes.tags"))
    })?;

    Ok(Note {
        id,
        title: row.get("title")?,
        content: row.get("content")?,
        category_id: row.get("category_id")?,
        tags,
        updated_at: row.get("updated_at")?,
    })
}
