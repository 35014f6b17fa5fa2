//! Single-note export collaborator.
//!
//! # Responsibility
//! - Serialize one note to download-ready bytes.
//! - Derive a file name from the note title.
//!
//! # Invariants
//! - Pure and stateless: no workspace access, no side effects.

use crate::model::note::Note;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Export-layer error for serialization failures.
#[derive(Debug)]
pub enum ExportError {
    Json(serde_json::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "note serialization failed: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Serializes one note to pretty-printed JSON bytes.
pub fn export_note_json(note: &Note) -> Result<Vec<u8>, ExportError> {
    Ok(serde_json::to_vec_pretty(note)?)
}

/// Returns the download file name for one note.
///
/// Falls back to `note.json` when the title is empty.
pub fn export_file_name(note: &Note) -> String {
    if note.title.is_empty() {
        "note.json".to_string()
    } else {
        format!("{}.json", note.title)
    }
}
