//! Note filtering and category counting.
//!
//! # Responsibility
//! - Apply the two-stage category + search filter over a note sequence.
//! - Derive per-category note counts, including the synthetic `"all"`.
//!
//! # Invariants
//! - The category stage fully resolves before the search stage runs.
//! - A query that is empty after trimming disables the search stage
//!   entirely; it is never treated as "match nothing".
//! - Relative note order is preserved (stable filter, no re-sorting).

use crate::model::category::{Category, CategoryId, ALL_CATEGORY_ID};
use crate::model::note::Note;
use std::collections::BTreeMap;

/// Normalizes a raw search query for matching.
///
/// Returns `None` when the query is empty after trimming, which disables
/// the search stage.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Filters notes by active category, then by search query.
///
/// Stage 1 keeps every note for [`ALL_CATEGORY_ID`], otherwise notes whose
/// `category_id` equals the active category. Stage 2 keeps notes whose
/// lowercased title or content contains the normalized query as a
/// substring. Both stages preserve source order.
pub fn filter_notes(notes: &[Note], active_category_id: &str, query: &str) -> Vec<Note> {
    let category_matches: Vec<&Note> = if active_category_id == ALL_CATEGORY_ID {
        notes.iter().collect()
    } else {
        notes
            .iter()
            .filter(|note| note.category_id.as_deref() == Some(active_category_id))
            .collect()
    };

    match normalize_query(query) {
        None => category_matches.into_iter().cloned().collect(),
        Some(needle) => category_matches
            .into_iter()
            .filter(|note| note_matches(note, &needle))
            .cloned()
            .collect(),
    }
}

/// Derives note counts for every category.
///
/// [`ALL_CATEGORY_ID`] maps to the total note count; every other category
/// maps to the number of notes carrying its id. Categories with no matching
/// notes are present with count `0`, never omitted.
pub fn compute_category_counts(
    notes: &[Note],
    categories: &[Category],
) -> BTreeMap<CategoryId, usize> {
    let mut counts: BTreeMap<CategoryId, usize> = categories
        .iter()
        .map(|category| {
            let count = if category.is_all() { notes.len() } else { 0 };
            (category.id.clone(), count)
        })
        .collect();

    for note in notes {
        if let Some(category_id) = note.category_id.as_ref() {
            if let Some(count) = counts.get_mut(category_id) {
                *count += 1;
            }
        }
    }

    counts
}

fn note_matches(note: &Note, needle: &str) -> bool {
    note.title.to_lowercase().contains(needle) || note.content.to_lowercase().contains(needle)
}
