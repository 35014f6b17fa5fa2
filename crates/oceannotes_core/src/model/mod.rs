//! Domain model for the notes workspace.
//!
//! # Responsibility
//! - Define the canonical note and category records shared by the store,
//!   query engine, persistence and export layers.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` that is never reused.
//! - A note's `category_id` is `None` or names an existing real category;
//!   the synthetic `"all"` id is never a real membership.

pub mod category;
pub mod note;
