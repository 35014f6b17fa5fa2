//! Derived-view computation for the workspace.
//!
//! # Responsibility
//! - Compute the filtered note list and category counts as pure functions
//!   of their explicit inputs.
//!
//! # Invariants
//! - No hidden state, no side effects: same inputs, same outputs.
//! - Filtering is stable; source order is never disturbed.

pub mod filter;
