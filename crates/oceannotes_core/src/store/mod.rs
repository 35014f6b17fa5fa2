//! Workspace store and mutation operations.
//!
//! # Responsibility
//! - Own the single source of truth for notes, categories and session
//!   state; route every mutation through one refresh step.
//!
//! # Invariants
//! - Derived views (filtered list, category counts, active selection) are
//!   consistent after every public operation completes.
//! - The store is explicitly constructed and passed by reference; there is
//!   no ambient singleton, so independent sessions coexist.

pub mod workspace;
