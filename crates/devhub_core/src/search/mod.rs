//! Fuzzy search over command palette records.
//!
//! # Responsibility
//! - Score queries against record fields with typo tolerance.
//! - Keep ranking and grouping inside core so every shell shows the same
//!   results.

pub mod index;
pub mod scorer;
