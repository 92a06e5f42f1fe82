//! Palette catalog: which records exist and how they are named.
//!
//! # Responsibility
//! - Provide built-in navigation routes and quick actions.
//! - Map dashboard entities to searchable records.
//!
//! # Invariants
//! - Record ids are unique across kinds by construction (`<prefix>-<id>`).
//! - The catalog never reads ambient state; callers pass every source list.

pub mod builder;
pub mod entries;
