//! Data model shared by the search catalog, palette and reorder views.
//!
//! # Responsibility
//! - Define the flat searchable record consumed by the fuzzy index.
//! - Define the dashboard entities that feed the catalog and list views.
//!
//! # Invariants
//! - Records are immutable snapshots taken at index-build time.
//! - Entity ids are stable inside their owning store.

pub mod entity;
pub mod record;
