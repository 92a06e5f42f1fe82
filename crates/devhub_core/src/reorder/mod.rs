//! Drag-and-drop list reordering.
//!
//! # Responsibility
//! - Compute key-based single-element moves without touching the input.
//! - Track one drag gesture per list and commit or cancel it.
//! - Write committed orders back through the owning list store.
//!
//! # Invariants
//! - Invalid keys degrade to a no-op; reordering never fails on user input.
//! - At most one drag is active per gesture instance.

pub mod drag;
pub mod engine;
pub mod store;

pub use drag::{CancelReason, DragEnd, DragError, DragGesture, DragOutcome, DragState, Point};
pub use engine::{move_index, plan_move, reorder, reorder_by, MovePlan};
pub use store::{ListStore, ListStoreError, ListStoreResult, MemoryListStore};

/// Item with a stable unique key inside its list.
pub trait Keyed {
    type Key: PartialEq + ?Sized;

    fn key(&self) -> &Self::Key;
}

impl Keyed for String {
    type Key = str;

    fn key(&self) -> &str {
        self
    }
}

impl<'a> Keyed for &'a str {
    type Key = str;

    fn key(&self) -> &str {
        self
    }
}
