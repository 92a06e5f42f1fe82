//! Key-based single-element list moves.
//!
//! # Invariants
//! - Input slices are never mutated; every call returns a new `Vec`.
//! - Missing keys or `from == to` leave the order unchanged.
//! - A move shifts the items between source and target by one slot; it is
//!   never a swap.

use super::Keyed;

/// Resolved source and target positions of one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    pub from_index: usize,
    pub to_index: usize,
}

/// Resolves a key-based move into indices.
///
/// Returns `None` when either key is absent or both keys are equal.
pub fn plan_move<T, K, F>(items: &[T], from_key: &K, to_key: &K, key_of: F) -> Option<MovePlan>
where
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    if from_key == to_key {
        return None;
    }
    let from_index = items.iter().position(|item| key_of(item) == from_key)?;
    let to_index = items.iter().position(|item| key_of(item) == to_key)?;
    Some(MovePlan {
        from_index,
        to_index,
    })
}

/// Moves the element at `from_index` to `to_index`.
///
/// Out-of-range indices return an unchanged copy.
pub fn move_index<T: Clone>(items: &[T], from_index: usize, to_index: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if from_index >= moved.len() || to_index >= moved.len() || from_index == to_index {
        return moved;
    }
    let item = moved.remove(from_index);
    moved.insert(to_index, item);
    moved
}

/// Moves the item keyed `from_key` into the slot of the item keyed `to_key`.
pub fn reorder_by<T, K, F>(items: &[T], from_key: &K, to_key: &K, key_of: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    match plan_move(items, from_key, to_key, key_of) {
        Some(plan) => move_index(items, plan.from_index, plan.to_index),
        None => items.to_vec(),
    }
}

/// [`reorder_by`] for items that know their own key.
pub fn reorder<T>(items: &[T], from_key: &T::Key, to_key: &T::Key) -> Vec<T>
where
    T: Keyed + Clone,
{
    reorder_by(items, from_key, to_key, T::key)
}
