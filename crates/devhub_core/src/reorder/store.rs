//! Owning list store contract for committed reorders.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// List store write error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStoreError {
    /// Replacement is not a permutation of the current list.
    LengthMismatch { expected: usize, actual: usize },
    /// Store refused the write for its own reasons.
    Rejected(String),
}

impl Display for ListStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "replacement order has {actual} items, store holds {expected}"
            ),
            Self::Rejected(message) => write!(f, "list store rejected write: {message}"),
        }
    }
}

impl Error for ListStoreError {}

pub type ListStoreResult<T> = Result<T, ListStoreError>;

/// Store that owns one ordered list and accepts whole-list replacements.
pub trait ListStore<T> {
    /// Current order.
    fn items(&self) -> &[T];
    /// Replaces the order in one write.
    fn replace_order(&mut self, items: Vec<T>) -> ListStoreResult<()>;
}

/// In-memory list store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryListStore<T> {
    items: Vec<T>,
    writes: usize,
}

impl<T> MemoryListStore<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, writes: 0 }
    }

    /// Number of accepted `replace_order` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> ListStore<T> for MemoryListStore<T> {
    fn items(&self) -> &[T] {
        &self.items
    }

    fn replace_order(&mut self, items: Vec<T>) -> ListStoreResult<()> {
        if items.len() != self.items.len() {
            return Err(ListStoreError::LengthMismatch {
                expected: self.items.len(),
                actual: items.len(),
            });
        }
        self.items = items;
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ListStore, ListStoreError, MemoryListStore};

    #[test]
    fn replace_rejects_length_change() {
        let mut store = MemoryListStore::new(vec![1, 2, 3]);
        let err = store.replace_order(vec![1, 2]).unwrap_err();
        assert_eq!(
            err,
            ListStoreError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        );
        assert_eq!(store.items(), &[1, 2, 3]);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn replace_counts_writes() {
        let mut store = MemoryListStore::new(vec!["a", "b"]);
        store.replace_order(vec!["b", "a"]).unwrap();
        assert_eq!(store.items(), &["b", "a"]);
        assert_eq!(store.writes(), 1);
    }
}
