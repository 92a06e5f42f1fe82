//! Drag gesture state machine for sortable lists.
//!
//! # Responsibility
//! - Turn pointer/keyboard input into `Idle -> Dragging -> Idle` transitions.
//! - Run the reorder engine on a valid drop and report cancels otherwise.
//!
//! # Invariants
//! - A pointer press only starts dragging once travel exceeds
//!   `activation_distance`; shorter presses stay clicks.
//! - Every drop or cancel returns the gesture to `Idle`.
//! - A second drag on the same gesture is rejected while one is armed or
//!   active.

use super::engine::{move_index, plan_move, MovePlan};
use super::store::{ListStore, ListStoreResult};
use super::Keyed;
use crate::config::DragConfig;
use log::{debug, info, warn};
use std::borrow::Borrow;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Pointer position in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Gesture state. `Armed` is a pressed-but-not-yet-moved sub-state of idle.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState<K> {
    Idle,
    Armed { key: K, origin: Point },
    Dragging { key: K },
}

/// Why a gesture ended without a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Released over empty space.
    NoTarget,
    /// Released over the dragged item itself.
    SameTarget,
    /// Source or target key is not in the list anymore.
    UnknownKey,
    /// Escape or another explicit cancel signal.
    Explicit,
    /// Nothing was being dragged (plain click or stray event).
    NotDragging,
}

/// Result of a drop without a store.
#[derive(Debug, Clone, PartialEq)]
pub enum DragEnd<T> {
    Committed { plan: MovePlan, items: Vec<T> },
    Cancelled(CancelReason),
}

impl<T> DragEnd<T> {
    pub fn outcome(&self) -> DragOutcome {
        match self {
            Self::Committed { plan, .. } => DragOutcome::Committed(*plan),
            Self::Cancelled(reason) => DragOutcome::Cancelled(*reason),
        }
    }
}

/// Result of a drop written through a [`ListStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Committed(MovePlan),
    Cancelled(CancelReason),
}

/// Gesture misuse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragError<K> {
    /// Another drag is already armed or active on this list.
    AlreadyActive { active: K },
}

impl<K: Debug> Display for DragError<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyActive { active } => {
                write!(f, "a drag is already in progress for item {active:?}")
            }
        }
    }
}

impl<K: Debug> Error for DragError<K> {}

/// One sortable list's drag gesture.
#[derive(Debug, Clone)]
pub struct DragGesture<K> {
    config: DragConfig,
    state: DragState<K>,
}

impl<K: Clone + Debug> Default for DragGesture<K> {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}

impl<K: Clone + Debug> DragGesture<K> {
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> &DragState<K> {
        &self.state
    }

    /// Key of the item being dragged; `None` while idle or merely armed.
    pub fn active_key(&self) -> Option<&K> {
        match &self.state {
            DragState::Dragging { key } => Some(key),
            DragState::Idle | DragState::Armed { .. } => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer pressed on `key`; arms the gesture.
    pub fn press(&mut self, key: K, at: Point) -> Result<(), DragError<K>> {
        self.ensure_idle()?;
        self.state = DragState::Armed { key, origin: at };
        Ok(())
    }

    /// Pointer moved; starts dragging once travel exceeds the threshold.
    ///
    /// Returns `true` only on the move that starts the drag.
    pub fn pointer_move(&mut self, at: Point) -> bool {
        let DragState::Armed { key, origin } = &self.state else {
            return false;
        };
        if origin.distance_to(at) <= self.config.activation_distance {
            return false;
        }
        debug!("event=drag_start module=reorder status=ok source=pointer key={key:?}");
        self.state = DragState::Dragging { key: key.clone() };
        true
    }

    /// Keyboard pick-up; starts dragging without a movement threshold.
    pub fn keyboard_activate(&mut self, key: K) -> Result<(), DragError<K>> {
        self.ensure_idle()?;
        debug!("event=drag_start module=reorder status=ok source=keyboard key={key:?}");
        self.state = DragState::Dragging { key };
        Ok(())
    }

    /// Explicit cancel (Escape). Safe in any state.
    pub fn cancel(&mut self) -> CancelReason {
        let reason = if self.is_dragging() {
            CancelReason::Explicit
        } else {
            CancelReason::NotDragging
        };
        self.finish_cancel(reason)
    }

    /// Active item lookup for an overlay preview.
    pub fn active_item<'a, T, Q, F>(&self, items: &'a [T], key_of: F) -> Option<&'a T>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
        F: Fn(&T) -> &Q,
    {
        let active: &Q = self.active_key()?.borrow();
        items.iter().find(|item| key_of(item) == active)
    }

    /// Drops over `over` and computes the new order of `items`.
    pub fn drop_on<T, Q, F>(&mut self, over: Option<&Q>, items: &[T], key_of: F) -> DragEnd<T>
    where
        T: Clone,
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
        F: Fn(&T) -> &Q,
    {
        let source = match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging { key } => key,
            DragState::Idle | DragState::Armed { .. } => {
                return DragEnd::Cancelled(self.finish_cancel(CancelReason::NotDragging));
            }
        };
        let Some(target) = over else {
            return DragEnd::Cancelled(self.finish_cancel(CancelReason::NoTarget));
        };
        let source_key: &Q = source.borrow();
        if source_key == target {
            return DragEnd::Cancelled(self.finish_cancel(CancelReason::SameTarget));
        }
        let Some(plan) = plan_move(items, source_key, target, &key_of) else {
            return DragEnd::Cancelled(self.finish_cancel(CancelReason::UnknownKey));
        };

        let reordered = move_index(items, plan.from_index, plan.to_index);
        info!(
            "event=reorder_commit module=reorder status=ok from_index={} to_index={} len={}",
            plan.from_index,
            plan.to_index,
            reordered.len()
        );
        DragEnd::Committed {
            plan,
            items: reordered,
        }
    }

    /// [`Self::drop_on`] for items that know their own key.
    pub fn drop_keyed<T>(&mut self, over: Option<&T::Key>, items: &[T]) -> DragEnd<T>
    where
        T: Keyed + Clone,
        K: Borrow<T::Key>,
    {
        self.drop_on(over, items, T::key)
    }

    /// Drops over `over` and writes a committed order to `store`.
    ///
    /// # Errors
    /// - Returns the store's error when the write is refused; the gesture is
    ///   idle either way.
    pub fn drop_into<T, Q, F, S>(
        &mut self,
        over: Option<&Q>,
        store: &mut S,
        key_of: F,
    ) -> ListStoreResult<DragOutcome>
    where
        T: Clone,
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
        F: Fn(&T) -> &Q,
        S: ListStore<T>,
    {
        match self.drop_on(over, store.items(), key_of) {
            DragEnd::Committed { plan, items } => {
                if let Err(err) = store.replace_order(items) {
                    warn!(
                        "event=drag_commit module=reorder status=error to_index={} reason={err}",
                        plan.to_index
                    );
                    return Err(err);
                }
                Ok(DragOutcome::Committed(plan))
            }
            DragEnd::Cancelled(reason) => Ok(DragOutcome::Cancelled(reason)),
        }
    }

    fn ensure_idle(&self) -> Result<(), DragError<K>> {
        match &self.state {
            DragState::Idle => Ok(()),
            DragState::Armed { key, .. } | DragState::Dragging { key } => {
                Err(DragError::AlreadyActive {
                    active: key.clone(),
                })
            }
        }
    }

    fn finish_cancel(&mut self, reason: CancelReason) -> CancelReason {
        self.state = DragState::Idle;
        debug!("event=drag_cancel module=reorder status=ok reason={reason:?}");
        reason
    }
}

#[cfg(test)]
mod tests {
    use super::{CancelReason, DragEnd, DragError, DragGesture, DragOutcome, DragState, Point};
    use crate::config::DragConfig;
    use crate::reorder::{ListStore, MemoryListStore, MovePlan};

    fn letters() -> Vec<String> {
        ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect()
    }

    fn dragging(key: &str) -> DragGesture<String> {
        let mut gesture = DragGesture::default();
        gesture.keyboard_activate(key.to_string()).unwrap();
        gesture
    }

    #[test]
    fn short_pointer_travel_stays_armed() {
        let mut gesture: DragGesture<String> = DragGesture::new(DragConfig::default());
        gesture.press("a".to_string(), Point::new(0.0, 0.0)).unwrap();
        assert!(!gesture.pointer_move(Point::new(3.0, 4.0)));
        assert_eq!(gesture.active_key(), None);
        assert!(gesture.pointer_move(Point::new(6.0, 8.0)));
        assert_eq!(gesture.active_key().map(String::as_str), Some("a"));
    }

    #[test]
    fn release_while_armed_is_a_click() {
        let mut gesture: DragGesture<String> = DragGesture::default();
        gesture.press("a".to_string(), Point::new(0.0, 0.0)).unwrap();
        let end = gesture.drop_keyed(Some("b"), &letters());
        assert_eq!(end, DragEnd::Cancelled(CancelReason::NotDragging));
        assert_eq!(gesture.state(), &DragState::Idle);
    }

    #[test]
    fn drop_on_distinct_target_commits() {
        let mut gesture = dragging("a");
        let end = gesture.drop_keyed(Some("c"), &letters());
        match end {
            DragEnd::Committed { plan, items } => {
                assert_eq!(
                    plan,
                    MovePlan {
                        from_index: 0,
                        to_index: 2
                    }
                );
                assert_eq!(items, vec!["b", "c", "a", "d"]);
            }
            other => panic!("expected commit, got {other:?}"),
        }
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn drop_without_target_or_on_self_cancels() {
        let mut gesture = dragging("a");
        assert_eq!(
            gesture.drop_keyed(None, &letters()),
            DragEnd::Cancelled(CancelReason::NoTarget)
        );

        let mut gesture = dragging("a");
        assert_eq!(
            gesture.drop_keyed(Some("a"), &letters()),
            DragEnd::Cancelled(CancelReason::SameTarget)
        );

        let mut gesture = dragging("zz");
        assert_eq!(
            gesture.drop_keyed(Some("a"), &letters()),
            DragEnd::Cancelled(CancelReason::UnknownKey)
        );
    }

    #[test]
    fn escape_cancels_active_drag() {
        let mut gesture = dragging("b");
        assert_eq!(gesture.cancel(), CancelReason::Explicit);
        assert_eq!(gesture.state(), &DragState::Idle);
        assert_eq!(gesture.cancel(), CancelReason::NotDragging);
    }

    #[test]
    fn second_drag_is_rejected() {
        let mut gesture = dragging("a");
        let err = gesture.keyboard_activate("b".to_string()).unwrap_err();
        assert_eq!(
            err,
            DragError::AlreadyActive {
                active: "a".to_string()
            }
        );
        assert!(err.to_string().contains("already in progress"));
        assert_eq!(gesture.active_key().map(String::as_str), Some("a"));
    }

    #[test]
    fn drop_into_writes_store_once() {
        let mut store = MemoryListStore::new(letters());
        let mut gesture = dragging("d");
        let outcome = gesture
            .drop_into(Some("a"), &mut store, |item: &String| item.as_str())
            .unwrap();
        assert_eq!(
            outcome,
            DragOutcome::Committed(MovePlan {
                from_index: 3,
                to_index: 0
            })
        );
        assert_eq!(store.items(), &["d", "a", "b", "c"]);
        assert_eq!(store.writes(), 1);

        let outcome = gesture
            .drop_into(Some("a"), &mut store, |item: &String| item.as_str())
            .unwrap();
        assert_eq!(outcome, DragOutcome::Cancelled(CancelReason::NotDragging));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn overlay_lookup_finds_active_item() {
        let items = letters();
        let gesture = dragging("c");
        let active = gesture.active_item(&items, |item: &String| item.as_str());
        assert_eq!(active.map(String::as_str), Some("c"));
    }
}
