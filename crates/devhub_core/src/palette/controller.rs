//! Palette session state machine.
//!
//! # Responsibility
//! - Own open state, query text and the active (highlighted) row.
//! - Re-query the index on input and memoize the last result.
//! - Translate keyboard input and confirmations into intents.
//!
//! # Invariants
//! - `active_index < results().flattened_len()` whenever results exist,
//!   otherwise `active_index == 0`.
//! - Results are recomputed only when the query text or index revision
//!   changes.
//! - Confirming with no results leaves the palette untouched.

use crate::config::PaletteConfig;
use crate::model::record::{RecordKind, RecordPayload, SearchableRecord};
use crate::palette::intent::{FocusHint, IntentSink, PaletteIntent};
use crate::palette::keys::{Key, KeyStroke};
use crate::search::index::{FuzzyIndex, SearchResults};
use log::{debug, info, warn};
use serde::Serialize;

/// Observable palette state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaletteState {
    pub query: String,
    pub active_index: usize,
    pub is_open: bool,
}

/// Returned by `open`; the caller should move keyboard focus to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct FocusRequest;

/// Result of feeding one key stroke to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Key was not meant for the palette.
    Ignored,
    /// Key changed palette state.
    Handled,
    /// Palette opened; focus the search input.
    Opened(FocusRequest),
    /// Selection confirmed; the palette is closed.
    Confirmed(PaletteIntent),
}

#[derive(Debug, Clone)]
struct CachedResults {
    query: String,
    revision: u64,
    results: SearchResults,
}

pub struct PaletteController {
    config: PaletteConfig,
    index: FuzzyIndex,
    state: PaletteState,
    cache: CachedResults,
}

impl PaletteController {
    pub fn new(index: FuzzyIndex, config: PaletteConfig) -> Self {
        let results = index.search("", &config);
        let cache = CachedResults {
            query: String::new(),
            revision: index.revision(),
            results,
        };
        Self {
            config,
            index,
            state: PaletteState::default(),
            cache,
        }
    }

    pub fn state(&self) -> &PaletteState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    pub fn index(&self) -> &FuzzyIndex {
        &self.index
    }

    /// Results for the current query.
    pub fn results(&self) -> &SearchResults {
        &self.cache.results
    }

    /// Record under the highlight, if any.
    pub fn active_record(&self) -> Option<&SearchableRecord> {
        self.cache.results.item_at(self.state.active_index)
    }

    /// Opens the palette with an empty query.
    pub fn open(&mut self) -> FocusRequest {
        self.state.is_open = true;
        self.state.query.clear();
        self.state.active_index = 0;
        self.refresh();
        FocusRequest
    }

    /// Closes the palette. Query and highlight are left as they were.
    pub fn close(&mut self) {
        self.state.is_open = false;
    }

    /// Opens when closed, closes when open.
    pub fn toggle(&mut self) -> Option<FocusRequest> {
        if self.state.is_open {
            self.close();
            None
        } else {
            Some(self.open())
        }
    }

    /// Replaces the query text and resets the highlight to the first row.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.state.active_index = 0;
        self.refresh();
    }

    /// Moves the highlight by `delta`, clamped to the result range.
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.cache.results.flattened_len();
        if count == 0 {
            return;
        }
        let max = (count - 1) as isize;
        let current = self.state.active_index as isize;
        self.state.active_index = current.saturating_add(delta).clamp(0, max) as usize;
    }

    /// Pointer hover. Returns `false` when `index` is out of range.
    pub fn hover(&mut self, index: usize) -> bool {
        if index >= self.cache.results.flattened_len() {
            return false;
        }
        self.state.active_index = index;
        true
    }

    /// Pointer click on row `index`.
    pub fn select_at(&mut self, index: usize) -> Option<PaletteIntent> {
        if !self.hover(index) {
            return None;
        }
        self.confirm_selection()
    }

    /// Resolves the highlighted record into an intent and closes.
    ///
    /// Returns `None` without changing state when the palette is closed or
    /// there are no results.
    pub fn confirm_selection(&mut self) -> Option<PaletteIntent> {
        if !self.state.is_open {
            return None;
        }
        let record = self.active_record()?.clone();
        let intent = intent_for(&record);
        match &intent {
            Some(_) => info!(
                "event=palette_confirm module=palette status=ok record_id={} kind={:?}",
                record.id, record.kind
            ),
            None => warn!(
                "event=palette_confirm module=palette status=warn reason=payload_mismatch record_id={} kind={:?}",
                record.id, record.kind
            ),
        }
        self.close();
        intent
    }

    /// Confirms and forwards the intent to `sink`. Returns whether one was sent.
    pub fn confirm_into<S: IntentSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        match self.confirm_selection() {
            Some(intent) => {
                intent.dispatch(sink);
                true
            }
            None => false,
        }
    }

    /// Swaps in a rebuilt index and re-runs the current query.
    pub fn replace_index(&mut self, index: FuzzyIndex) {
        self.index = index;
        self.refresh();
        let count = self.cache.results.flattened_len();
        self.state.active_index = self.state.active_index.min(count.saturating_sub(1));
    }

    /// Feeds one key stroke.
    ///
    /// The activation chord toggles in any state; navigation keys only act
    /// while the palette is open.
    pub fn handle_key(&mut self, stroke: &KeyStroke) -> KeyOutcome {
        if self.config.activation.matches(stroke) {
            return match self.toggle() {
                Some(focus) => KeyOutcome::Opened(focus),
                None => KeyOutcome::Handled,
            };
        }
        if !self.state.is_open {
            return KeyOutcome::Ignored;
        }

        match stroke.key {
            Key::ArrowDown => {
                self.move_selection(1);
                KeyOutcome::Handled
            }
            Key::ArrowUp => {
                self.move_selection(-1);
                KeyOutcome::Handled
            }
            Key::Enter => match self.confirm_selection() {
                Some(intent) => KeyOutcome::Confirmed(intent),
                None => KeyOutcome::Handled,
            },
            Key::Escape => {
                self.close();
                KeyOutcome::Handled
            }
            Key::Char(_) => KeyOutcome::Ignored,
        }
    }

    fn refresh(&mut self) {
        let revision = self.index.revision();
        if self.cache.revision == revision && self.cache.query == self.state.query {
            return;
        }
        let results = self.index.search(&self.state.query, &self.config);
        debug!(
            "event=palette_query module=palette status=ok revision={} query_len={} results={}",
            revision,
            self.state.query.chars().count(),
            results.flattened_len()
        );
        self.cache = CachedResults {
            query: self.state.query.clone(),
            revision,
            results,
        };
    }
}

/// Maps a record to the intent its selection produces.
///
/// `None` when the payload does not fit the record kind.
pub fn intent_for(record: &SearchableRecord) -> Option<PaletteIntent> {
    match (record.kind, &record.payload) {
        (RecordKind::Navigation, RecordPayload::Route { path }) => Some(PaletteIntent::Navigate {
            path: path.clone(),
            focus: None,
        }),
        (RecordKind::Action, RecordPayload::Action { action_id }) => Some(PaletteIntent::Action {
            action_id: action_id.clone(),
        }),
        (kind, RecordPayload::Entity { entity_id }) => {
            let path = kind.page_path()?;
            Some(PaletteIntent::Navigate {
                path: path.to_string(),
                focus: Some(FocusHint {
                    kind,
                    entity_id: entity_id.clone(),
                    record_id: record.id.clone(),
                }),
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{intent_for, KeyOutcome, PaletteController};
    use crate::config::PaletteConfig;
    use crate::model::record::{RecordKind, SearchableRecord};
    use crate::palette::intent::PaletteIntent;
    use crate::palette::keys::{Key, KeyStroke, Modifiers};
    use crate::search::index::FuzzyIndex;

    fn controller() -> PaletteController {
        let records = vec![
            SearchableRecord::navigation("nav-projects", "Projects", "/projects"),
            SearchableRecord::action("action-new-note", "Create New Note", "new-note"),
            SearchableRecord::entity("project-1", RecordKind::Project, "Alpha", "1"),
            SearchableRecord::entity("note-7", RecordKind::Note, "Alpha notes", "7"),
        ];
        PaletteController::new(FuzzyIndex::build(records), PaletteConfig::default())
    }

    fn ctrl_k() -> KeyStroke {
        KeyStroke::with_modifiers(
            Key::Char('k'),
            Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        )
    }

    #[test]
    fn open_resets_query_and_highlight() {
        let mut palette = controller();
        let _ = palette.open();
        palette.set_query("alpha");
        palette.move_selection(1);
        palette.close();
        assert_eq!(palette.state().query, "alpha");

        let _ = palette.open();
        assert!(palette.is_open());
        assert_eq!(palette.state().query, "");
        assert_eq!(palette.state().active_index, 0);
        assert_eq!(palette.results().flattened_len(), 3);
    }

    #[test]
    fn entity_confirm_targets_kind_page_with_focus() {
        let mut palette = controller();
        let _ = palette.open();
        palette.set_query("alpha notes");
        let intent = palette.confirm_selection().expect("note should match");
        match intent {
            PaletteIntent::Navigate { path, focus } => {
                assert_eq!(path, "/ideas");
                let focus = focus.expect("entity confirm should carry focus");
                assert_eq!(focus.entity_id, "7");
                assert_eq!(focus.record_id, "note-7");
            }
            other => panic!("unexpected intent {other:?}"),
        }
        assert!(!palette.is_open());
    }

    #[test]
    fn confirm_with_no_results_keeps_palette_open() {
        let mut palette = controller();
        let _ = palette.open();
        palette.set_query("zzzzqqqq");
        assert!(palette.results().is_empty());
        assert_eq!(palette.confirm_selection(), None);
        assert!(palette.is_open());
    }

    #[test]
    fn keys_are_ignored_while_closed_except_chord() {
        let mut palette = controller();
        assert_eq!(
            palette.handle_key(&KeyStroke::plain(Key::ArrowDown)),
            KeyOutcome::Ignored
        );
        assert!(matches!(palette.handle_key(&ctrl_k()), KeyOutcome::Opened(_)));
        assert_eq!(palette.handle_key(&ctrl_k()), KeyOutcome::Handled);
        assert!(!palette.is_open());
    }

    #[test]
    fn enter_confirms_action() {
        let mut palette = controller();
        let _ = palette.open();
        palette.handle_key(&KeyStroke::plain(Key::ArrowDown));
        let outcome = palette.handle_key(&KeyStroke::plain(Key::Enter));
        assert_eq!(
            outcome,
            KeyOutcome::Confirmed(PaletteIntent::Action {
                action_id: "new-note".to_string()
            })
        );
    }

    #[test]
    fn hover_out_of_range_is_rejected() {
        let mut palette = controller();
        let _ = palette.open();
        assert!(!palette.hover(10));
        assert!(palette.hover(2));
        assert_eq!(palette.state().active_index, 2);
        assert_eq!(palette.select_at(99), None);
        assert!(palette.is_open());
    }

    #[test]
    fn replace_index_clamps_highlight() {
        let mut palette = controller();
        let _ = palette.open();
        palette.move_selection(5);
        assert_eq!(palette.state().active_index, 2);

        let smaller = FuzzyIndex::build(vec![SearchableRecord::navigation(
            "nav-home", "Dashboard", "/",
        )]);
        palette.replace_index(smaller);
        assert_eq!(palette.state().active_index, 0);
        assert_eq!(palette.results().flattened_len(), 1);
    }

    #[test]
    fn mismatched_payload_yields_no_intent() {
        let mut record = SearchableRecord::navigation("nav-x", "X", "/x");
        record.kind = RecordKind::Action;
        assert_eq!(intent_for(&record), None);
    }
}
