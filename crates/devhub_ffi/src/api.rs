//! Sync UI-facing API over one palette session.
//!
//! # Responsibility
//! - Hold the process-wide palette session and its record snapshot.
//! - Flatten core types into plain envelopes a UI shell can consume.
//!
//! # Invariants
//! - Exported functions never panic; failures come back as messages.
//! - Every palette call returns the view after the call.

use devhub_core::catalog::builder::DashboardData;
use devhub_core::demo;
use devhub_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    reorder, KeyOutcome, KeyStroke, PaletteConfig, PaletteController, PaletteIntent,
};
use log::warn;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard};

static SESSION: Lazy<Mutex<PaletteController>> = Lazy::new(|| {
    Mutex::new(PaletteController::new(
        demo::dashboard().build_index(),
        PaletteConfig::default(),
    ))
});

/// Health check for binding smoke tests.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never panics; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never panics; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Starts core logging.
///
/// # Arguments
/// - `level`: `trace|debug|info|warn|error`.
/// - `log_dir`: absolute directory for rolling log files.
///
/// # FFI contract
/// - Sync call; may create the log directory.
/// - Repeating the call with the same `level` and `log_dir` is a no-op.
/// - A different level or directory after the first success returns an error.
/// - Never panics; returns an empty string on success and a message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteItemView {
    pub id: String,
    /// Badge label (`Page`, `Action`, `Project`, ...).
    pub label: String,
    pub title: String,
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteGroupView {
    pub title: String,
    pub items: Vec<PaletteItemView>,
}

/// Palette state plus grouped results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteView {
    pub is_open: bool,
    pub query: String,
    pub active_index: u32,
    pub groups: Vec<PaletteGroupView>,
}

/// Flat intent envelope; `kind` is `navigate` or `action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteIntentView {
    pub kind: String,
    pub path: Option<String>,
    pub action_id: Option<String>,
    pub focus_kind: Option<String>,
    pub focus_entity_id: Option<String>,
}

/// Response to confirm, select and key calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteResponse {
    /// Input was consumed by the palette.
    pub handled: bool,
    /// Palette just opened; move focus to the search field.
    pub focus_input: bool,
    pub intent: Option<PaletteIntentView>,
    pub view: PaletteView,
    /// Empty on success; diagnostic text otherwise.
    pub message: String,
}

/// Rebuilds the session from a JSON dashboard snapshot.
///
/// # FFI contract
/// - Sync call; parses and indexes the whole snapshot in place.
/// - The previous snapshot stays active when parsing fails.
/// - The session keeps its query; results refresh and the highlight is
///   clamped to the new list.
/// - Never panics; returns an empty string on success and a message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn palette_load_dashboard(json: String) -> String {
    match serde_json::from_str::<DashboardData>(&json) {
        Ok(data) => {
            lock_session().replace_index(data.build_index());
            String::new()
        }
        Err(err) => {
            warn!("event=palette_load module=ffi status=error reason=invalid_json");
            format!("palette_load_dashboard failed: {err}")
        }
    }
}

/// Current palette state and grouped results.
///
/// # FFI contract
/// - Sync call, non-blocking; does not change the session.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn palette_view() -> PaletteView {
    view_of(&lock_session())
}

/// Opens the palette with an empty query and the first row highlighted.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Resets query and highlight even when already open.
/// - Never panics; returns the view after the call.
#[flutter_rust_bridge::frb(sync)]
pub fn palette_open() -> PaletteView {
    let mut session = lock_session();
    let _ = session.open();
    view_of(&session)
}

/// Closes the palette without emitting an intent.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - No-op while closed.
/// - Never panics; returns the view after the call.
#[flutter_rust_bridge::frb(sync)]
pub fn palette_close() -> PaletteView {
    let mut session = lock_session();
    session.close();
    view_of(&session)
}

/// Replaces the query and resets the highlight to the first row.
///
/// # FFI contract
/// - Sync call; ranks the whole index on the calling thread.
/// - Never panics; returns the view after the call.
#[flutter_rust_bridge::frb(sync)]
pub fn palette_set_query(query: String) -> PaletteView {
    let mut session = lock_session();
    session.set_query(query);
    view_of(&session)
}

/// Moves the highlight by `delta` rows.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Clamps to the result list; no-op when there are no results.
/// - Never panics; returns the view after the call.
#[flutter_rust_bridge::frb(sync)]
pub fn palette_move_selection(delta: i32) -> PaletteView {
    let mut session = lock_session();
    session.move_selection(delta as isize);
    view_of(&session)
}

/// Highlights the row under the pointer.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Out-of-range indexes leave the highlight unchanged.
/// - Never panics; returns the view after the call.
#[flutter_rust_bridge::frb(sync)]
pub fn palette_hover(index: u32) -> PaletteView {
    let mut session = lock_session();
    session.hover(index as usize);
    view_of(&session)
}

/// Confirms the highlighted row.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Emits at most one intent and closes the palette when it does.
/// - With no results the palette stays open and `message` explains why.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn palette_confirm() -> PaletteResponse {
    let mut session = lock_session();
    let intent = session.confirm_selection();
    confirmed(&session, intent)
}

/// Highlights and confirms the clicked row.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Out-of-range indexes emit nothing and keep the palette open.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn palette_select(index: u32) -> PaletteResponse {
    let mut session = lock_session();
    let intent = session.select_at(index as usize);
    confirmed(&session, intent)
}

/// Feeds one key such as `ArrowDown`, `Enter`, `Escape` or `cmd+k`.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Unknown key names come back with `handled == false` and a message.
/// - `focus_input` is set only on the call that opens the palette.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn palette_key(key: String) -> PaletteResponse {
    key_on(&mut lock_session(), &key)
}

/// Moves `from_key` into the slot of `to_key`.
///
/// # FFI contract
/// - Sync call, pure; does not touch the palette session.
/// - Unknown or equal keys return `items` unchanged.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn reorder_keys(items: Vec<String>, from_key: String, to_key: String) -> Vec<String> {
    reorder(&items, from_key.as_str(), to_key.as_str())
}

fn lock_session() -> MutexGuard<'static, PaletteController> {
    SESSION
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn key_on(session: &mut PaletteController, key: &str) -> PaletteResponse {
    let stroke = match key.parse::<KeyStroke>() {
        Ok(stroke) => stroke,
        Err(err) => {
            return PaletteResponse {
                handled: false,
                focus_input: false,
                intent: None,
                view: view_of(session),
                message: err.to_string(),
            };
        }
    };

    let (handled, focus_input, intent) = match session.handle_key(&stroke) {
        KeyOutcome::Ignored => (false, false, None),
        KeyOutcome::Handled => (true, false, None),
        KeyOutcome::Opened(_) => (true, true, None),
        KeyOutcome::Confirmed(intent) => (true, false, Some(intent_view(&intent))),
    };
    PaletteResponse {
        handled,
        focus_input,
        intent,
        view: view_of(session),
        message: String::new(),
    }
}

fn confirmed(session: &PaletteController, intent: Option<PaletteIntent>) -> PaletteResponse {
    let message = if intent.is_some() {
        String::new()
    } else {
        "nothing to confirm".to_string()
    };
    PaletteResponse {
        handled: intent.is_some(),
        focus_input: false,
        intent: intent.as_ref().map(intent_view),
        view: view_of(session),
        message,
    }
}

fn view_of(session: &PaletteController) -> PaletteView {
    let state = session.state();
    let groups = session
        .results()
        .groups
        .iter()
        .map(|group| PaletteGroupView {
            title: group.title.clone(),
            items: group
                .items
                .iter()
                .map(|record| PaletteItemView {
                    id: record.id.clone(),
                    label: record.kind.label().to_string(),
                    title: record.title.clone(),
                    subtitle: record.subtitle.clone(),
                })
                .collect(),
        })
        .collect();
    PaletteView {
        is_open: state.is_open,
        query: state.query.clone(),
        active_index: u32::try_from(state.active_index).unwrap_or(u32::MAX),
        groups,
    }
}

fn intent_view(intent: &PaletteIntent) -> PaletteIntentView {
    match intent {
        PaletteIntent::Navigate { path, focus } => PaletteIntentView {
            kind: "navigate".to_string(),
            path: Some(path.clone()),
            action_id: None,
            focus_kind: focus
                .as_ref()
                .map(|hint| hint.kind.label().to_ascii_lowercase()),
            focus_entity_id: focus.as_ref().map(|hint| hint.entity_id.clone()),
        },
        PaletteIntent::Action { action_id } => PaletteIntentView {
            kind: "action".to_string(),
            path: None,
            action_id: Some(action_id.clone()),
            focus_kind: None,
            focus_entity_id: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{confirmed, core_version, init_logging, key_on, ping, reorder_keys, view_of};
    use devhub_core::{demo, PaletteConfig, PaletteController};

    fn session() -> PaletteController {
        PaletteController::new(demo::dashboard().build_index(), PaletteConfig::default())
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_reports_bad_arguments() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "/tmp/devhub".to_string()).is_empty());
    }

    #[test]
    fn chord_opens_and_reports_focus() {
        let mut palette = session();
        let response = key_on(&mut palette, "ctrl+k");
        assert!(response.handled);
        assert!(response.focus_input);
        assert!(response.view.is_open);
        let titles = response
            .view
            .groups
            .iter()
            .map(|group| group.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Navigation", "Quick Actions", "Recent Projects"]);
    }

    #[test]
    fn enter_on_document_yields_focus_intent() {
        let mut palette = session();
        let _ = palette.open();
        palette.set_query("privacy policy template");
        let response = key_on(&mut palette, "Enter");
        let intent = response.intent.expect("document should confirm");
        assert_eq!(intent.kind, "navigate");
        assert_eq!(intent.path.as_deref(), Some("/documents"));
        assert_eq!(intent.focus_kind.as_deref(), Some("document"));
        assert_eq!(intent.focus_entity_id.as_deref(), Some("6"));
        assert!(!response.view.is_open);
    }

    #[test]
    fn bad_key_name_returns_message() {
        let mut palette = session();
        let response = key_on(&mut palette, "hyper+x");
        assert!(!response.handled);
        assert!(!response.message.is_empty());
        assert_eq!(response.view, view_of(&palette));
    }

    #[test]
    fn reorder_keys_moves_item() {
        let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(
            reorder_keys(items.clone(), "a".to_string(), "b".to_string()),
            vec!["b", "a", "c"]
        );
        assert_eq!(reorder_keys(items.clone(), "a".to_string(), "x".to_string()), items);
    }

    #[test]
    fn confirm_without_results_keeps_palette_open() {
        let mut palette = session();
        let _ = palette.open();
        palette.set_query("zzzzqqqq");
        let intent = palette.confirm_selection();
        let response = confirmed(&palette, intent);
        assert!(!response.handled);
        assert!(response.intent.is_none());
        assert_eq!(response.message, "nothing to confirm");
        assert!(response.view.is_open);
        assert!(response.view.groups.is_empty());
    }

    #[test]
    fn reorder_keys_with_equal_keys_is_unchanged() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(reorder_keys(items.clone(), "b".to_string(), "b".to_string()), items);
    }
}
