//! Core logic for the DevHub dashboard palette.
//! Fuzzy search, the command palette session and list reordering live here;
//! UI shells drive them through the CLI or the binding crate.

pub mod catalog;
pub mod config;
pub mod demo;
pub mod logging;
pub mod model;
pub mod palette;
pub mod reorder;
pub mod search;

pub use catalog::builder::{build_records, CatalogSources, DashboardData};
pub use catalog::entries::{default_actions, default_navigation, ActionEntry, NavigationEntry};
pub use config::{ActivationChord, ConfigError, ConfigResult, DragConfig, PaletteConfig};
pub use logging::{
    default_log_level, init_logging, logging_status, LoggingError, LoggingResult,
};
pub use model::entity::{Client, Document, EntityId, EntitySummary, Note, Project, SummarySource};
pub use model::record::{MatchedField, RecordKind, RecordPayload, SearchableRecord};
pub use palette::{
    FocusHint, IntentSink, Key, KeyOutcome, KeyStroke, PaletteController, PaletteIntent,
    PaletteState,
};
pub use reorder::{
    move_index, plan_move, reorder, reorder_by, DragEnd, DragGesture, Keyed, ListStore,
    ListStoreError, ListStoreResult, MemoryListStore, MovePlan,
};
pub use search::index::{FuzzyIndex, ResultGroup, ScoredMatch, SearchResults};

/// Health check for shells wiring up the core.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
