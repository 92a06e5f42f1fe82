//! Command palette session.
//!
//! # Responsibility
//! - Drive open/query/highlight/confirm over a `FuzzyIndex` snapshot.
//! - Emit navigation and action intents for the host shell.
//!
//! # See also
//! - `crate::search::index` for ranking and grouping.

pub mod controller;
pub mod intent;
pub mod keys;

pub use controller::{intent_for, FocusRequest, KeyOutcome, PaletteController, PaletteState};
pub use intent::{FocusHint, IntentSink, PaletteIntent};
pub use keys::{Key, KeyParseError, KeyStroke, Modifiers};
