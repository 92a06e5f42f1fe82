//! Intents emitted by the palette and the sinks that receive them.

use crate::model::record::RecordKind;
use serde::{Deserialize, Serialize};

/// Hint telling the target page which entity to bring into focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusHint {
    pub kind: RecordKind,
    /// Id inside the owning store, e.g. `3` for `project-3`.
    pub entity_id: String,
    /// Palette record id that produced the hint.
    pub record_id: String,
}

/// What the shell should do after a confirmed selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaletteIntent {
    Navigate {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        focus: Option<FocusHint>,
    },
    Action {
        action_id: String,
    },
}

impl PaletteIntent {
    /// Forwards this intent to the matching sink method.
    pub fn dispatch<S: IntentSink + ?Sized>(&self, sink: &mut S) {
        match self {
            Self::Navigate { path, focus } => sink.navigate(path, focus.as_ref()),
            Self::Action { action_id } => sink.run_action(action_id),
        }
    }
}

/// Output side of the palette: router plus action handler.
pub trait IntentSink {
    fn navigate(&mut self, path: &str, focus: Option<&FocusHint>);
    fn run_action(&mut self, action_id: &str);
}

/// Recording sink; keeps intents in arrival order.
impl IntentSink for Vec<PaletteIntent> {
    fn navigate(&mut self, path: &str, focus: Option<&FocusHint>) {
        self.push(PaletteIntent::Navigate {
            path: path.to_string(),
            focus: focus.cloned(),
        });
    }

    fn run_action(&mut self, action_id: &str) {
        self.push(PaletteIntent::Action {
            action_id: action_id.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{FocusHint, PaletteIntent};
    use crate::model::record::RecordKind;
    use serde_json::json;

    #[test]
    fn navigate_without_focus_omits_field() {
        let intent = PaletteIntent::Navigate {
            path: "/projects".to_string(),
            focus: None,
        };
        assert_eq!(
            serde_json::to_value(&intent).unwrap(),
            json!({"type": "navigate", "path": "/projects"})
        );
    }

    #[test]
    fn focus_hint_serializes_kind_in_snake_case() {
        let intent = PaletteIntent::Navigate {
            path: "/ideas".to_string(),
            focus: Some(FocusHint {
                kind: RecordKind::Note,
                entity_id: "2".to_string(),
                record_id: "note-2".to_string(),
            }),
        };
        let value = serde_json::to_value(&intent).unwrap();
        assert_eq!(value["focus"]["kind"], "note");
        assert_eq!(value["focus"]["entity_id"], "2");
    }

    #[test]
    fn dispatch_routes_to_sink_method() {
        let mut sink: Vec<PaletteIntent> = Vec::new();
        PaletteIntent::Action {
            action_id: "new-note".to_string(),
        }
        .dispatch(&mut sink);
        assert_eq!(
            sink,
            vec![PaletteIntent::Action {
                action_id: "new-note".to_string()
            }]
        );
    }
}
