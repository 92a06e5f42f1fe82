//! Searchable record model.
//!
//! # Responsibility
//! - Define the flat record shape consumed by the fuzzy index.
//! - Map record kinds to display labels, group titles and page paths.
//!
//! # Invariants
//! - `id` is unique across all kinds combined inside one index build.
//! - A record is an immutable snapshot; the index never mutates it.
//! - `RecordKind::Unknown` never lands in a result group.

use serde::{Deserialize, Serialize};

/// Category of a searchable record.
///
/// Declaration order is the fixed group display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Page route entry.
    Navigation,
    /// Quick action entry (create project, add client, ...).
    Action,
    Project,
    Client,
    Note,
    Document,
    /// Any kind string the core does not recognize.
    #[serde(other)]
    Unknown,
}

impl RecordKind {
    /// Known kinds in fixed group display order.
    pub const GROUP_ORDER: [RecordKind; 6] = [
        RecordKind::Navigation,
        RecordKind::Action,
        RecordKind::Project,
        RecordKind::Client,
        RecordKind::Note,
        RecordKind::Document,
    ];

    /// Short badge label shown next to one result row.
    pub fn label(self) -> &'static str {
        match self {
            Self::Navigation => "Page",
            Self::Action => "Action",
            Self::Project => "Project",
            Self::Client => "Client",
            Self::Note => "Note",
            Self::Document => "Document",
            Self::Unknown => "Unknown",
        }
    }

    /// Group heading used for ranked search results.
    pub fn group_title(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Action => "Actions",
            Self::Project => "Projects",
            Self::Client => "Clients",
            Self::Note => "Notes",
            Self::Document => "Documents",
            Self::Unknown => "Other",
        }
    }

    /// Page that lists entities of this kind.
    ///
    /// Returns `None` for navigation/action records, which carry their own
    /// target, and for unknown kinds.
    pub fn page_path(self) -> Option<&'static str> {
        match self {
            Self::Project => Some("/projects"),
            Self::Client => Some("/clients"),
            Self::Note => Some("/ideas"),
            Self::Document => Some("/documents"),
            Self::Navigation | Self::Action | Self::Unknown => None,
        }
    }

    /// Whether this kind belongs to one of the fixed display groups.
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Opaque reference back to whatever the record was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecordPayload {
    /// Route target of a navigation entry.
    Route { path: String },
    /// Identifier handed to the action sink.
    Action { action_id: String },
    /// Stable id of a domain entity in its owning store.
    Entity { entity_id: String },
}

/// Immutable record snapshot indexed by the command palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableRecord {
    /// Unique across every kind in one index build, e.g. `project-3`.
    pub id: String,
    /// Serialized as `type` to match the dashboard's item shape.
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub payload: RecordPayload,
}

impl SearchableRecord {
    /// Creates a navigation record pointing at `path`.
    pub fn navigation(
        id: impl Into<String>,
        title: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: RecordKind::Navigation,
            title: title.into(),
            subtitle: None,
            keywords: Vec::new(),
            payload: RecordPayload::Route { path: path.into() },
        }
    }

    /// Creates an action record dispatching `action_id`.
    pub fn action(
        id: impl Into<String>,
        title: impl Into<String>,
        action_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: RecordKind::Action,
            title: title.into(),
            subtitle: None,
            keywords: Vec::new(),
            payload: RecordPayload::Action {
                action_id: action_id.into(),
            },
        }
    }

    /// Creates a record for one domain entity.
    pub fn entity(
        id: impl Into<String>,
        kind: RecordKind,
        title: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            subtitle: None,
            keywords: Vec::new(),
            payload: RecordPayload::Entity {
                entity_id: entity_id.into(),
            },
        }
    }

    /// Sets the optional subtitle. Blank values are stored as `None`.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        let subtitle = subtitle.into();
        self.subtitle = if subtitle.trim().is_empty() {
            None
        } else {
            Some(subtitle)
        };
        self
    }

    /// Replaces the keyword list.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Subtitle text, empty when absent.
    pub fn subtitle_text(&self) -> &str {
        self.subtitle.as_deref().unwrap_or("")
    }
}

/// Record field that produced a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "index", rename_all = "snake_case")]
pub enum MatchedField {
    Title,
    Subtitle,
    /// Position inside `SearchableRecord::keywords`.
    Keyword(usize),
}

#[cfg(test)]
mod tests {
    use super::{RecordKind, RecordPayload, SearchableRecord};

    #[test]
    fn unknown_kind_string_deserializes_to_unknown() {
        let record: SearchableRecord = serde_json::from_str(
            r#"{"id":"x-1","type":"invoice","title":"INV-2024-047","payload":{"type":"entity","entity_id":"INV-2024-047"}}"#,
        )
        .expect("record should deserialize");
        assert_eq!(record.kind, RecordKind::Unknown);
        assert!(record.keywords.is_empty());
        assert_eq!(record.subtitle_text(), "");
    }

    #[test]
    fn blank_subtitle_is_dropped() {
        let record = SearchableRecord::navigation("nav-home", "Dashboard", "/").with_subtitle("  ");
        assert_eq!(record.subtitle, None);
        assert_eq!(
            record.payload,
            RecordPayload::Route {
                path: "/".to_string()
            }
        );
    }

    #[test]
    fn entity_kinds_have_page_paths() {
        assert_eq!(RecordKind::Note.page_path(), Some("/ideas"));
        assert_eq!(RecordKind::Navigation.page_path(), None);
        assert!(RecordKind::GROUP_ORDER.iter().all(|kind| kind.is_known()));
    }
}
