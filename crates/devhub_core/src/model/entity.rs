//! Dashboard domain entities as seen by the palette core.
//!
//! # Responsibility
//! - Mirror the persisted store shapes for projects, clients, notes and
//!   documents (camelCase on the wire).
//! - Project every entity to an [`EntitySummary`] for the search catalog.
//!
//! # Invariants
//! - `id` is stable for the entity lifetime and unique inside its store.
//! - Summaries never drop tags; blank tags are skipped.

use crate::reorder::Keyed;
use serde::{Deserialize, Serialize};

/// Numeric store id used by every dashboard list.
pub type EntityId = u64;

/// Minimal searchable projection of one domain entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySummary {
    pub id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Anything that can be listed in the search catalog.
pub trait SummarySource {
    fn summary(&self) -> EntitySummary;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Client display name, not a client id.
    pub client: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SummarySource for Project {
    /// Keywords are the project tags followed by the client name.
    fn summary(&self) -> EntitySummary {
        let mut tags = non_blank(&self.tags);
        push_non_blank(&mut tags, &self.client);
        EntitySummary {
            id: self.id.to_string(),
            display_name: self.name.clone(),
            subtitle: optional_text(&self.client),
            tags,
        }
    }
}

impl Keyed for Project {
    type Key = EntityId;

    fn key(&self) -> &EntityId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SummarySource for Client {
    fn summary(&self) -> EntitySummary {
        EntitySummary {
            id: self.id.to_string(),
            display_name: self.name.clone(),
            subtitle: optional_text(&self.contact_name),
            tags: non_blank(&self.tags),
        }
    }
}

impl Keyed for Client {
    type Key = EntityId;

    fn key(&self) -> &EntityId {
        &self.id
    }
}

/// Content block kind inside one note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Heading1,
    Heading2,
    Text,
    Checklist,
    List,
    Quote,
    Code,
}

/// One reorderable block of a note body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteBlock {
    /// Unique inside its note only, e.g. `b3`.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub content: String,
    /// Meaningful only for `BlockKind::Checklist`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl NoteBlock {
    pub fn new(id: impl Into<String>, kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            content: content.into(),
            checked: None,
        }
    }

    pub fn checklist(id: impl Into<String>, content: impl Into<String>, checked: bool) -> Self {
        Self {
            checked: Some(checked),
            ..Self::new(id, BlockKind::Checklist, content)
        }
    }
}

impl Keyed for NoteBlock {
    type Key = str;

    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub blocks: Vec<NoteBlock>,
}

impl SummarySource for Note {
    /// Subtitle lists the tags joined by `, `.
    fn summary(&self) -> EntitySummary {
        let tags = non_blank(&self.tags);
        EntitySummary {
            id: self.id.to_string(),
            display_name: self.title.clone(),
            subtitle: optional_text(&tags.join(", ")),
            tags,
        }
    }
}

impl Keyed for Note {
    type Key = EntityId;

    fn key(&self) -> &EntityId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: EntityId,
    pub name: String,
    /// Document category such as `contract`, `proposal` or `nda`.
    #[serde(rename = "type")]
    pub doc_type: String,
    pub client: String,
    #[serde(default)]
    pub status: String,
}

impl SummarySource for Document {
    /// Keywords are the document type followed by the client name.
    fn summary(&self) -> EntitySummary {
        let mut tags = Vec::new();
        push_non_blank(&mut tags, &self.doc_type);
        push_non_blank(&mut tags, &self.client);
        EntitySummary {
            id: self.id.to_string(),
            display_name: self.name.clone(),
            subtitle: optional_text(&self.client),
            tags,
        }
    }
}

impl Keyed for Document {
    type Key = EntityId;

    fn key(&self) -> &EntityId {
        &self.id
    }
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn non_blank(values: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        push_non_blank(&mut out, value);
    }
    out
}

fn push_non_blank(out: &mut Vec<String>, value: &str) {
    if let Some(value) = optional_text(value) {
        out.push(value);
    }
}
