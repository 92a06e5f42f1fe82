//! Record construction from palette sources.
//!
//! # Invariants
//! - Records come out in fixed kind order (navigation, action, project,
//!   client, note, document) and source order inside each kind.
//! - Ids are prefixed per kind so entity ids never collide across stores.

use crate::catalog::entries::{default_actions, default_navigation, ActionEntry, NavigationEntry};
use crate::model::entity::{Client, Document, EntitySummary, Note, Project, SummarySource};
use crate::model::record::{RecordKind, SearchableRecord};
use crate::search::index::FuzzyIndex;
use serde::{Deserialize, Serialize};

/// Borrowed inputs for one index build.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSources<'a> {
    pub navigation: &'a [NavigationEntry],
    pub actions: &'a [ActionEntry],
    pub projects: &'a [EntitySummary],
    pub clients: &'a [EntitySummary],
    pub notes: &'a [EntitySummary],
    pub documents: &'a [EntitySummary],
}

/// Record id prefix for entity kinds.
pub fn id_prefix(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Navigation => "nav",
        RecordKind::Action => "action",
        RecordKind::Project => "project",
        RecordKind::Client => "client",
        RecordKind::Note => "note",
        RecordKind::Document => "doc",
        RecordKind::Unknown => "unknown",
    }
}

pub fn navigation_record(entry: &NavigationEntry) -> SearchableRecord {
    let slug = entry.label.trim().to_lowercase().replace(' ', "-");
    SearchableRecord::navigation(format!("nav-{slug}"), entry.label.as_str(), entry.path.as_str())
        .with_keywords(entry.keywords.iter().cloned())
}

pub fn action_record(entry: &ActionEntry) -> SearchableRecord {
    SearchableRecord::action(
        format!("action-{}", entry.action_id),
        entry.label.as_str(),
        entry.action_id.as_str(),
    )
    .with_keywords(entry.keywords.iter().cloned())
}

pub fn entity_record(kind: RecordKind, summary: &EntitySummary) -> SearchableRecord {
    let record = SearchableRecord::entity(
        format!("{}-{}", id_prefix(kind), summary.id),
        kind,
        summary.display_name.as_str(),
        summary.id.as_str(),
    )
    .with_keywords(summary.tags.iter().cloned());
    match summary.subtitle.as_deref() {
        Some(subtitle) => record.with_subtitle(subtitle),
        None => record,
    }
}

/// Flattens all sources into records in display-kind order.
pub fn build_records(sources: &CatalogSources<'_>) -> Vec<SearchableRecord> {
    let entity_groups = [
        (RecordKind::Project, sources.projects),
        (RecordKind::Client, sources.clients),
        (RecordKind::Note, sources.notes),
        (RecordKind::Document, sources.documents),
    ];

    let mut records = Vec::new();
    records.extend(sources.navigation.iter().map(navigation_record));
    records.extend(sources.actions.iter().map(action_record));
    for (kind, summaries) in entity_groups {
        records.extend(summaries.iter().map(|summary| entity_record(kind, summary)));
    }
    records
}

/// Projects a store list to catalog summaries.
pub fn summaries<T: SummarySource>(items: &[T]) -> Vec<EntitySummary> {
    items.iter().map(SummarySource::summary).collect()
}

/// Owned snapshot of every dashboard store the palette searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardData {
    pub projects: Vec<Project>,
    pub clients: Vec<Client>,
    pub notes: Vec<Note>,
    pub documents: Vec<Document>,
}

impl DashboardData {
    /// Builds records with the built-in navigation and action entries.
    pub fn records(&self) -> Vec<SearchableRecord> {
        self.records_with(&default_navigation(), &default_actions())
    }

    /// Builds records with caller-provided navigation and action entries.
    pub fn records_with(
        &self,
        navigation: &[NavigationEntry],
        actions: &[ActionEntry],
    ) -> Vec<SearchableRecord> {
        let projects = summaries(&self.projects);
        let clients = summaries(&self.clients);
        let notes = summaries(&self.notes);
        let documents = summaries(&self.documents);
        build_records(&CatalogSources {
            navigation,
            actions,
            projects: &projects,
            clients: &clients,
            notes: &notes,
            documents: &documents,
        })
    }

    /// Builds a fresh index; call again after any store list changes.
    pub fn build_index(&self) -> FuzzyIndex {
        FuzzyIndex::build(self.records())
    }
}

#[cfg(test)]
mod tests {
    use super::{build_records, entity_record, CatalogSources};
    use crate::catalog::entries::{default_actions, default_navigation};
    use crate::model::entity::EntitySummary;
    use crate::model::record::{RecordKind, RecordPayload};

    fn summary(id: &str, name: &str) -> EntitySummary {
        EntitySummary {
            id: id.to_string(),
            display_name: name.to_string(),
            subtitle: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn records_follow_kind_order_and_prefixes() {
        let navigation = default_navigation();
        let actions = default_actions();
        let projects = vec![summary("1", "Alpha")];
        let documents = vec![summary("1", "Contract")];
        let records = build_records(&CatalogSources {
            navigation: &navigation,
            actions: &actions,
            projects: &projects,
            clients: &[],
            notes: &[],
            documents: &documents,
        });

        assert_eq!(records.len(), navigation.len() + actions.len() + 2);
        assert_eq!(records[0].id, "nav-dashboard");
        assert_eq!(records[navigation.len()].id, "action-new-project");
        let tail = &records[records.len() - 2..];
        assert_eq!(tail[0].id, "project-1");
        assert_eq!(tail[1].id, "doc-1");
    }

    #[test]
    fn entity_record_carries_entity_payload() {
        let mut source = summary("4", "Enterprise Corp");
        source.subtitle = Some("Lisa Chen".to_string());
        let record = entity_record(RecordKind::Client, &source);
        assert_eq!(record.id, "client-4");
        assert_eq!(record.subtitle.as_deref(), Some("Lisa Chen"));
        assert_eq!(
            record.payload,
            RecordPayload::Entity {
                entity_id: "4".to_string()
            }
        );
    }
}
