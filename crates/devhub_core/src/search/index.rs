//! In-memory fuzzy index over palette records.
//!
//! # Responsibility
//! - Prepare record fields once per record-set change.
//! - Rank records against a query and group them by kind.
//! - Produce the fixed default view for blank queries.
//!
//! # Invariants
//! - Output is deterministic for identical `(query, records)` input.
//! - Groups follow `RecordKind::GROUP_ORDER`; empty groups are dropped.
//! - Within a group, items are sorted by score then build order.
//! - Duplicate ids: the last occurrence wins and keeps its own position.

use crate::config::PaletteConfig;
use crate::model::record::{MatchedField, RecordKind, SearchableRecord};
use crate::search::scorer::{PreparedField, QueryScorer, NO_MATCH};
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Default-view group titles.
pub const DEFAULT_NAVIGATION_TITLE: &str = "Navigation";
pub const DEFAULT_ACTIONS_TITLE: &str = "Quick Actions";
pub const DEFAULT_RECENT_PROJECTS_TITLE: &str = "Recent Projects";

/// One ranked hit for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMatch {
    pub record: SearchableRecord,
    /// Lower is better; `0.0` is an exact field match.
    pub score: f64,
    /// Field that produced `score`.
    pub field: MatchedField,
}

/// Records of one kind, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultGroup {
    pub title: String,
    pub kind: RecordKind,
    pub items: Vec<SearchableRecord>,
}

/// Query result grouped for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub groups: Vec<ResultGroup>,
}

impl SearchResults {
    /// Total number of items across all groups.
    pub fn flattened_len(&self) -> usize {
        self.groups.iter().map(|group| group.items.len()).sum()
    }

    /// Resolves a flattened (group-concatenated) position.
    pub fn item_at(&self, index: usize) -> Option<&SearchableRecord> {
        self.flattened().nth(index)
    }

    /// Iterates items in display order.
    pub fn flattened(&self) -> impl Iterator<Item = &SearchableRecord> {
        self.groups.iter().flat_map(|group| group.items.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[derive(Debug, Clone)]
struct IndexedRecord {
    record: SearchableRecord,
    fields: Vec<(MatchedField, PreparedField)>,
}

/// Searchable snapshot of one record set.
#[derive(Debug, Clone)]
pub struct FuzzyIndex {
    entries: Vec<IndexedRecord>,
    revision: u64,
}

impl Default for FuzzyIndex {
    fn default() -> Self {
        Self::build(Vec::new())
    }
}

impl FuzzyIndex {
    /// Builds an index from `records`.
    ///
    /// Unknown kinds are dropped with a warning. Duplicate ids keep the last
    /// occurrence.
    pub fn build(records: impl IntoIterator<Item = SearchableRecord>) -> Self {
        let mut slots: Vec<Option<SearchableRecord>> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut unknown = 0usize;
        let mut duplicates = 0usize;

        for record in records {
            if !record.kind.is_known() {
                unknown += 1;
                warn!(
                    "event=index_build module=search status=warn reason=unknown_kind record_id={}",
                    record.id
                );
                continue;
            }
            if let Some(previous) = positions.insert(record.id.clone(), slots.len()) {
                duplicates += 1;
                warn!(
                    "event=index_build module=search status=warn reason=duplicate_id record_id={}",
                    record.id
                );
                slots[previous] = None;
            }
            slots.push(Some(record));
        }

        let entries = slots
            .into_iter()
            .flatten()
            .map(IndexedRecord::new)
            .collect::<Vec<_>>();
        let revision = NEXT_REVISION.fetch_add(1, Ordering::Relaxed);
        debug!(
            "event=index_build module=search status=ok revision={} records={} unknown={} duplicates={}",
            revision,
            entries.len(),
            unknown,
            duplicates
        );

        Self { entries, revision }
    }

    /// Identity of this build, unique per process.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indexed records in build order.
    pub fn records(&self) -> impl Iterator<Item = &SearchableRecord> {
        self.entries.iter().map(|entry| &entry.record)
    }

    /// Scores every record and returns matches under the threshold.
    ///
    /// Sorted by score, then build order. Blank queries return nothing.
    pub fn matches(&self, query: &str, threshold: f64) -> Vec<ScoredMatch> {
        let Some(mut scorer) = QueryScorer::new(query) else {
            return Vec::new();
        };

        let mut scored = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                let (field, score) = entry.best_score(&mut scorer)?;
                (score <= threshold).then_some((position, field, score))
            })
            .collect::<Vec<_>>();
        scored.sort_by(|a, b| a.2.total_cmp(&b.2).then(a.0.cmp(&b.0)));

        scored
            .into_iter()
            .map(|(position, field, score)| ScoredMatch {
                record: self.entries[position].record.clone(),
                score,
                field,
            })
            .collect()
    }

    /// Runs one palette query.
    ///
    /// Blank queries return the default view; anything else is ranked and
    /// grouped by kind.
    pub fn search(&self, query: &str, config: &PaletteConfig) -> SearchResults {
        if self.entries.is_empty() {
            return SearchResults::default();
        }
        if query.trim().is_empty() {
            return self.default_view(config.recent_projects);
        }

        let matches = self.matches(query, config.threshold);
        let mut groups = Vec::new();
        for kind in RecordKind::GROUP_ORDER {
            let mut items = matches
                .iter()
                .filter(|hit| hit.record.kind == kind)
                .map(|hit| hit.record.clone())
                .collect::<Vec<_>>();
            if let Some(limit) = config.group_limit {
                items.truncate(limit);
            }
            if !items.is_empty() {
                groups.push(ResultGroup {
                    title: kind.group_title().to_string(),
                    kind,
                    items,
                });
            }
        }
        SearchResults { groups }
    }

    /// Fixed view shown before the user types.
    pub fn default_view(&self, recent_projects: usize) -> SearchResults {
        let of_kind = |kind: RecordKind| {
            self.records()
                .filter(move |record| record.kind == kind)
                .cloned()
        };

        let candidates = [
            (
                DEFAULT_NAVIGATION_TITLE,
                RecordKind::Navigation,
                of_kind(RecordKind::Navigation).collect::<Vec<_>>(),
            ),
            (
                DEFAULT_ACTIONS_TITLE,
                RecordKind::Action,
                of_kind(RecordKind::Action).collect(),
            ),
            (
                DEFAULT_RECENT_PROJECTS_TITLE,
                RecordKind::Project,
                of_kind(RecordKind::Project).take(recent_projects).collect(),
            ),
        ];

        let groups = candidates
            .into_iter()
            .filter(|(_, _, items)| !items.is_empty())
            .map(|(title, kind, items)| ResultGroup {
                title: title.to_string(),
                kind,
                items,
            })
            .collect();
        SearchResults { groups }
    }
}

impl IndexedRecord {
    fn new(record: SearchableRecord) -> Self {
        let mut fields = Vec::with_capacity(2 + record.keywords.len());
        fields.push((MatchedField::Title, PreparedField::new(&record.title)));
        if let Some(subtitle) = record.subtitle.as_deref() {
            fields.push((MatchedField::Subtitle, PreparedField::new(subtitle)));
        }
        for (position, keyword) in record.keywords.iter().enumerate() {
            fields.push((MatchedField::Keyword(position), PreparedField::new(keyword)));
        }
        fields.retain(|(_, field)| !field.is_empty());
        Self { record, fields }
    }

    /// Lowest score across fields; first field wins ties.
    fn best_score(&self, scorer: &mut QueryScorer) -> Option<(MatchedField, f64)> {
        let mut best: Option<(MatchedField, f64)> = None;
        for (field, prepared) in &self.fields {
            let score = scorer.score(prepared);
            if score >= NO_MATCH {
                continue;
            }
            if best.map_or(true, |(_, current)| score < current) {
                best = Some((*field, score));
            }
        }
        best
    }
}
