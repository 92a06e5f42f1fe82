//! Approximate string scoring for palette queries.
//!
//! # Responsibility
//! - Normalize query and field text (case, whitespace).
//! - Score one prepared query against one prepared field.
//!
//! # Invariants
//! - Scores are in `[0.0, 1.0]`; lower is better and `0.0` is an exact match.
//! - A query sharing no character with a field scores exactly `1.0`.
//! - Scoring is a pure function of its inputs.

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Weight of the unmatched remainder of a field longer than the query.
const COVERAGE_WEIGHT: f64 = 0.1;
/// Added when the query only matches token by token.
const REORDER_PENALTY: f64 = 0.05;
/// Lowest score a scattered subsequence match can reach.
const SUBSEQUENCE_FLOOR: f64 = 0.2;
const SUBSEQUENCE_SPREAD_WEIGHT: f64 = 0.3;
/// Shorter queries are subsequences of too many fields to be useful.
const MIN_SUBSEQUENCE_LEN: usize = 3;
/// Window slack around the pattern length for approximate substring search.
const WINDOW_SLACK: usize = 2;

/// Worst possible score.
pub const NO_MATCH: f64 = 1.0;

/// Lowercases, trims and collapses inner whitespace runs to one space.
pub fn normalize_text(value: &str) -> String {
    let lowered = value.to_lowercase();
    WHITESPACE_RE.replace_all(lowered.trim(), " ").into_owned()
}

/// Query text prepared once per keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    text: String,
    tokens: Vec<String>,
    compact: String,
}

impl PreparedQuery {
    /// Prepares `raw` for scoring. Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let text = normalize_text(raw);
        if text.is_empty() {
            return None;
        }
        let tokens = text.split(' ').map(str::to_string).collect();
        let compact = text.chars().filter(|ch| *ch != ' ').collect();
        Some(Self {
            text,
            tokens,
            compact,
        })
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Field text prepared once per index build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedField {
    text: String,
    len: usize,
}

impl PreparedField {
    pub fn new(raw: &str) -> Self {
        let text = normalize_text(raw);
        let len = text.chars().count();
        Self { text, len }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Scores one query against many fields, reusing matcher buffers.
///
/// The best of three signals wins:
/// - whole-query approximate substring distance over query length;
/// - per-token approximate substring distance (any token order);
/// - in-order subsequence spread, floored above any clean substring hit.
///
/// Both distance signals add a small coverage penalty for the part of the
/// field the query does not cover, so only an exact full-field match
/// scores `0.0`.
pub struct QueryScorer {
    query: PreparedQuery,
    query_len: usize,
    subsequence: Option<Atom>,
    matcher: Matcher,
    haystack: Vec<char>,
    indices: Vec<u32>,
}

impl QueryScorer {
    /// Returns `None` for blank queries.
    pub fn new(raw: &str) -> Option<Self> {
        let query = PreparedQuery::new(raw)?;
        let subsequence = (query.compact.chars().count() >= MIN_SUBSEQUENCE_LEN).then(|| {
            Atom::new(
                &query.compact,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
                false,
            )
        });
        Some(Self {
            query_len: query.len(),
            query,
            subsequence,
            matcher: Matcher::new(Config::DEFAULT),
            haystack: Vec::new(),
            indices: Vec::new(),
        })
    }

    pub fn query(&self) -> &PreparedQuery {
        &self.query
    }

    /// Score in `[0.0, 1.0]`, lower is better.
    pub fn score(&mut self, field: &PreparedField) -> f64 {
        if field.is_empty() {
            return NO_MATCH;
        }
        if self.query.text == field.text {
            return 0.0;
        }

        let coverage = coverage_penalty(self.query_len, field.len);
        let whole = windowed_distance(&self.query.text, &field.text) as f64;
        let mut best = whole / self.query_len as f64 + coverage;

        if self.query.tokens.len() > 1 {
            let mut distance = 0usize;
            let mut total = 0usize;
            for token in &self.query.tokens {
                distance += windowed_distance(token, &field.text);
                total += token.chars().count();
            }
            if total > 0 {
                let tokenwise = distance as f64 / total as f64 + REORDER_PENALTY + coverage;
                best = best.min(tokenwise);
            }
        }

        if let Some(span) = self.subsequence_span(field) {
            let compact_len = self.query.compact.chars().count();
            let spread = span.saturating_sub(compact_len) as f64 / span as f64;
            best = best.min(SUBSEQUENCE_FLOOR + SUBSEQUENCE_SPREAD_WEIGHT * spread);
        }

        best.clamp(0.0, NO_MATCH)
    }

    /// Width of the in-order match of the compact query inside `field`.
    fn subsequence_span(&mut self, field: &PreparedField) -> Option<usize> {
        let atom = self.subsequence.as_ref()?;
        self.indices.clear();
        let haystack = Utf32Str::new(&field.text, &mut self.haystack);
        atom.indices(haystack, &mut self.matcher, &mut self.indices)?;
        let first = *self.indices.iter().min()?;
        let last = *self.indices.iter().max()?;
        Some((last - first) as usize + 1)
    }
}

/// Scores `query` against `field` with a one-off scorer.
pub fn score_field(query: &str, field: &str) -> f64 {
    match QueryScorer::new(query) {
        Some(mut scorer) => scorer.score(&PreparedField::new(field)),
        None => NO_MATCH,
    }
}

fn coverage_penalty(query_len: usize, field_len: usize) -> f64 {
    if field_len <= query_len {
        return 0.0;
    }
    COVERAGE_WEIGHT * (1.0 - query_len as f64 / field_len as f64)
}

/// Smallest Levenshtein distance between `pattern` and a window of `text`.
///
/// Windows span the pattern length plus or minus `WINDOW_SLACK` chars. A
/// text no longer than the pattern is compared whole.
pub fn windowed_distance(pattern: &str, text: &str) -> usize {
    let pattern_len = pattern.chars().count();
    let bounds = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect::<Vec<_>>();
    let text_len = bounds.len() - 1;
    if text_len <= pattern_len {
        return strsim::levenshtein(pattern, text);
    }

    let shortest = pattern_len.saturating_sub(WINDOW_SLACK).max(1);
    let longest = (pattern_len + WINDOW_SLACK).min(text_len);
    let mut best = pattern_len;
    for width in shortest..=longest {
        for start in 0..=(text_len - width) {
            let window = &text[bounds[start]..bounds[start + width]];
            best = best.min(strsim::levenshtein(pattern, window));
            if best == 0 {
                return 0;
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::{normalize_text, score_field, windowed_distance, PreparedQuery, NO_MATCH};

    #[test]
    fn normalize_collapses_whitespace_and_case() {
        assert_eq!(normalize_text("  TechCorp \t  Inc. "), "techcorp inc.");
    }

    #[test]
    fn blank_query_is_not_prepared() {
        assert!(PreparedQuery::new(" \n\t").is_none());
        assert_eq!(score_field("  ", "Dashboard"), NO_MATCH);
    }

    #[test]
    fn windowed_distance_ignores_surrounding_text() {
        assert_eq!(windowed_distance("corp", "techcorp inc."), 0);
        assert_eq!(windowed_distance("techcop", "techcorp inc."), 1);
        assert_eq!(windowed_distance("xyz", "abc"), 3);
        assert_eq!(windowed_distance("abc", ""), 3);
    }

    #[test]
    fn exact_match_scores_zero() {
        assert_eq!(score_field("Dashboard", "dashboard"), 0.0);
    }

    #[test]
    fn typo_stays_under_default_threshold() {
        assert!(score_field("techcop", "TechCorp Inc.") < 0.4);
        assert!(score_field("dashbaord", "Dashboard") < 0.4);
    }

    #[test]
    fn reordered_tokens_match() {
        assert!(score_field("inc techcorp", "TechCorp Inc.") < 0.1);
    }

    #[test]
    fn scattered_subsequence_is_floored() {
        let score = score_field("tci", "TechCorp Inc.");
        assert!(score >= 0.2 && score < NO_MATCH, "{score}");
    }

    #[test]
    fn disjoint_characters_score_worst() {
        assert_eq!(score_field("xyz", "Projects"), NO_MATCH);
        assert_eq!(score_field("qqq www", "Dashboard"), NO_MATCH);
    }

    #[test]
    fn substring_beats_scattered_subsequence() {
        assert!(score_field("corp", "TechCorp Inc.") < score_field("tci", "TechCorp Inc."));
    }
}
