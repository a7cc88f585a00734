//! Metadata-only relevance ranking

use skillshelf_types::DocumentMetadata;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::config::MatcherConfig;

/// A document that cleared the overlap threshold for some query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    /// Candidate document name
    pub name: String,
    /// Distinct query tokens found in the description
    pub overlap: usize,
}

/// Ranks document metadata against free-text queries
pub struct TriggerMatcher {
    config: MatcherConfig,
}

impl TriggerMatcher {
    /// Create a matcher with the given configuration.
    ///
    /// The threshold is clamped to at least 1; with 0 every document would
    /// match every query.
    pub fn new(mut config: MatcherConfig) -> Self {
        if config.min_token_overlap < 1 {
            warn!("min_token_overlap of 0 would match everything; clamping to 1");
            config.min_token_overlap = 1;
        }
        Self { config }
    }

    /// Rank all documents whose description overlaps the query.
    ///
    /// Ordering is deterministic: overlap descending, then shorter
    /// description first (more specific), then name lexical order. An empty
    /// result means nothing cleared `min_token_overlap`; that is not an
    /// error.
    pub fn rank<'a, I>(&self, query: &str, metadata: I) -> Vec<MatchCandidate>
    where
        I: IntoIterator<Item = &'a DocumentMetadata>,
    {
        let query_tokens: HashSet<String> = tokenize(query).collect();
        if query_tokens.is_empty() {
            return Vec::new();
        }

        // (overlap, description length, name) carries everything the sort
        // needs, so metadata is not consulted twice.
        let mut scored: Vec<(usize, usize, String)> = Vec::new();

        for meta in metadata {
            let description_tokens: HashSet<String> = tokenize(&meta.description).collect();
            let overlap = query_tokens
                .iter()
                .filter(|t| description_tokens.contains(*t))
                .count();

            if overlap >= self.config.min_token_overlap {
                scored.push((overlap, meta.description.len(), meta.name.clone()));
            }
        }

        scored.sort_by(|a, b| {
            b.0.cmp(&a.0)
                .then_with(|| a.1.cmp(&b.1))
                .then_with(|| a.2.cmp(&b.2))
        });

        debug!(
            "Query matched {} candidates (threshold {})",
            scored.len(),
            self.config.min_token_overlap
        );

        scored
            .into_iter()
            .map(|(overlap, _, name)| MatchCandidate { name, overlap })
            .collect()
    }

    /// Candidate names only, ranked
    pub fn rank_names<'a, I>(&self, query: &str, metadata: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a DocumentMetadata>,
    {
        self.rank(query, metadata)
            .into_iter()
            .map(|c| c.name)
            .collect()
    }
}

impl Default for TriggerMatcher {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}

/// Lowercased alphanumeric tokens of a text
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str, description: &str) -> DocumentMetadata {
        DocumentMetadata {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_widgets_query_matches_alpha_only() {
        let docs = vec![meta("alpha", "guide for widgets"), meta("beta", "guide for gadgets")];
        let matcher = TriggerMatcher::default();

        assert_eq!(matcher.rank_names("widgets", &docs), vec!["alpha"]);
        assert!(matcher.rank_names("gizmos", &docs).is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let docs = vec![meta("alpha", "Guide for Widgets")];
        let matcher = TriggerMatcher::default();
        assert_eq!(matcher.rank_names("WIDGETS", &docs), vec!["alpha"]);
    }

    #[test]
    fn test_higher_overlap_ranks_first() {
        let docs = vec![
            meta("general", "working with widgets"),
            meta("specific", "assembling widgets from spare parts"),
        ];
        let matcher = TriggerMatcher::default();
        let ranked = matcher.rank("assembling widgets", &docs);
        assert_eq!(ranked[0].name, "specific");
        assert_eq!(ranked[0].overlap, 2);
        assert_eq!(ranked[1].name, "general");
        assert_eq!(ranked[1].overlap, 1);
    }

    #[test]
    fn test_tie_broken_by_shorter_description() {
        let docs = vec![
            meta("verbose", "a rather long guide that also covers widgets in detail"),
            meta("terse", "widgets"),
        ];
        let matcher = TriggerMatcher::default();
        assert_eq!(matcher.rank_names("widgets", &docs), vec!["terse", "verbose"]);
    }

    #[test]
    fn test_tie_broken_by_name_order() {
        let docs = vec![meta("zeta", "widgets"), meta("alpha", "widgets")];
        let matcher = TriggerMatcher::default();
        assert_eq!(matcher.rank_names("widgets", &docs), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_threshold_filters_weak_matches() {
        let docs = vec![meta("alpha", "guide for widgets")];
        let matcher = TriggerMatcher::new(MatcherConfig {
            min_token_overlap: 2,
        });
        assert!(matcher.rank_names("widgets", &docs).is_empty());
        assert_eq!(matcher.rank_names("guide widgets", &docs), vec!["alpha"]);
    }

    #[test]
    fn test_zero_threshold_does_not_match_everything() {
        let docs = vec![meta("alpha", "guide for widgets"), meta("beta", "guide for gadgets")];
        let matcher = TriggerMatcher::new(MatcherConfig {
            min_token_overlap: 0,
        });
        // An unrelated query must still come back empty.
        assert!(matcher.rank_names("gizmos", &docs).is_empty());
        assert_eq!(matcher.rank_names("widgets", &docs), vec!["alpha"]);
    }

    #[test]
    fn test_empty_query_yields_nothing() {
        let docs = vec![meta("alpha", "guide for widgets")];
        let matcher = TriggerMatcher::default();
        assert!(matcher.rank_names("   ", &docs).is_empty());
    }

    #[test]
    fn test_duplicate_query_tokens_counted_once() {
        let docs = vec![meta("alpha", "guide for widgets")];
        let matcher = TriggerMatcher::new(MatcherConfig {
            min_token_overlap: 2,
        });
        // "widgets widgets" is still a single distinct token.
        assert!(matcher.rank_names("widgets widgets", &docs).is_empty());
    }
}
