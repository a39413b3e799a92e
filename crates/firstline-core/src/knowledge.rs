use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Serialize;

use crate::data;
use crate::error::{FirstLineError, Result};
use crate::matcher::{self, SearchKeys};
use crate::query::NormalizedQuery;
use crate::topic::FirstAidTopic;

pub use crate::matcher::MatchTier;

/// One search result: a borrowed topic plus how it matched.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchHit<'a> {
    #[serde(flatten)]
    pub topic: &'a FirstAidTopic,
    pub tier: MatchTier,
    pub exact: bool,
}

/// The static first-aid knowledge base. Built once, validated once;
/// every lookup afterwards is a pure read.
#[derive(Debug)]
pub struct KnowledgeBase {
    topics: Vec<FirstAidTopic>,
    keys: Vec<SearchKeys>,
}

static BUILTIN: OnceLock<KnowledgeBase> = OnceLock::new();

impl KnowledgeBase {
    pub fn new(topics: Vec<FirstAidTopic>) -> Result<Self> {
        validate_topics(&topics)?;
        let keys = topics.iter().map(SearchKeys::from_topic).collect();
        Ok(Self { topics, keys })
    }

    /// The compiled-in knowledge base, constructed on first use and shared
    /// for the rest of the process.
    pub fn builtin() -> Result<&'static Self> {
        if let Some(kb) = BUILTIN.get() {
            return Ok(kb);
        }
        let kb = Self::new(data::builtin_topics())?;
        Ok(BUILTIN.get_or_init(|| kb))
    }

    #[must_use]
    pub fn topics(&self) -> &[FirstAidTopic] {
        &self.topics
    }

    #[must_use]
    pub fn topic(&self, id: &str) -> Option<&FirstAidTopic> {
        self.topics.iter().find(|topic| topic.id == id)
    }

    /// Tier-matched, exact-first search. An empty query matches every
    /// topic at tier 1, so "no filter" returns the whole knowledge base
    /// in declaration order.
    #[must_use]
    pub fn search(&self, raw_query: &str) -> Vec<&FirstAidTopic> {
        self.search_detailed(raw_query)
            .into_iter()
            .map(|hit| hit.topic)
            .collect()
    }

    /// Like `search`, retaining the matched tier and exact flag per hit.
    ///
    /// Ranking is a stable partition: exact matches (title contains the
    /// full query, or a keyword equals it verbatim) come first, then the
    /// rest; declaration order is preserved inside each partition and no
    /// secondary key is applied.
    #[must_use]
    pub fn search_detailed(&self, raw_query: &str) -> Vec<SearchHit<'_>> {
        let query = NormalizedQuery::parse(raw_query);
        let mut exact_hits = Vec::new();
        let mut other_hits = Vec::new();
        for (topic, keys) in self.topics.iter().zip(&self.keys) {
            let Some(tier) = matcher::match_topic(keys, topic, &query) else {
                continue;
            };
            let exact = matcher::is_exact(keys, topic, &query.lower);
            let hit = SearchHit { topic, tier, exact };
            if exact {
                exact_hits.push(hit);
            } else {
                other_hits.push(hit);
            }
        }
        exact_hits.extend(other_hits);
        exact_hits
    }
}

fn validate_topics(topics: &[FirstAidTopic]) -> Result<()> {
    let mut seen_ids = HashSet::new();
    for topic in topics {
        if topic.id.trim().is_empty() {
            return Err(FirstLineError::Validation(
                "topic id must not be empty".to_string(),
            ));
        }
        if !seen_ids.insert(topic.id.as_str()) {
            return Err(FirstLineError::Validation(format!(
                "duplicate topic id: {}",
                topic.id
            )));
        }
        if topic.steps.is_empty() {
            return Err(FirstLineError::Validation(format!(
                "topic {} must have at least one step",
                topic.id
            )));
        }
        if topic.keywords.is_empty() {
            return Err(FirstLineError::Validation(format!(
                "topic {} must have at least one keyword",
                topic.id
            )));
        }
        for keyword in &topic.keywords {
            if keyword.trim().is_empty() || *keyword != keyword.to_lowercase() {
                return Err(FirstLineError::Validation(format!(
                    "topic {} has a malformed keyword: {keyword:?}",
                    topic.id
                )));
            }
        }
    }
    Ok(())
}
