use serde::Serialize;

use crate::query::NormalizedQuery;
use crate::topic::FirstAidTopic;

/// Which of the four independent match conditions admitted a topic.
/// Tiers are evaluated in declaration order and the first hit is kept;
/// ranking only distinguishes exact from non-exact (see `is_exact`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    TitleOrDescription,
    ExactKeyword,
    TokenOverlap,
    StepText,
}

impl MatchTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TitleOrDescription => "title_or_description",
            Self::ExactKeyword => "exact_keyword",
            Self::TokenOverlap => "token_overlap",
            Self::StepText => "step_text",
        }
    }
}

/// Lowercased match keys, computed once at knowledge-base construction so
/// the per-request path is comparison-only.
#[derive(Debug, Clone)]
pub(crate) struct SearchKeys {
    title_lower: String,
    description_lower: String,
    steps_lower: String,
}

impl SearchKeys {
    pub(crate) fn from_topic(topic: &FirstAidTopic) -> Self {
        Self {
            title_lower: topic.title.to_lowercase(),
            description_lower: topic.description.to_lowercase(),
            steps_lower: topic.steps.join(" ").to_lowercase(),
        }
    }
}

/// Short-circuit OR across the four tiers; any one admits the topic.
/// An empty query satisfies tier 1 vacuously, so "no query" matches
/// every topic.
pub(crate) fn match_topic(
    keys: &SearchKeys,
    topic: &FirstAidTopic,
    query: &NormalizedQuery,
) -> Option<MatchTier> {
    if keys.title_lower.contains(&query.lower) || keys.description_lower.contains(&query.lower) {
        return Some(MatchTier::TitleOrDescription);
    }
    if topic.keywords.iter().any(|keyword| *keyword == query.lower) {
        return Some(MatchTier::ExactKeyword);
    }
    // A single overlapping token is sufficient; this permissive OR is the
    // product behavior, not an accident of implementation.
    if query.tokens.iter().any(|token| {
        topic
            .keywords
            .iter()
            .any(|keyword| keyword.contains(token.as_str()) || token.contains(keyword.as_str()))
    }) {
        return Some(MatchTier::TokenOverlap);
    }
    if query
        .tokens
        .iter()
        .any(|token| keys.steps_lower.contains(token.as_str()))
    {
        return Some(MatchTier::StepText);
    }
    None
}

/// Exact match partitions ahead of everything else: the full query is
/// contained in the title, or is verbatim one of the keywords.
pub(crate) fn is_exact(keys: &SearchKeys, topic: &FirstAidTopic, lower: &str) -> bool {
    keys.title_lower.contains(lower) || topic.keywords.iter().any(|keyword| keyword == lower)
}

#[cfg(test)]
mod tests {
    use super::{MatchTier, SearchKeys, is_exact, match_topic};
    use crate::query::NormalizedQuery;
    use crate::topic::FirstAidTopic;

    fn topic() -> FirstAidTopic {
        FirstAidTopic {
            id: "choking".to_string(),
            title: "Choking".to_string(),
            description: "Airway blocked by food or an object".to_string(),
            steps: vec![
                "Encourage them to keep coughing".to_string(),
                "Give up to five back blows between the shoulder blades".to_string(),
            ],
            dos: Vec::new(),
            donts: Vec::new(),
            source: "test".to_string(),
            keywords: vec!["choking".to_string(), "heimlich".to_string()],
        }
    }

    fn keys(topic: &FirstAidTopic) -> SearchKeys {
        SearchKeys::from_topic(topic)
    }

    #[test]
    fn title_substring_matches_at_tier_one() {
        let topic = topic();
        let tier = match_topic(&keys(&topic), &topic, &NormalizedQuery::parse("CHOK"));
        assert_eq!(tier, Some(MatchTier::TitleOrDescription));
    }

    #[test]
    fn description_substring_matches_at_tier_one() {
        let topic = topic();
        let tier = match_topic(&keys(&topic), &topic, &NormalizedQuery::parse("airway block"));
        assert_eq!(tier, Some(MatchTier::TitleOrDescription));
    }

    #[test]
    fn exact_keyword_matches_at_tier_two() {
        let topic = topic();
        let tier = match_topic(&keys(&topic), &topic, &NormalizedQuery::parse("heimlich"));
        assert_eq!(tier, Some(MatchTier::ExactKeyword));
    }

    #[test]
    fn single_overlapping_token_is_sufficient_at_tier_three() {
        let topic = topic();
        let tier = match_topic(
            &keys(&topic),
            &topic,
            &NormalizedQuery::parse("toddler heimlich maneuver"),
        );
        assert_eq!(tier, Some(MatchTier::TokenOverlap));
    }

    #[test]
    fn token_overlap_runs_both_containment_directions() {
        let topic = topic();
        // token contained in keyword
        let tier = match_topic(&keys(&topic), &topic, &NormalizedQuery::parse("zz chok"));
        assert_eq!(tier, Some(MatchTier::TokenOverlap));
        // keyword contained in token
        let tier = match_topic(&keys(&topic), &topic, &NormalizedQuery::parse("zz chokingly"));
        assert_eq!(tier, Some(MatchTier::TokenOverlap));
    }

    #[test]
    fn step_text_substring_matches_at_tier_four() {
        let topic = topic();
        let tier = match_topic(
            &keys(&topic),
            &topic,
            &NormalizedQuery::parse("zz shoulder"),
        );
        assert_eq!(tier, Some(MatchTier::StepText));
    }

    #[test]
    fn empty_query_matches_every_topic_vacuously() {
        let topic = topic();
        let tier = match_topic(&keys(&topic), &topic, &NormalizedQuery::parse(""));
        assert_eq!(tier, Some(MatchTier::TitleOrDescription));
    }

    #[test]
    fn unrelated_query_matches_no_tier() {
        let topic = topic();
        let tier = match_topic(
            &keys(&topic),
            &topic,
            &NormalizedQuery::parse("xyznotarealword"),
        );
        assert_eq!(tier, None);
    }

    #[test]
    fn exactness_requires_title_substring_or_verbatim_keyword() {
        let topic = topic();
        assert!(is_exact(&keys(&topic), &topic, "choking"));
        assert!(is_exact(&keys(&topic), &topic, "heimlich"));
        assert!(!is_exact(&keys(&topic), &topic, "heim"));
    }
}
