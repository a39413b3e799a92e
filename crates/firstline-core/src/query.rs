/// Tokens shorter than this are discarded as noise ("a", "is", stray chars).
/// The full lowered query still participates in substring and exact-keyword
/// matching regardless of length.
pub const MIN_TOKEN_LEN: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedQuery {
    pub lower: String,
    pub tokens: Vec<String>,
}

impl NormalizedQuery {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        let tokens = lower
            .split_whitespace()
            .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
            .map(str::to_string)
            .collect();
        Self { lower, tokens }
    }

    /// An empty query means "no filter": callers return the entire
    /// knowledge base in declaration order.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }
}
