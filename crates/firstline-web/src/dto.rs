use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
    /// Include per-hit tier/exact diagnostics in the response.
    pub detailed: Option<bool>,
}
