// Public fallible APIs in this crate share one concrete error contract (`FirstLineError`).
// Repeating per-function `# Errors` boilerplate obscures behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod config;
pub(crate) mod data;
pub mod error;
pub mod knowledge;
pub(crate) mod matcher;
pub mod query;
pub mod topic;

pub use error::{FirstLineError, Result};
pub use knowledge::{KnowledgeBase, MatchTier, SearchHit};
pub use query::NormalizedQuery;
pub use topic::FirstAidTopic;
