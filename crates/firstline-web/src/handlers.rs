use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};

use firstline_core::FirstLineError;

use crate::WebState;
use crate::dto::SearchQuery;
use crate::error::firstline_error_response;

/// `GET /api/first-aid/search?q=...` — ranked topic list; absent or empty
/// `q` returns the whole knowledge base in declaration order.
pub async fn search(State(state): State<WebState>, Query(query): Query<SearchQuery>) -> Response {
    if query.limit == Some(0) {
        return firstline_error_response(
            FirstLineError::Validation("limit must be at least 1".to_string()),
            "first_aid.search",
            None,
        );
    }

    let raw = query.q.as_deref().unwrap_or_default();
    let limit = state.search.effective_limit(query.limit);

    if query.detailed.unwrap_or(false) {
        let mut hits = state.kb.search_detailed(raw);
        if let Some(limit) = limit {
            hits.truncate(limit);
        }
        return Json(hits).into_response();
    }

    let mut topics = state.kb.search(raw);
    if let Some(limit) = limit {
        topics.truncate(limit);
    }
    Json(topics).into_response()
}

pub async fn list_topics(State(state): State<WebState>) -> Response {
    Json(state.kb.topics()).into_response()
}

pub async fn get_topic(State(state): State<WebState>, Path(id): Path<String>) -> Response {
    match state.kb.topic(&id) {
        Some(topic) => Json(topic).into_response(),
        None => firstline_error_response(
            FirstLineError::NotFound(format!("first-aid topic: {id}")),
            "first_aid.topic",
            Some(id),
        ),
    }
}
