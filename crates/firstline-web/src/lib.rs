use anyhow::{Context, Result};
use axum::{Router, middleware, routing::get};

use firstline_core::KnowledgeBase;
use firstline_core::config::SearchConfig;

mod dto;
mod error;
mod handlers;
mod security;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy)]
pub(crate) struct WebState {
    pub(crate) kb: &'static KnowledgeBase,
    pub(crate) search: SearchConfig,
}

impl WebState {
    fn new(kb: &'static KnowledgeBase, search: SearchConfig) -> Self {
        Self { kb, search }
    }
}

/// Start the first-aid API server and block until shutdown.
///
/// # Errors
/// Returns an error when the knowledge base fails validation, the runtime
/// cannot be created, the socket cannot be bound, or the server exits with
/// a runtime failure.
pub fn serve_web(host: &str, port: u16) -> Result<()> {
    let kb = KnowledgeBase::builtin().context("builtin knowledge base failed validation")?;
    let search = SearchConfig::from_env().context("invalid search configuration")?;
    let state = WebState::new(kb, search);
    let bind_addr = format!("{host}:{port}");
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build web runtime")?;

    println!("knowledge base loaded: {} topics", kb.topics().len());

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("failed to bind first-aid API at {bind_addr}"))?;
        println!("first-aid API listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app_router(state))
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await
            .context("web server failed")
    })
}

pub(crate) fn app_router(state: WebState) -> Router {
    Router::new()
        .route("/api/first-aid/search", get(handlers::search))
        .route("/api/first-aid/topics", get(handlers::list_topics))
        .route("/api/first-aid/topics/{id}", get(handlers::get_topic))
        .layer(middleware::from_fn(security::security_headers_middleware))
        .with_state(state)
}
