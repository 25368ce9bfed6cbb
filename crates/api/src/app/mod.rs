//! HTTP application wiring (Axum router).
//!
//! The rendering tier is out of scope here; `routes::page` stands in for it.
//! What matters is that the gate middleware wraps **every** route, including
//! the fallback, so no page render happens without a verdict first.

use axum::{routing::get, Router};

use crate::middleware;

pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .fallback(routes::page)
        .layer(axum::middleware::from_fn(middleware::gate_middleware))
}
