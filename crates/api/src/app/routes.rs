use axum::{
    extract::{Extension, OriginalUri},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use dinebook_core::Session;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Placeholder page handler for everything the gate lets through.
///
/// Echoes the session role when one is present — the same `Session` shape
/// page components read for their own secondary gating.
pub async fn page(
    OriginalUri(uri): OriginalUri,
    session: Option<Extension<Session>>,
) -> impl IntoResponse {
    Json(serde_json::json!({
        "path": uri.path(),
        "role": session.as_ref().map(|Extension(s)| s.role.as_str()),
        "email": session.as_ref().map(|Extension(s)| s.email.as_str()),
    }))
}
