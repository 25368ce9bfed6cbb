//! Request-time authorization middleware.
//!
//! Runs ahead of every page render: reads the auth cookie off the inbound
//! request, asks the pure gate for a verdict, and either forwards the request
//! or answers with a redirect. The gate itself never writes the cookie and
//! never reads ambient state — both inputs are handed to it explicitly.

use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use dinebook_auth::{authorize, decode_cookie, Verdict, COOKIE_NAME};

pub async fn gate_middleware(mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let raw_cookie = auth_cookie_value(req.headers());

    match authorize(&path, raw_cookie.as_deref()) {
        Verdict::Allow => {
            // Expose the decoded session to page handlers for secondary UI
            // gating (defense in depth); absent or broken cookies simply
            // leave no extension behind.
            if let Some(session) = raw_cookie
                .as_deref()
                .and_then(decode_cookie)
                .and_then(|stored| stored.authenticate())
            {
                req.extensions_mut().insert(session);
            }
            next.run(req).await
        }
        Verdict::RedirectTo(target) => {
            tracing::debug!(%path, %target, "gate redirect");
            Redirect::temporary(&target).into_response()
        }
    }
}

/// Pull the auth cookie's raw value out of the `Cookie` header.
fn auth_cookie_value(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(header::COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == COOKIE_NAME).then(|| value.to_string())
    })
}
