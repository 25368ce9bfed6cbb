//! The per-request authorization gate.
//!
//! `authorize` is a pure, deterministic, total function of the request path
//! and the raw cookie value. It performs no I/O, cannot block, and never
//! panics — every failure mode degrades to a defined verdict.

use crate::classify::{classify, PathClass};
use crate::payload::decode_cookie;
use crate::router::{role_home, LOGIN_PATH};

/// The gate's decision for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Pass the request through to rendering.
    Allow,
    /// Redirect the request to the given path; the gate produces no body.
    RedirectTo(String),
}

impl Verdict {
    fn redirect(path: impl Into<String>) -> Self {
        Verdict::RedirectTo(path.into())
    }
}

/// Decide whether a request may proceed.
///
/// Cookie-absent, cookie-unparseable, and incomplete-session inputs are all
/// folded into "unauthenticated": fail-closed for protected routes,
/// fail-open for public ones. An authenticated-but-inactive session is
/// treated identically to no session on protected routes (it redirects to
/// login, not to an error page).
pub fn authorize(path: &str, raw_cookie: Option<&str>) -> Verdict {
    let stored = raw_cookie.and_then(decode_cookie);
    let session = stored.as_ref().and_then(|s| s.authenticate());

    match classify(path) {
        PathClass::Bypass | PathClass::PublicOpen => Verdict::Allow,

        PathClass::AuthGateway => match &session {
            Some(s) if s.active => Verdict::redirect(role_home(s.role)),
            _ => Verdict::Allow,
        },

        PathClass::RoleRestricted { allowed, .. } => match &session {
            None => Verdict::redirect(LOGIN_PATH),
            Some(s) if !s.active => Verdict::redirect(LOGIN_PATH),
            Some(s) if !allowed.contains(&s.role) => Verdict::redirect(role_home(s.role)),
            Some(_) => Verdict::Allow,
        },
    }
}
