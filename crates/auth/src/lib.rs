//! `dinebook-auth` — pure request-time authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: the gate is a
//! total function of (request path, raw cookie value) and performs no I/O.
//! The HTTP tier feeds it the inbound request and acts on the verdict; the
//! client tier writes the cookie it reads (see `dinebook-session`).

pub mod classify;
pub mod gate;
pub mod payload;
pub mod router;

pub use classify::{classify, PathClass};
pub use gate::{authorize, Verdict};
pub use payload::{decode_cookie, encode_cookie, StoredSession, COOKIE_MAX_AGE_SECS, COOKIE_NAME};
pub use router::{role_home, LOGIN_PATH};
