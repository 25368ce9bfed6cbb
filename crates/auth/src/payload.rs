//! Cookie payload codec.
//!
//! The session cookie carries a URL-encoded JSON projection of the client
//! session store: `{"state":{"user": Session | null}}`. The write direction
//! (the client projector) is strict; the read direction (the gate) is
//! deliberately lenient — a malformed or incomplete payload degrades to "no
//! session", never to an error.

use serde::{Deserialize, Deserializer, Serialize};

use dinebook_core::{Role, Session};

/// Cookie name shared by the client writer and the server-side gate.
pub const COOKIE_NAME: &str = "auth-storage";

/// Cookie lifetime (`Max-Age`), in seconds.
pub const COOKIE_MAX_AGE_SECS: u64 = 86_400;

/// Strict write-side envelope: `{"state":{"user": ...}}`.
#[derive(Debug, Serialize)]
struct PayloadOut<'a> {
    state: StateOut<'a>,
}

#[derive(Debug, Serialize)]
struct StateOut<'a> {
    user: Option<&'a Session>,
}

/// Lenient read-side envelope.
#[derive(Debug, Default, Deserialize)]
struct PayloadIn {
    #[serde(default)]
    state: StateIn,
}

#[derive(Debug, Default, Deserialize)]
struct StateIn {
    #[serde(default)]
    user: Option<StoredSession>,
}

/// Session as it appears inside the cookie, with every field optional.
///
/// The gate must tolerate any subset of fields being absent, empty, or
/// unrecognized (e.g. a role string outside the closed set); all of those
/// fold into "unauthenticated" rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoredSession {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Option<Role>,
    #[serde(default)]
    pub active: bool,
}

impl StoredSession {
    /// Promote to an authenticated [`Session`] iff the identity triple
    /// (`id`, `email`, `role`) is fully present.
    ///
    /// `active` is carried through untouched; the gate decides what an
    /// inactive-but-identified session means.
    pub fn authenticate(&self) -> Option<Session> {
        if self.id.is_empty() || self.email.is_empty() {
            return None;
        }
        let role = self.role?;
        Some(Session {
            id: self.id.clone(),
            email: self.email.clone(),
            role,
            active: self.active,
        })
    }
}

/// Accept a role string outside the closed set (or a non-string) as `None`.
fn lenient_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse::<Role>().ok()))
}

/// Serialize the current session into the URL-encoded cookie value.
///
/// This is the only write path for the cookie; the gate never writes it.
pub fn encode_cookie(user: Option<&Session>) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(&PayloadOut {
        state: StateOut { user },
    })?;
    Ok(urlencoding::encode(&json).into_owned())
}

/// Decode a raw cookie value into the stored session, if any.
///
/// Infallible by design: URL-decode failure, JSON parse failure, or a missing
/// `state.user` all yield `None`.
pub fn decode_cookie(raw: &str) -> Option<StoredSession> {
    let decoded = urlencoding::decode(raw).ok()?;
    let payload: PayloadIn = serde_json::from_str(&decoded).ok()?;
    payload.state.user
}
