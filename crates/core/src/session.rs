//! Authenticated session model.

use serde::{Deserialize, Serialize};

use crate::{DomainError, Role};

/// The authenticated identity and status carried for a client.
///
/// # Invariants
/// - `id` and `email` are non-empty (enforced by [`Session::new`]).
/// - A `Session` value is by construction *authenticated*; being *authorized*
///   for a protected route additionally requires `active == true` and role
///   membership in the route's allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
}

impl Session {
    /// Create a session, validating the identity triple.
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        active: bool,
    ) -> Result<Self, DomainError> {
        let id = id.into().trim().to_string();
        let email = email.into().trim().to_string();

        if id.is_empty() {
            return Err(DomainError::validation("session id cannot be empty"));
        }
        if email.is_empty() {
            return Err(DomainError::validation("session email cannot be empty"));
        }

        Ok(Self { id, email, role, active })
    }
}
