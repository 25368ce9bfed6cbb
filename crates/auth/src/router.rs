//! Role → canonical landing path mapping.

use dinebook_core::Role;

/// Where unauthenticated (or unauthorized) users are sent.
///
/// This doubles as the defensive default for any role value outside the
/// closed set; with `Role` being a closed enum that branch is unrepresentable
/// here, but wire-level callers folding unknown role strings to "no role"
/// land on this path too.
pub const LOGIN_PATH: &str = "/login";

/// Canonical landing path for a role. Fixed and total.
pub fn role_home(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::RestaurantOwner => "/restaurant-owner",
        Role::Customer => "/customer",
    }
}
