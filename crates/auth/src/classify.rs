//! Request path classification.
//!
//! The route table is a closed, static list evaluated in a fixed priority
//! order — classification must be exhaustive and testable, so there is no
//! dynamic registration of prefixes.

use dinebook_core::Role;

/// Access-control category assigned to a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Static assets, API routes, always-open detail pages. Never gated.
    Bypass,
    /// Explicitly public, or the default for anything unclassified.
    PublicOpen,
    /// Login/register pages: open to anyone, but users who are already
    /// signed in get redirected to their role home.
    AuthGateway,
    /// Reachable only by the listed roles.
    RoleRestricted {
        prefix: &'static str,
        allowed: &'static [Role],
    },
}

/// Restaurant detail pages are always open, including for anonymous visitors.
const OPEN_DETAIL_PREFIX: &str = "/restaurants/";

/// Framework/asset prefixes that the gate must never touch.
const BYPASS_PREFIXES: [&str; 3] = ["/api", "/_next", "/favicon"];

/// Prefixes of the authentication gateway pages. Checked before the public
/// allow-list so that `/login` itself is gateway-classed: it is publicly
/// reachable, but an already-authenticated user must be bounced to their
/// role home rather than shown the login form.
const GATEWAY_PREFIXES: [&str; 2] = ["/login", "/register"];

/// Exact-match public allow-list.
const PUBLIC_PATHS: [&str; 2] = ["/", "/restaurants"];

/// Role-restricted prefixes, evaluated in order.
const RESTRICTED: [(&str, &[Role]); 3] = [
    ("/admin", &[Role::Admin]),
    ("/restaurant-owner", &[Role::Admin, Role::RestaurantOwner]),
    ("/customer", &[Role::Admin, Role::Customer]),
];

/// Classify a request path. Pure, total, first match wins.
///
/// The trailing `PublicOpen` is the deliberate fallback policy for anything
/// unclassified (default-allow), not a gap in the table.
pub fn classify(path: &str) -> PathClass {
    if path.starts_with(OPEN_DETAIL_PREFIX)
        || BYPASS_PREFIXES.iter().any(|p| path.starts_with(p))
        || path.contains('.')
    {
        return PathClass::Bypass;
    }

    if GATEWAY_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return PathClass::AuthGateway;
    }

    if PUBLIC_PATHS.contains(&path) {
        return PathClass::PublicOpen;
    }

    for (prefix, allowed) in RESTRICTED {
        if path.starts_with(prefix) {
            return PathClass::RoleRestricted { prefix, allowed };
        }
    }

    PathClass::PublicOpen
}
