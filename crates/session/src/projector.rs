//! One-way projection of the session store into the auth cookie.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dinebook_auth::{encode_cookie, COOKIE_MAX_AGE_SECS, COOKIE_NAME};
use dinebook_core::Session;

use crate::store::SessionStore;

/// `SameSite` cookie attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Lax,
    Strict,
}

/// A cookie as handed to the [`CookieSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub max_age_secs: u64,
    pub same_site: SameSite,
}

/// Where projected cookies land.
///
/// This is the seam that keeps the projector inert outside an interactive
/// client: a server-only execution context simply has no sink, so no
/// projector is ever attached.
pub trait CookieSink {
    fn write_cookie(&self, cookie: &Cookie) -> anyhow::Result<()>;
}

/// In-memory cookie jar (tests and headless clients).
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: RefCell<HashMap<String, Cookie>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a cookie, if set.
    pub fn value(&self, name: &str) -> Option<String> {
        self.cookies.borrow().get(name).map(|c| c.value.clone())
    }

    pub fn get(&self, name: &str) -> Option<Cookie> {
        self.cookies.borrow().get(name).cloned()
    }
}

impl CookieSink for MemoryCookieJar {
    fn write_cookie(&self, cookie: &Cookie) -> anyhow::Result<()> {
        self.cookies
            .borrow_mut()
            .insert(cookie.name.clone(), cookie.clone());
        Ok(())
    }
}

/// Reactive one-way sync from [`SessionStore`] to the auth cookie.
///
/// Every store mutation re-serializes `{state:{user: current}}` and
/// overwrites the cookie unconditionally (last write wins, no merge with
/// prior cookie content). The write happens inside the store's synchronous
/// notification, so it completes before the mutating call returns.
pub struct CookieProjector;

impl CookieProjector {
    /// Attach the projection to a store.
    ///
    /// Projects once eagerly before subscribing, covering the case where the
    /// store was hydrated from persistence before the subscription attached.
    pub fn attach(store: &mut SessionStore, sink: Rc<dyn CookieSink>) {
        project(sink.as_ref(), store.get());
        store.subscribe(move |session| project(sink.as_ref(), session));
    }
}

/// Overwrite the cookie with the given session value.
///
/// Failure must not reach the mutating caller: it is logged and the previous
/// cookie value is left untouched (stale-but-valid beats crash).
fn project(sink: &dyn CookieSink, session: Option<&Session>) {
    let value = match encode_cookie(session) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("failed to serialize session cookie, keeping previous value: {err}");
            return;
        }
    };

    let cookie = Cookie {
        name: COOKIE_NAME.to_string(),
        value,
        path: "/".to_string(),
        max_age_secs: COOKIE_MAX_AGE_SECS,
        same_site: SameSite::Lax,
    };

    if let Err(err) = sink.write_cookie(&cookie) {
        tracing::warn!("failed to write session cookie, keeping previous value: {err:#}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryPersistence;
    use crate::store::SessionPatch;
    use dinebook_auth::{authorize, decode_cookie, Verdict};
    use dinebook_core::Role;

    fn sample(role: Role, active: bool) -> Session {
        Session::new("u-9", "kim@example.com", role, active).unwrap()
    }

    fn store_with_jar() -> (SessionStore, Rc<MemoryCookieJar>) {
        let mut store = SessionStore::new(Box::new(MemoryPersistence::new()));
        let jar = Rc::new(MemoryCookieJar::new());
        CookieProjector::attach(&mut store, jar.clone());
        (store, jar)
    }

    #[test]
    fn eager_projection_runs_at_attach() {
        let persistence = MemoryPersistence::new();
        use crate::persist::SessionPersistence;
        persistence.store(Some(&sample(Role::Admin, true))).unwrap();

        let mut store = SessionStore::new(Box::new(persistence));
        let jar = Rc::new(MemoryCookieJar::new());
        CookieProjector::attach(&mut store, jar.clone());

        // Hydrated-before-attach session is already projected.
        let raw = jar.value(COOKIE_NAME).expect("cookie written eagerly");
        let stored = decode_cookie(&raw).unwrap();
        assert_eq!(stored.authenticate(), Some(sample(Role::Admin, true)));
    }

    #[test]
    fn cookie_is_written_before_set_returns() {
        let (mut store, jar) = store_with_jar();
        store.set(Some(sample(Role::Customer, true)));

        // A navigation dispatched right after set() must see the fresh cookie.
        let raw = jar.value(COOKIE_NAME).unwrap();
        assert_eq!(authorize("/customer/bookings", Some(&raw)), Verdict::Allow);
    }

    #[test]
    fn logout_overwrites_with_null_user() {
        let (mut store, jar) = store_with_jar();
        store.set(Some(sample(Role::Customer, true)));
        store.set(None);

        let raw = jar.value(COOKIE_NAME).unwrap();
        assert!(decode_cookie(&raw).is_none());
        assert_eq!(
            authorize("/customer", Some(&raw)),
            Verdict::RedirectTo("/login".into())
        );
    }

    #[test]
    fn profile_update_reprojects() {
        let (mut store, jar) = store_with_jar();
        store.set(Some(sample(Role::Customer, true)));
        store.update(SessionPatch {
            active: Some(false),
            ..Default::default()
        });

        let raw = jar.value(COOKIE_NAME).unwrap();
        let stored = decode_cookie(&raw).unwrap();
        assert!(!stored.active);
    }

    #[test]
    fn cookie_attributes_match_contract() {
        let (mut store, jar) = store_with_jar();
        store.set(Some(sample(Role::Admin, true)));

        let cookie = jar.get(COOKIE_NAME).unwrap();
        assert_eq!(cookie.path, "/");
        assert_eq!(cookie.max_age_secs, 86_400);
        assert_eq!(cookie.same_site, SameSite::Lax);
    }

    #[test]
    fn rapid_mutations_last_write_wins() {
        let (mut store, jar) = store_with_jar();
        store.set(Some(sample(Role::Customer, true)));
        store.set(Some(sample(Role::RestaurantOwner, true)));
        store.set(Some(sample(Role::Admin, true)));

        let raw = jar.value(COOKIE_NAME).unwrap();
        let stored = decode_cookie(&raw).unwrap();
        assert_eq!(stored.authenticate().unwrap().role, Role::Admin);
    }
}
