//! In-memory session store with synchronous subscriber notification.

use dinebook_core::{Role, Session};

use crate::persist::SessionPersistence;

/// Partial session update applied by [`SessionStore::update`].
///
/// `id` is deliberately not patchable: identity does not change across
/// profile updates, only across login/logout (`set`).
#[derive(Debug, Clone, Default)]
pub struct SessionPatch {
    pub email: Option<String>,
    pub role: Option<Role>,
    pub active: Option<bool>,
}

type Listener = Box<dyn FnMut(Option<&Session>)>;

/// Holds the current authenticated session (or none) in client memory.
///
/// Mutations commit to persistence first, then notify subscribers
/// synchronously in registration order, before the mutating call returns.
/// Subscribers therefore always observe a committed value, and anything the
/// caller does *after* `set`/`update` (e.g. dispatching a navigation) happens
/// strictly after every subscriber — including the cookie projector — has run.
pub struct SessionStore {
    current: Option<Session>,
    persistence: Box<dyn SessionPersistence>,
    listeners: Vec<Listener>,
}

impl SessionStore {
    /// Create a store hydrated from the persisted value of the last `set`.
    ///
    /// A persistence read failure is logged and degrades to `None` — a client
    /// that cannot read its saved session starts signed out.
    pub fn new(persistence: Box<dyn SessionPersistence>) -> Self {
        let current = match persistence.load() {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!("failed to load persisted session, starting signed out: {err:#}");
                None
            }
        };

        Self {
            current,
            persistence,
            listeners: Vec::new(),
        }
    }

    pub fn get(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Replace the session (login sets `Some`, logout sets `None`).
    pub fn set(&mut self, session: Option<Session>) {
        self.current = session;
        self.commit();
    }

    /// Merge a partial update into the current session.
    ///
    /// A no-op when no session is present: there is nothing to merge into.
    pub fn update(&mut self, patch: SessionPatch) {
        let Some(session) = self.current.as_mut() else {
            return;
        };

        if let Some(email) = patch.email {
            session.email = email;
        }
        if let Some(role) = patch.role {
            session.role = role;
        }
        if let Some(active) = patch.active {
            session.active = active;
        }

        self.commit();
    }

    /// Register a listener invoked synchronously after every mutation with
    /// the post-mutation value.
    pub fn subscribe(&mut self, listener: impl FnMut(Option<&Session>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn commit(&mut self) {
        if let Err(err) = self.persistence.store(self.current.as_ref()) {
            tracing::warn!("failed to persist session: {err:#}");
        }
        for listener in &mut self.listeners {
            listener(self.current.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::persist::MemoryPersistence;

    fn store() -> SessionStore {
        SessionStore::new(Box::new(MemoryPersistence::new()))
    }

    fn sample(role: Role) -> Session {
        Session::new("u-1", "ava@example.com", role, true).unwrap()
    }

    #[test]
    fn set_and_get() {
        let mut store = store();
        assert!(store.get().is_none());

        store.set(Some(sample(Role::Customer)));
        assert_eq!(store.get().unwrap().email, "ava@example.com");

        store.set(None);
        assert!(store.get().is_none());
    }

    #[test]
    fn update_merges_partial_fields() {
        let mut store = store();
        store.set(Some(sample(Role::Customer)));

        store.update(SessionPatch {
            email: Some("new@example.com".into()),
            active: Some(false),
            ..Default::default()
        });

        let session = store.get().unwrap();
        assert_eq!(session.email, "new@example.com");
        assert_eq!(session.role, Role::Customer);
        assert!(!session.active);
        assert_eq!(session.id, "u-1");
    }

    #[test]
    fn update_without_session_is_a_noop() {
        let mut store = store();
        let seen = Rc::new(RefCell::new(0u32));
        let counter = Rc::clone(&seen);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.update(SessionPatch {
            email: Some("ghost@example.com".into()),
            ..Default::default()
        });

        assert!(store.get().is_none());
        assert_eq!(*seen.borrow(), 0, "no-op update must not notify");
    }

    #[test]
    fn listeners_run_synchronously_with_post_mutation_value() {
        let mut store = store();
        let observed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&observed);
        store.subscribe(move |session| {
            sink.borrow_mut().push(session.map(|s| s.email.clone()));
        });

        store.set(Some(sample(Role::Admin)));
        store.set(None);

        assert_eq!(
            *observed.borrow(),
            vec![Some("ava@example.com".to_string()), None]
        );
    }

    #[test]
    fn listeners_notified_in_registration_order() {
        let mut store = store();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let order = Rc::clone(&order);
            store.subscribe(move |_| order.borrow_mut().push(tag));
        }

        store.set(Some(sample(Role::Customer)));
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn new_store_hydrates_from_persistence() {
        let persistence = MemoryPersistence::new();
        persistence.store(Some(&sample(Role::RestaurantOwner))).unwrap();

        let store = SessionStore::new(Box::new(persistence));
        assert_eq!(store.get().unwrap().role, Role::RestaurantOwner);
    }
}
