//! `dinebook-session` — client-side session state and its cookie projection.
//!
//! The store lives in a single-threaded client event loop: mutations take
//! `&mut self`, subscribers are notified synchronously after each committed
//! mutation, and the cookie projection completes before the mutating call
//! returns. That ordering is what guarantees a navigation issued right after
//! login observes the fresh cookie rather than a stale pre-login one.

pub mod persist;
pub mod projector;
pub mod store;

pub use persist::{JsonFilePersistence, MemoryPersistence, SessionPersistence};
pub use projector::{Cookie, CookieProjector, CookieSink, MemoryCookieJar, SameSite};
pub use store::{SessionPatch, SessionStore};
