//! Client-side session handling for the BedWatch single-page app.
//!
//! The `session` module mirrors what the browser keeps in local storage after
//! login; the `guard` module decides, before a protected page renders,
//! whether to show it or redirect. The guard is a convenience for the UI
//! only: the backend validates the token on every request regardless.

pub mod guard;
pub mod session;

pub use guard::{GuardState, Redirect, RouteGuard};
pub use session::{LoginPayload, MemorySession, SessionCache, AUTH_TOKEN_KEY, ROLE_KEY};
