//! Route guard evaluated when a protected page mounts.
//!
//! Without a cached token the visitor is sent to the login page. With one,
//! any path containing `hospital` additionally requires a hospital or
//! sub-admin role; other roles are sent home. The decision is made once per
//! mount and is not re-evaluated when the cached role changes afterwards.

use tracing::debug;

use crate::session::SessionCache;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Home,
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Login => "/auth/login",
            Redirect::Home => "/home",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Allowed,
    Redirecting(Redirect),
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    path: String,
    state: GuardState,
}

fn is_staff(role: &str) -> bool {
    role.eq_ignore_ascii_case("hospital") || role.eq_ignore_ascii_case("subadmin")
}

impl RouteGuard {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            state: GuardState::Checking,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Runs the mount-time check. Only the first call consults the session;
    /// later calls return the settled state.
    pub fn on_mount<C: SessionCache + ?Sized>(&mut self, session: &C) -> GuardState {
        if self.state != GuardState::Checking {
            return self.state;
        }
        self.state = if session.auth_token().is_none() {
            GuardState::Redirecting(Redirect::Login)
        } else if self.path.contains("hospital")
            && !session.role().as_deref().is_some_and(is_staff)
        {
            GuardState::Redirecting(Redirect::Home)
        } else {
            GuardState::Allowed
        };
        debug!(path = %self.path, state = ?self.state, "route guard settled");
        self.state
    }

    /// Where to navigate, if anywhere.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self.state {
            GuardState::Redirecting(target) => Some(target.path()),
            _ => None,
        }
    }

    pub fn should_render(&self) -> bool {
        self.state == GuardState::Allowed
    }
}
