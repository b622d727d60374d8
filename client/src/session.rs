//! Locally cached session state.
//!
//! The browser keeps the session token under `authToken` and the caller's
//! role under `role`. `SessionCache` abstracts that key/value store so the
//! guard can be exercised without a browser.

use std::collections::HashMap;

use serde::Deserialize;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const ROLE_KEY: &str = "role";

pub trait SessionCache {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);

    fn auth_token(&self) -> Option<String> {
        self.get(AUTH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    fn role(&self) -> Option<String> {
        self.get(ROLE_KEY)
    }

    /// Stores the token and role returned by a successful login.
    fn store_login(&mut self, login: &LoginPayload) {
        self.set(AUTH_TOKEN_KEY, login.token.clone());
        self.set(ROLE_KEY, login.role.clone());
    }

    fn clear(&mut self) {
        self.remove(AUTH_TOKEN_KEY);
        self.remove(ROLE_KEY);
    }
}

/// The fields of the login response the client keeps.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginPayload {
    pub token: String,
    pub role: String,
}

#[derive(Debug, Default, Clone)]
pub struct MemorySession {
    entries: HashMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionCache for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_is_cached_and_cleared() {
        let body = r#"{"message":"Login successful","token":"t0k","id":"65f1c0ffee00112233445566","role":"hospital"}"#;
        let login: LoginPayload = serde_json::from_str(body).unwrap();

        let mut session = MemorySession::new();
        session.store_login(&login);
        assert_eq!(session.auth_token().as_deref(), Some("t0k"));
        assert_eq!(session.role().as_deref(), Some("hospital"));

        session.clear();
        assert_eq!(session.auth_token(), None);
        assert_eq!(session.role(), None);
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let mut session = MemorySession::new();
        session.set(AUTH_TOKEN_KEY, String::new());
        assert_eq!(session.auth_token(), None);
    }
}
