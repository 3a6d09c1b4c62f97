//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` owns the two persisted entries (token and serialized user) and
//! is consulted by `ApiService` for the bearer token on every request. Route
//! guards and the navbar read a `SessionState` snapshot.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::{ClientConfig, PagePaths};
use crate::error::ClientError;
use crate::net::storage::SessionStore;
use crate::net::types::User;
use crate::util::auth::{admin_redirect, auth_redirect};

/// Point-in-time view of the stored session.
///
/// Provided to components as `RwSignal<SessionState>` context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

/// Accessors and mutators over the persisted session entries.
#[derive(Clone, Debug)]
pub struct Session<S> {
    store: S,
    token_key: String,
    user_key: String,
    pages: PagePaths,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S, config: &ClientConfig) -> Self {
        Self {
            store,
            token_key: config.token_key.clone(),
            user_key: config.user_key.clone(),
            pages: config.pages.clone(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn pages(&self) -> &PagePaths {
        &self.pages
    }

    /// # Errors
    ///
    /// Propagates storage write failures.
    pub fn save_token(&self, token: &str) -> Result<(), ClientError> {
        self.store.set(&self.token_key, token)
    }

    /// # Errors
    ///
    /// Propagates serialization or storage write failures.
    pub fn save_user(&self, user: &User) -> Result<(), ClientError> {
        let raw = serde_json::to_string(user)?;
        self.store.set(&self.user_key, &raw)
    }

    /// Stored token; an empty string counts as absent.
    pub fn token(&self) -> Option<String> {
        self.store.get(&self.token_key).filter(|t| !t.is_empty())
    }

    /// Stored user profile. Entries that no longer decode are treated as absent.
    pub fn user(&self) -> Option<User> {
        let raw = self.store.get(&self.user_key)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                leptos::logging::warn!("stored user is not valid JSON: {e}");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.is_admin())
    }

    pub fn snapshot(&self) -> SessionState {
        SessionState { token: self.token(), user: self.user() }
    }

    /// Drop token and user without navigating anywhere.
    pub fn clear(&self) {
        self.store.remove(&self.token_key);
        self.store.remove(&self.user_key);
    }

    /// Clear the session, then send the browser to the login page.
    pub fn logout<F: FnOnce(&str)>(&self, navigate: F) {
        self.clear();
        navigate(&self.pages.login);
    }

    /// Guard for pages that need any signed-in user. Navigates to the login
    /// page and returns `false` when unauthenticated.
    pub fn require_auth<F: FnOnce(&str)>(&self, navigate: F) -> bool {
        guard(auth_redirect(&self.snapshot(), &self.pages), navigate)
    }

    /// Guard for admin pages. Navigates to the home page and returns `false`
    /// unless the user is signed in as an admin.
    pub fn require_admin<F: FnOnce(&str)>(&self, navigate: F) -> bool {
        guard(admin_redirect(&self.snapshot(), &self.pages), navigate)
    }
}

fn guard<F: FnOnce(&str)>(redirect: Option<&str>, navigate: F) -> bool {
    match redirect {
        Some(path) => {
            navigate(path);
            false
        }
        None => true,
    }
}
