//! Shared auth guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages call a guard at the top of their initialization. The
//! redirect decision is a pure function of the session snapshot; the
//! navigation itself is an injected effect (`navigate_to` in the browser).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::PagePaths;
use crate::state::session::SessionState;

/// Where an unauthenticated visitor should be sent, if anywhere.
pub fn auth_redirect<'a>(state: &SessionState, pages: &'a PagePaths) -> Option<&'a str> {
    (!state.is_authenticated()).then_some(pages.login.as_str())
}

/// Where a non-admin visitor to an admin page should be sent, if anywhere.
pub fn admin_redirect<'a>(state: &SessionState, pages: &'a PagePaths) -> Option<&'a str> {
    (!state.is_authenticated() || !state.is_admin()).then_some(pages.home.as_str())
}

/// Full-page navigation via `window.location`.
pub fn navigate_to(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
