//! Client configuration: API base URL, storage keys, and page routes.
//!
//! The base URL can be overridden at build time through
//! `HEALTHTRACK_API_BASE_URL`; everything else uses the clinic defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TOKEN_KEY: &str = "auth_token";
pub const DEFAULT_USER_KEY: &str = "user_data";

/// Static pages the client redirects to or links from the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePaths {
    pub login: String,
    pub register: String,
    pub home: String,
    pub doctors: String,
    pub appointments: String,
    pub admin_dashboard: String,
}

impl Default for PagePaths {
    fn default() -> Self {
        Self {
            login: "/login.html".to_owned(),
            register: "/register.html".to_owned(),
            home: "/index.html".to_owned(),
            doctors: "/doctors.html".to_owned(),
            appointments: "/appointments.html".to_owned(),
            admin_dashboard: "/admin/dashboard.html".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash.
    pub api_base_url: String,
    pub token_key: String,
    pub user_key: String,
    pub pages: PagePaths,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            user_key: DEFAULT_USER_KEY.to_owned(),
            pages: PagePaths::default(),
        }
    }
}

impl ClientConfig {
    /// Defaults plus the `HEALTHTRACK_API_BASE_URL` value baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::default().with_base_url_override(option_env!("HEALTHTRACK_API_BASE_URL"))
    }

    /// Apply an optional base URL override; blank values keep the current URL.
    #[must_use]
    pub fn with_base_url_override(self, raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => self.with_base_url(url),
            None => self,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.api_base_url = url.trim_end_matches('/').to_owned();
        self
    }

    /// Absolute URL for an endpoint path such as `/doctors/`.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.api_base_url)
    }
}
