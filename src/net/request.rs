//! Request building and response interpretation for the clinic API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiService` turns each call into a `RequestDescriptor`, prepares it here
//! against the config and current token, hands the `PreparedRequest` to a
//! transport, and runs the `RawResponse` back through `interpret_response`.
//! Nothing in this module touches the network, so it is tested natively.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ClientError;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub const REQUEST_FAILED: &str = "Request failed";
pub const LOGIN_FAILED: &str = "Login failed";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// One API call before it is bound to a base URL and token.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestDescriptor {
    pub endpoint: String,
    pub method: Method,
    pub body: Option<Value>,
    /// Attach the bearer token when one is stored.
    pub auth: bool,
}

impl RequestDescriptor {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), method, body: None, auth: true }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Get, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Delete, endpoint)
    }

    /// # Errors
    ///
    /// Returns a decode error if `body` cannot be represented as JSON.
    pub fn post<B: Serialize>(endpoint: impl Into<String>, body: &B) -> Result<Self, ClientError> {
        let mut descriptor = Self::new(Method::Post, endpoint);
        descriptor.body = Some(serde_json::to_value(body)?);
        Ok(descriptor)
    }

    #[must_use]
    pub fn without_auth(mut self) -> Self {
        self.auth = false;
        self
    }
}

/// Transport-ready request: absolute URL, final headers, encoded body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    pub url: String,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Default JSON headers, plus the bearer credential when `auth` is set and
/// a non-empty token is available.
pub fn build_headers(auth: bool, token: Option<&str>) -> Vec<(String, String)> {
    let mut headers = vec![(CONTENT_TYPE.to_owned(), JSON_CONTENT_TYPE.to_owned())];
    if auth {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            headers.push((AUTHORIZATION.to_owned(), format!("Bearer {token}")));
        }
    }
    headers
}

pub fn prepare(config: &ClientConfig, descriptor: &RequestDescriptor, token: Option<&str>) -> PreparedRequest {
    PreparedRequest {
        url: config.url(&descriptor.endpoint),
        method: descriptor.method,
        headers: build_headers(descriptor.auth, token),
        body: descriptor.body.as_ref().map(Value::to_string),
    }
}

/// Form-encoded credentials for the token endpoint. The email travels as
/// `username`, per the OAuth2 password-grant form the backend expects.
pub fn prepare_login(config: &ClientConfig, email: &str, password: &str) -> PreparedRequest {
    let body = format!(
        "username={}&password={}",
        urlencoding::encode(email),
        urlencoding::encode(password)
    );
    PreparedRequest {
        url: config.url("/auth/login"),
        method: Method::Post,
        headers: vec![(CONTENT_TYPE.to_owned(), FORM_CONTENT_TYPE.to_owned())],
        body: Some(body),
    }
}

/// Human-readable message from a FastAPI-style error body.
///
/// A string `detail` is used as-is; a validation array contributes its `msg`
/// entries joined with `"; "`.
pub fn server_message(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

/// Parse the body as JSON and map non-2xx statuses to `ClientError::Http`.
///
/// # Errors
///
/// Returns `Decode` when the body is not JSON (checked before the status),
/// and `Http` carrying the server detail or `fallback` for failed statuses.
pub fn interpret_response(response: &RawResponse, fallback: &str) -> Result<Value, ClientError> {
    let body: Value = serde_json::from_str(&response.body)?;
    if !response.is_success() {
        let message = server_message(&body).unwrap_or_else(|| fallback.to_owned());
        return Err(ClientError::Http { status: response.status, message });
    }
    Ok(body)
}
