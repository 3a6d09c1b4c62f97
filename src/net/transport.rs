//! HTTP transport seam between `ApiService` and the browser fetch API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `UnavailableTransport` fails every call, since these
//! endpoints are only meaningful in the browser.

use crate::error::ClientError;
use crate::net::request::{PreparedRequest, RawResponse};

/// Sends a prepared request and returns the raw status and body.
///
/// Futures are not `Send`; implementations run on the single browser thread.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// # Errors
    ///
    /// Returns `ClientError::Network` if no response was received.
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, ClientError>;
}

/// Transport used outside the browser; every call reports a network error.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableTransport;

impl HttpTransport for UnavailableTransport {
    async fn send(&self, _request: &PreparedRequest) -> Result<RawResponse, ClientError> {
        Err(ClientError::Network("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
pub use gloo::GlooTransport;

#[cfg(feature = "hydrate")]
mod gloo {
    use gloo_net::http::{Method as GlooMethod, RequestBuilder};

    use super::HttpTransport;
    use crate::error::ClientError;
    use crate::net::request::{Method, PreparedRequest, RawResponse};

    /// `fetch`-backed transport.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct GlooTransport;

    fn gloo_method(method: Method) -> GlooMethod {
        match method {
            Method::Get => GlooMethod::GET,
            Method::Post => GlooMethod::POST,
            Method::Delete => GlooMethod::DELETE,
        }
    }

    fn network_error(err: gloo_net::Error) -> ClientError {
        ClientError::Network(err.to_string())
    }

    impl HttpTransport for GlooTransport {
        async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, ClientError> {
            let mut builder = RequestBuilder::new(&request.url).method(gloo_method(request.method));
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let built = match &request.body {
                Some(body) => builder.body(body.clone()),
                None => builder.build(),
            }
            .map_err(network_error)?;

            let resp = built.send().await.map_err(network_error)?;
            let status = resp.status();
            let body = resp.text().await.map_err(network_error)?;
            Ok(RawResponse { status, body })
        }
    }
}
