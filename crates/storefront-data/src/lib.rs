//! Outbound HTTP client for the rating storefront.
//!
//! A small builder API over a pluggable [`Transport`]: Spin's outbound HTTP
//! on wasm32, a scripted [`MockTransport`] in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::FetchClient;
//!
//! let client = FetchClient::new().with_base_url("http://localhost:5000/api/v1");
//!
//! let response = client
//!     .get("/products")
//!     .query("limit", 50)
//!     .send()
//!     .await?;
//!
//! if response.is_success() {
//!     let body: serde_json::Value = response.json()?;
//! }
//! ```

mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod request;
mod response;
mod transport;

use std::rc::Rc;

pub use error::FetchError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;
pub use request::{Method, RequestBuilder};
pub use response::Response;
#[cfg(target_arch = "wasm32")]
pub use transport::SpinTransport;
pub use transport::{default_transport, Transport, UnsupportedTransport};

/// HTTP client for making outbound requests.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct FetchClient {
    transport: Rc<dyn Transport>,
    base_url: Option<String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a client on the target's default transport.
    pub fn new() -> Self {
        Self::with_transport(default_transport())
    }

    /// Create a client on an explicit transport.
    pub fn with_transport(transport: Rc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: None,
        }
    }

    /// Prepend a base URL to all relative request paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a PUT request.
    pub fn put(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Put, url)
    }

    fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        ClientRequestBuilder {
            transport: Rc::clone(&self.transport),
            builder: RequestBuilder::new(method, full_url),
        }
    }
}

/// A request builder bound to a client's transport.
pub struct ClientRequestBuilder {
    transport: Rc<dyn Transport>,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.builder = self.builder.query(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Send the request and return the response, whatever its status.
    pub async fn send(self) -> Result<Response, FetchError> {
        self.transport.send(self.builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(mock: &Rc<MockTransport>) -> FetchClient {
        let transport: Rc<dyn Transport> = mock.clone();
        FetchClient::with_transport(transport).with_base_url("http://api.test/v1/")
    }

    #[tokio::test]
    async fn test_relative_paths_join_base_url() {
        let mock = Rc::new(MockTransport::new());
        mock.on(Method::Get, "/v1/products", Response::empty(200));

        let resp = client(&mock)
            .get("/products")
            .query("limit", 50)
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status, 200);
        let sent = mock.requests();
        assert_eq!(sent[0].full_url(), "http://api.test/v1/products?limit=50");
    }

    #[tokio::test]
    async fn test_absolute_urls_bypass_base_url() {
        let mock = Rc::new(MockTransport::new());
        client(&mock)
            .get("https://elsewhere.test/ping")
            .send()
            .await
            .unwrap();
        assert_eq!(mock.requests()[0].url(), "https://elsewhere.test/ping");
    }

    #[tokio::test]
    async fn test_request_headers_are_applied() {
        let mock = Rc::new(MockTransport::new());
        client(&mock)
            .put("/users/1/ratings")
            .header("Accept", "application/json")
            .header("X-Extra", "1")
            .send()
            .await
            .unwrap();

        let sent = &mock.requests()[0];
        assert_eq!(sent.method(), Method::Put);
        assert_eq!(sent.header_value("accept"), Some("application/json"));
        assert_eq!(sent.header_value("x-extra"), Some("1"));
    }

    #[tokio::test]
    async fn test_unsupported_transport_fails() {
        let client = FetchClient::with_transport(Rc::new(UnsupportedTransport));
        let err = client.get("http://api.test/x").send().await.unwrap_err();
        assert!(matches!(err, FetchError::Unsupported(_)));
    }
}
