//! Pluggable transports that actually put requests on the wire.

use std::rc::Rc;

use async_trait::async_trait;

use crate::{FetchError, RequestBuilder, Response};

/// Sends a fully built request and returns the raw response.
///
/// Non-2xx statuses are returned as `Ok`; only delivery failures are errors.
#[async_trait(?Send)]
pub trait Transport {
    /// Send the request.
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError>;
}

/// Outbound HTTP through the Spin host.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport for SpinTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        use crate::Method;
        use spin_sdk::http::{Method as SpinMethod, Request};

        let method = match request.method() {
            Method::Get => SpinMethod::Get,
            Method::Put => SpinMethod::Put,
        };

        let mut builder = Request::builder();
        builder.method(method).uri(request.full_url());
        for (key, value) in request.headers() {
            builder.header(key.as_str(), value.as_str());
        }
        let outgoing = match request.body_bytes() {
            Some(body) => builder.body(body.to_vec()).build(),
            None => builder.build(),
        };

        let response: spin_sdk::http::Response = spin_sdk::http::send(outgoing)
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = *response.status();
        let headers = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.as_str().unwrap_or("").to_string()))
            .collect();
        let body = response.into_body();

        Ok(Response::new(status, headers, body))
    }
}

/// Fails every request. Used on targets without a host HTTP implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedTransport;

#[async_trait(?Send)]
impl Transport for UnsupportedTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        Err(FetchError::Unsupported(format!(
            "{} {}",
            request.method(),
            request.full_url()
        )))
    }
}

/// The transport for the current target.
pub fn default_transport() -> Rc<dyn Transport> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(SpinTransport)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(UnsupportedTransport)
    }
}
