//! Spin HTTP entry point.

use std::rc::Rc;

use spin_sdk::http::{IntoResponse, Method, Request, Response};
use spin_sdk::http_component;

use storefront_api::{ApiConfig, HttpStorefrontApi, StorefrontApi};
use storefront_observability::{LogFormat, LogLevel, RequestId, StructuredLogger};

use crate::Storefront;

#[http_component]
async fn handle(req: Request) -> anyhow::Result<impl IntoResponse> {
    let request_id = RequestId::generate();

    let logger = StructuredLogger::new(request_id.clone())
        .with_workload("storefront")
        .with_min_level(LogLevel::Info)
        .with_format(LogFormat::Human);

    let config = ApiConfig::from_lookup(|key| spin_sdk::variables::get(key).ok());
    logger
        .debug_builder("Resolved API config")
        .field("server_url", config.server_url.clone())
        .emit();

    let api: Rc<dyn StorefrontApi> = Rc::new(HttpStorefrontApi::from_config(&config));
    let storefront = Storefront::new(api, logger);

    let target = match req.query() {
        "" => req.path().to_string(),
        query => format!("{}?{}", req.path(), query),
    };
    let page = storefront
        .handle(method_name(req.method()), &target, req.body())
        .await;

    let mut builder = Response::builder();
    builder.status(page.status);
    for (name, value) in &page.headers {
        builder.header(name.as_str(), value.as_str());
    }
    builder.header("x-request-id", request_id.to_string());
    Ok(builder.body(page.body).build())
}

fn method_name(method: &Method) -> &str {
    match method {
        Method::Get => "GET",
        Method::Head => "HEAD",
        Method::Post => "POST",
        Method::Put => "PUT",
        Method::Delete => "DELETE",
        Method::Patch => "PATCH",
        Method::Options => "OPTIONS",
        Method::Connect => "CONNECT",
        Method::Trace => "TRACE",
        Method::Other(other) => other.as_str(),
    }
}
