//! Shared fixtures for view tests.

use std::rc::Rc;

use storefront_api::{ApiConfig, HttpStorefrontApi, StorefrontApi};
use storefront_data::{FetchClient, MockTransport, Transport};
use storefront_observability::{LogLevel, MemorySink, RequestId, StructuredLogger};

pub(crate) struct Harness {
    pub mock: Rc<MockTransport>,
    pub sink: Rc<MemorySink>,
    pub logger: StructuredLogger,
}

impl Harness {
    pub fn new() -> Self {
        let sink = Rc::new(MemorySink::new());
        let logger = StructuredLogger::new(RequestId::from_string("test"))
            .with_workload("storefront")
            .with_min_level(LogLevel::Info)
            .with_sink(sink.clone());
        Self {
            mock: Rc::new(MockTransport::new()),
            sink,
            logger,
        }
    }

    pub fn api(&self) -> Rc<dyn StorefrontApi> {
        let transport: Rc<dyn Transport> = self.mock.clone();
        Rc::new(HttpStorefrontApi::new(
            FetchClient::with_transport(transport),
            &ApiConfig::new("http://api.test/api/v1"),
        ))
    }
}
