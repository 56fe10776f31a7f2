//! Observability for the rating storefront.
//!
//! This crate provides:
//! - `RequestId` - Correlation id attached to every log line of a page render
//! - `StructuredLogger` - Structured logging with request context
//! - `LogSink` - Where rendered entries go (stderr under Spin, memory in tests)

mod logging;
mod request_id;

pub use logging::*;
pub use request_id::*;
