//! Movie storefront workload.
//!
//! Server-renders one page with two independently loaded sections:
//! - a catalog of products, each with a five-star rating form
//! - the store user's recommendations
//!
//! Star clicks post back to `/ratings`, which writes the rating and
//! redirects to the page.

pub mod app;
pub mod page;
pub mod routes;

#[cfg(target_arch = "wasm32")]
mod component;

pub use app::{PageResponse, Storefront};
