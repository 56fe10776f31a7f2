//! Storefront views.
//!
//! Three components, each owning its own state:
//! - `CatalogView` - product listing, one `RatingControl` per product
//! - `RatingControl` - star capture, reports through an owner-supplied callback
//! - `RecommendationsView` - read-only recommendation list
//!
//! Views are single-threaded handles. `mount` and `refresh` return `'static`
//! futures for whatever event loop drives them; `unmount` makes any response
//! still in flight a no-op.

mod catalog;
mod error;
mod rating;
mod recommendations;
pub mod render;
mod state;

#[cfg(test)]
mod testing;

pub use catalog::{CatalogEntry, CatalogView};
pub use error::ViewError;
pub use rating::{RatingCallback, RatingControl};
pub use recommendations::RecommendationsView;
pub use state::{Liveness, LoadState};
