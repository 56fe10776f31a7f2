//! View error types.

use storefront_api::{ApiError, ProductId};
use thiserror::Error;

/// Errors raised by view operations before any request is made.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    /// The catalog has no entry for the product.
    #[error("Product {0} is not in the catalog view")]
    UnknownProduct(ProductId),

    /// The view was unmounted.
    #[error("View is no longer mounted")]
    Unmounted,

    /// Rejected by the API layer (e.g. a rating outside 1-5).
    #[error(transparent)]
    Api(#[from] ApiError),
}
