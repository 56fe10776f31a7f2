//! Typed client for the storefront's remote API.
//!
//! - **Model**: `Product`, `RecommendedItem`, `RatingSubmission`, validated `Rating`
//! - **Wire**: the JSON shapes of the three endpoints
//! - **Client**: the `StorefrontApi` trait and `HttpStorefrontApi`
//!
//! ```rust,ignore
//! use storefront_api::{
//!     ApiConfig, HttpStorefrontApi, StorefrontApi, DEFAULT_PRODUCT_LIMIT, STORE_USER_ID,
//! };
//!
//! let api = HttpStorefrontApi::from_config(&ApiConfig::default());
//! let products = api.list_products(STORE_USER_ID, DEFAULT_PRODUCT_LIMIT).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod ids;
pub mod model;
pub mod wire;

pub use client::{HttpStorefrontApi, StorefrontApi};
pub use config::{ApiConfig, DEFAULT_PRODUCT_LIMIT, DEFAULT_SERVER_URL, STORE_USER_ID};
pub use error::ApiError;
pub use ids::{ProductId, UserId};
pub use model::{Product, Rating, RatingSubmission, RecommendedItem};

