//! JSON shapes exchanged with the storefront API.

use serde::{Deserialize, Serialize};

use crate::{ApiError, Product, ProductId, Rating, RatingSubmission, RecommendedItem};

/// `GET /products` body.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub product_id: ProductId,
    /// 0 or absent when the user has not rated the product.
    #[serde(default)]
    pub rating: Option<i64>,
    pub meta: ProductMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductMeta {
    pub product_name: String,
    pub product_desc: String,
}

impl TryFrom<ProductRecord> for Product {
    type Error = ApiError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let rating = match record.rating.unwrap_or(0) {
            0 => None,
            value => Some(Rating::new(value)?),
        };
        Ok(Product {
            id: record.product_id,
            name: record.meta.product_name,
            description: record.meta.product_desc,
            rating,
        })
    }
}

/// `GET /users/{user_id}/recommendations` body.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<RecommendationRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRecord {
    pub product_id: ProductId,
    pub meta: RecommendationMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationMeta {
    pub name: String,
    pub desc: String,
}

impl From<RecommendationRecord> for RecommendedItem {
    fn from(record: RecommendationRecord) -> Self {
        RecommendedItem {
            id: record.product_id,
            name: record.meta.name,
            description: record.meta.desc,
        }
    }
}

/// `PUT /users/{user_id}/ratings` body.
#[derive(Debug, Clone, Serialize)]
pub struct RatingsPayload {
    pub ratings: Vec<RatingRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingRecord {
    pub product_id: ProductId,
    pub rating: Rating,
}

impl From<RatingSubmission> for RatingsPayload {
    fn from(submission: RatingSubmission) -> Self {
        RatingsPayload {
            ratings: vec![RatingRecord {
                product_id: submission.product_id,
                rating: submission.rating,
            }],
        }
    }
}
