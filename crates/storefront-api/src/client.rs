//! The `StorefrontApi` seam and its HTTP implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use storefront_data::{FetchClient, FetchError, Response};

use crate::wire::{ProductsResponse, RatingsPayload, RecommendationsResponse};
use crate::{ApiConfig, ApiError, Product, RatingSubmission, RecommendedItem, UserId};

/// Operations the views need from the remote API.
#[async_trait(?Send)]
pub trait StorefrontApi {
    /// List up to `limit` catalog products with `user`'s ratings.
    async fn list_products(&self, user: UserId, limit: u32) -> Result<Vec<Product>, ApiError>;

    /// Write one rating for `user`.
    async fn submit_rating(
        &self,
        user: UserId,
        submission: RatingSubmission,
    ) -> Result<(), ApiError>;

    /// List `user`'s personalized recommendations.
    async fn list_recommendations(&self, user: UserId) -> Result<Vec<RecommendedItem>, ApiError>;
}

/// [`StorefrontApi`] over plain REST/JSON.
#[derive(Clone)]
pub struct HttpStorefrontApi {
    client: FetchClient,
}

impl HttpStorefrontApi {
    /// Create an API client on the target's default transport.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(FetchClient::new(), config)
    }

    /// Create an API client on an existing fetch client.
    pub fn new(client: FetchClient, config: &ApiConfig) -> Self {
        Self {
            client: client.with_base_url(config.server_url.clone()),
        }
    }
}

fn products_path() -> String {
    "/products".to_string()
}

fn ratings_path(user: UserId) -> String {
    format!("/users/{}/ratings", user)
}

fn recommendations_path(user: UserId) -> String {
    format!("/users/{}/recommendations", user)
}

/// Reject non-2xx, then decode the body.
fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Status {
            path: path.to_string(),
            status: response.status,
        });
    }
    response.json().map_err(|e| match e {
        FetchError::ParseError(reason) | FetchError::JsonError(reason) => ApiError::Malformed {
            path: path.to_string(),
            reason,
        },
        other => ApiError::Transport(other),
    })
}

#[async_trait(?Send)]
impl StorefrontApi for HttpStorefrontApi {
    async fn list_products(&self, user: UserId, limit: u32) -> Result<Vec<Product>, ApiError> {
        let path = products_path();
        let response = self
            .client
            .get(path.as_str())
            .query("limit", limit)
            .query("user_id", user)
            .send()
            .await?;

        let body: ProductsResponse = decode(&path, response)?;
        body.products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ApiError::Malformed {
                path,
                reason: e.to_string(),
            })
    }

    async fn submit_rating(
        &self,
        user: UserId,
        submission: RatingSubmission,
    ) -> Result<(), ApiError> {
        let path = ratings_path(user);
        let response = self
            .client
            .put(path.as_str())
            .header("Accept", "application/json")
            .json(&RatingsPayload::from(submission))?
            .send()
            .await?;

        if response.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                path,
                status: response.status,
            })
        }
    }

    async fn list_recommendations(&self, user: UserId) -> Result<Vec<RecommendedItem>, ApiError> {
        let path = recommendations_path(user);
        let response = self.client.get(path.as_str()).send().await?;

        let body: RecommendationsResponse = decode(&path, response)?;
        Ok(body
            .recommendations
            .into_iter()
            .map(RecommendedItem::from)
            .collect())
    }
}
