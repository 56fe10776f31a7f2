//! Domain types consumed by the views.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{ApiError, ProductId};

/// A star rating from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating.
    pub const MIN: u8 = 1;
    /// Highest accepted rating, also the number of stars shown.
    pub const MAX: u8 = 5;

    /// Validate a raw value.
    pub fn new(value: i64) -> Result<Self, ApiError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ApiError::InvalidRating(value))
        }
    }

    /// The numeric value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = ApiError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog product with the fixed user's current rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// `None` until the user has rated the product.
    pub rating: Option<Rating>,
}

impl Product {
    /// Rating as displayed, 0 meaning "not yet rated".
    pub fn rating_value(&self) -> u8 {
        self.rating.map(Rating::value).unwrap_or(0)
    }
}

/// A product surfaced by the recommender. Carries no rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendedItem {
    pub id: ProductId,
    pub name: String,
    pub description: String,
}

/// One rating about to be written. Built at submit time and sent once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingSubmission {
    pub product_id: ProductId,
    pub rating: Rating,
}

impl RatingSubmission {
    /// Create a submission.
    pub fn new(product_id: ProductId, rating: Rating) -> Self {
        Self { product_id, rating }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert_eq!(Rating::new(1).unwrap().value(), 1);
        assert_eq!(Rating::new(5).unwrap().value(), 5);
        assert_eq!(Rating::new(6), Err(ApiError::InvalidRating(6)));
        assert_eq!(Rating::new(-1), Err(ApiError::InvalidRating(-1)));
    }

    #[test]
    fn test_rating_serde() {
        let rating: Rating = serde_json::from_str("4").unwrap();
        assert_eq!(rating.value(), 4);
        assert_eq!(serde_json::to_string(&rating).unwrap(), "4");
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }

    #[test]
    fn test_unrated_product_displays_zero() {
        let product = Product {
            id: ProductId::new(1),
            name: "Widget".to_string(),
            description: String::new(),
            rating: None,
        };
        assert_eq!(product.rating_value(), 0);
    }
}
