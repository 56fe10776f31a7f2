//! API error types.

use storefront_data::FetchError;
use thiserror::Error;

/// Errors returned by [`StorefrontApi`](crate::StorefrontApi) calls.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(#[from] FetchError),

    /// The API answered with a non-2xx status.
    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    /// The body did not match the expected shape.
    #[error("Malformed response from {path}: {reason}")]
    Malformed { path: String, reason: String },

    /// A rating outside 1-5 was offered for submission.
    #[error("Invalid rating {0}: expected a value from 1 to 5")]
    InvalidRating(i64),
}

impl ApiError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
