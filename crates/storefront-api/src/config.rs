//! API endpoint configuration.

use serde::Deserialize;

use crate::UserId;

/// The user every view acts for. There is no session handling.
pub const STORE_USER_ID: UserId = UserId::new(10001);

/// Page size for the catalog listing.
pub const DEFAULT_PRODUCT_LIMIT: u32 = 50;

/// Base URL used when nothing is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000/api/v1";

/// Where the storefront API lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// Base URL all API paths are appended to.
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration for an explicit base URL.
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
        }
    }

    /// Build from a variable lookup (Spin variables, environment, ...).
    ///
    /// Reads `server_url`; blank or missing values fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup("server_url") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }
}
