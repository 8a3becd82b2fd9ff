use std::fmt;

use async_trait::async_trait;

use super::types::{CatalogQuery, CatalogRecord};
use crate::core::config::SessionProfile;

/// Errors that can occur while querying the catalog.
/// None of them are retried; the first failure goes straight to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Transport-level failure (DNS, connection refused, bad URL).
    Network(String),
    /// The server answered with a non-2xx status.
    Server { status: u16, status_text: String },
    /// The body did not parse into the expected item list.
    Decode(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Server {
                status,
                status_text,
            } => write!(f, "request failed with status: {status} {status_text}"),
            CatalogError::Decode(msg) => write!(f, "could not decode server response: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the name of the backend, for logging.
    fn name(&self) -> &str;

    /// Performs exactly one request for `query` using the credentials in `profile`.
    async fn fetch(
        &self,
        profile: &SessionProfile,
        query: &CatalogQuery,
    ) -> Result<Vec<CatalogRecord>, CatalogError>;
}
