//! Transport port for fetching API documents.

use async_trait::async_trait;

use crate::error::Result;

/// Issues a GET request and returns the response body as text.
///
/// Implementations send their fixed header profile with every request, map
/// transport failures and non-success statuses to
/// [`Error::Fetch`](crate::error::Error::Fetch), and never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and return the body.
    async fn get(&self, url: &str) -> Result<String>;
}

