mod request;

pub use request::RequestFetcher;

use async_trait::async_trait;

use crate::error::TransportError;

/// Retrieves the raw HTML body of a page.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, TransportError>;
}
