pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;

pub use builder::{OpenGraph, OpenGraphBuilder};
pub use config::OpenGraphConfig;
pub use error::{OpenGraphError, TransportError};
pub use model::{Media, ObjectBase, ObjectKind, OpenGraphObject, Website};

/// Fetch a page and extract its Open Graph object with default settings.
///
/// # Arguments
/// * `url` - The URL of the page to fetch
///
/// # Returns
/// * `Ok(OpenGraphObject)` - The extracted object
/// * `Err(OpenGraphError)` - If the page could not be fetched
pub async fn fetch_object(url: &str) -> Result<OpenGraphObject, OpenGraphError> {
    OpenGraph::new()?.load_url(url).await
}

/// Extract the Open Graph object from an HTML string with default settings.
pub fn parse_html(html: &str, fallback_url: Option<&str>) -> Result<OpenGraphObject, OpenGraphError> {
    OpenGraph::new()?.load_html(html, fallback_url)
}
