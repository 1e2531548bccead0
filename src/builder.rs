use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::config::OpenGraphConfig;
use crate::extractors::{ExtractOptions, Extractor, OpenGraphExtractor, ParsingContext};
use crate::fetchers::{Fetcher, RequestFetcher};
use crate::model::OpenGraphObject;
use crate::OpenGraphError;

/// Open Graph consumer: holds configuration across calls to
/// [`load_url`](OpenGraph::load_url) and [`load_html`](OpenGraph::load_html).
///
/// # Example
/// ```
/// use opengraph::OpenGraph;
///
/// let og = OpenGraph::builder().fallback_mode(true).build().unwrap();
/// let object = og
///     .load_html("<title>Hello</title>", Some("https://example.com/"))
///     .unwrap();
/// assert_eq!(object.title(), Some("Hello"));
/// assert_eq!(object.url(), Some("https://example.com/"));
/// ```
pub struct OpenGraph {
    options: ExtractOptions,
    fetcher: Arc<dyn Fetcher>,
}

impl OpenGraph {
    /// Create a new builder
    pub fn builder() -> OpenGraphBuilder {
        OpenGraphBuilder::default()
    }

    /// Consumer with default settings: no fallbacks, no debug mode
    pub fn new() -> Result<Self, OpenGraphError> {
        Self::builder().build()
    }

    /// Consumer configured from `opengraph.toml` and `OPENGRAPH__*` variables
    pub fn from_env() -> Result<Self, OpenGraphError> {
        let config = OpenGraphConfig::load()?;
        Self::builder().config(config).build()
    }

    pub fn options(&self) -> ExtractOptions {
        self.options
    }

    /// Fetch `url` and extract its Open Graph object.
    /// `url` doubles as the fallback URL.
    pub async fn load_url(&self, url: &str) -> Result<OpenGraphObject, OpenGraphError> {
        let html = self.fetcher.fetch(url).await?;
        debug!("Fetched {} bytes from {}", html.len(), url);
        self.load_html(&html, Some(url))
    }

    /// Extract the Open Graph object from an HTML string.
    pub fn load_html(
        &self,
        html: &str,
        fallback_url: Option<&str>,
    ) -> Result<OpenGraphObject, OpenGraphError> {
        let context = ParsingContext::new(html, fallback_url);
        OpenGraphExtractor::new(self.options).parse(&context)
    }
}

/// Builder for configuring an [`OpenGraph`] consumer
#[derive(Default)]
pub struct OpenGraphBuilder {
    options: ExtractOptions,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    fetcher: Option<Arc<dyn Fetcher>>,
}

impl OpenGraphBuilder {
    /// Fill unset `title`, `description` and `url` from generic HTML
    pub fn fallback_mode(mut self, enabled: bool) -> Self {
        self.options.use_fallback_mode = enabled;
        self
    }

    /// Fail with [`OpenGraphError::MalformedProperty`] instead of dropping
    /// qualified keys that precede their namespace key
    pub fn debug(mut self, enabled: bool) -> Self {
        self.options.debug = enabled;
        self
    }

    /// Read a meta tag carrying both `name="og:*"` and `property="og:*"` once
    pub fn dedupe_meta_tags(mut self, enabled: bool) -> Self {
        self.options.dedupe_meta_tags = enabled;
        self
    }

    /// Set a custom timeout for HTTP requests
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the HTTP transport. Timeout and user agent are ignored when set.
    pub fn fetcher(mut self, fetcher: impl Fetcher + 'static) -> Self {
        self.fetcher = Some(Arc::new(fetcher));
        self
    }

    /// Apply every setting from a loaded configuration
    pub fn config(mut self, config: OpenGraphConfig) -> Self {
        self.options = ExtractOptions {
            use_fallback_mode: config.use_fallback_mode,
            debug: config.debug,
            dedupe_meta_tags: config.dedupe_meta_tags,
        };
        self.timeout = Some(Duration::from_secs(config.timeout));
        self.user_agent = config.user_agent;
        self
    }

    pub fn build(self) -> Result<OpenGraph, OpenGraphError> {
        if let Some(user_agent) = &self.user_agent {
            if user_agent.trim().is_empty() {
                return Err(OpenGraphError::BuilderError(
                    "User agent must not be empty".to_string(),
                ));
            }
        }

        let fetcher: Arc<dyn Fetcher> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(RequestFetcher::new(
                self.timeout,
                self.user_agent.as_deref(),
            )?),
        };

        Ok(OpenGraph {
            options: self.options,
            fetcher,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use async_trait::async_trait;

    struct StaticFetcher(&'static str);

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, TransportError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_builder_defaults() {
        let og = OpenGraph::builder().build().unwrap();
        assert_eq!(og.options(), ExtractOptions::default());
    }

    #[test]
    fn test_builder_sets_options() {
        let og = OpenGraph::builder()
            .fallback_mode(true)
            .debug(true)
            .dedupe_meta_tags(true)
            .build()
            .unwrap();
        assert!(og.options().use_fallback_mode);
        assert!(og.options().debug);
        assert!(og.options().dedupe_meta_tags);
    }

    #[test]
    fn test_builder_from_config() {
        let config = OpenGraphConfig {
            debug: true,
            timeout: 5,
            ..OpenGraphConfig::default()
        };
        let og = OpenGraph::builder().config(config).build().unwrap();
        assert!(og.options().debug);
        assert!(!og.options().use_fallback_mode);
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let result = OpenGraph::builder().user_agent("  ").build();
        assert!(matches!(result, Err(OpenGraphError::BuilderError(_))));
    }

    #[tokio::test]
    async fn test_load_url_uses_custom_fetcher_and_fallback_url() {
        let og = OpenGraph::builder()
            .fallback_mode(true)
            .fetcher(StaticFetcher(
                r#"<meta property="og:title" content="Static">"#,
            ))
            .build()
            .unwrap();

        let object = og.load_url("https://example.com/page").await.unwrap();
        assert_eq!(object.title(), Some("Static"));
        assert_eq!(object.url(), Some("https://example.com/page"));
    }
}
