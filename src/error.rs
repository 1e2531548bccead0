use thiserror::Error;

/// Failures raised by a [`Fetcher`](crate::fetchers::Fetcher) while retrieving a page
#[derive(Error, Debug)]
pub enum TransportError {
    /// Network failure, non-success HTTP status, or client construction failure
    #[error("Failed to fetch URL: {0}")]
    Request(#[from] reqwest::Error),
}

/// Errors that can occur during Open Graph extraction
#[derive(Error, Debug)]
pub enum OpenGraphError {
    /// The page could not be retrieved
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A qualified key (e.g. `image:width`) appeared before its bare namespace key.
    /// Only raised in debug mode.
    #[error("Malformed property `og:{key}`: no `og:{namespace}` tag precedes it")]
    MalformedProperty { key: String, namespace: String },

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
