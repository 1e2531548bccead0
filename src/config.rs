use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Consumer-level settings, persisted across extraction calls
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct OpenGraphConfig {
    /// Fill missing title/description/url from generic HTML
    #[serde(default)]
    pub use_fallback_mode: bool,
    /// Fail on malformed properties instead of dropping them
    #[serde(default)]
    pub debug: bool,
    /// Read a meta tag matching both `name` and `property` only once
    #[serde(default)]
    pub dedupe_meta_tags: bool,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent when fetching pages
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for OpenGraphConfig {
    fn default() -> Self {
        Self {
            use_fallback_mode: false,
            debug: false,
            dedupe_meta_tags: false,
            timeout: default_timeout(),
            user_agent: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

impl OpenGraphConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with OPENGRAPH__ prefix
    /// 2. opengraph.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: OPENGRAPH__USE_FALLBACK_MODE=true
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from an optional `opengraph.toml` and `OPENGRAPH__*` variables
pub fn load_config() -> Result<OpenGraphConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("opengraph").required(false))
        .add_source(
            Environment::with_prefix("OPENGRAPH")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
