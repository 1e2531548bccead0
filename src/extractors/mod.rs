use log::debug;
use scraper::Html;

use crate::model::OpenGraphObject;
use crate::OpenGraphError;

mod assigner;
mod fallback;
mod properties;
mod type_resolver;

pub use assigner::PropertyAssigner;
pub use fallback::apply_fallbacks;
pub use properties::extract_properties;
pub use type_resolver::resolve_kind;

/// A parsed document plus the URL it came from, if any.
pub struct ParsingContext {
    pub url: Option<String>,
    pub document: Html,
}

impl ParsingContext {
    pub fn new(html: &str, url: Option<&str>) -> Self {
        Self {
            url: url.map(str::to_string),
            document: Html::parse_document(html),
        }
    }
}

/// Switches that change how a document is turned into an object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Fill unset `title`/`description`/`url` from generic HTML
    pub use_fallback_mode: bool,
    /// Fail on qualified keys that precede their namespace key
    pub debug: bool,
    /// Read a meta tag carrying both `name="og:*"` and `property="og:*"` only once
    pub dedupe_meta_tags: bool,
}

pub trait Extractor {
    fn parse(&self, context: &ParsingContext) -> Result<OpenGraphObject, OpenGraphError>;
}

pub struct OpenGraphExtractor {
    options: ExtractOptions,
}

impl OpenGraphExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }
}

impl Extractor for OpenGraphExtractor {
    fn parse(&self, context: &ParsingContext) -> Result<OpenGraphObject, OpenGraphError> {
        let properties = extract_properties(&context.document, self.options.dedupe_meta_tags);
        debug!("Found {} og: properties", properties.len());

        let mut object = resolve_kind(&properties).build(&properties, self.options.debug)?;

        if self.options.use_fallback_mode {
            apply_fallbacks(
                &context.document,
                object.base_mut(),
                context.url.as_deref(),
            );
        }

        Ok(object)
    }
}
