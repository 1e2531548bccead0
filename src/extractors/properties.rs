use log::trace;
use scraper::{Html, Selector};

use crate::model::Property;

const OG_PREFIX: &str = "og:";

/// Collects every `og:` meta tag from the document.
///
/// Tags declared through `name` come first, then tags declared through
/// `property`, each group in document order. An element carrying both
/// attributes appears once per group unless `dedupe` is set.
pub fn extract_properties(document: &Html, dedupe: bool) -> Vec<Property> {
    let Ok(selector) = Selector::parse("meta") else {
        return Vec::new();
    };

    let mut properties = Vec::new();

    for attr in ["name", "property"] {
        for element in document.select(&selector) {
            let Some(raw) = element.value().attr(attr) else {
                continue;
            };
            let Some(rest) = raw.strip_prefix(OG_PREFIX) else {
                continue;
            };
            if dedupe && attr == "property" && has_og_name(element.value()) {
                trace!("Skipping meta tag {:?} already read through `name`", raw);
                continue;
            }

            let key = rest.trim().to_lowercase();
            let value = element.value().attr("content").unwrap_or("").trim();
            properties.push(Property::new(key, value));
        }
    }

    properties
}

fn has_og_name(element: &scraper::node::Element) -> bool {
    element
        .attr("name")
        .is_some_and(|name| name.starts_with(OG_PREFIX))
}
