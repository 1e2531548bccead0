use log::debug;
use scraper::{Html, Selector};

use crate::model::ObjectBase;

/// Fills `url`, `title` and `description` from generic HTML when the Open Graph
/// tags left them unset. Values already present are never replaced.
pub fn apply_fallbacks(document: &Html, object: &mut ObjectBase, fallback_url: Option<&str>) {
    if object.url.is_none() {
        if let Some(url) = fallback_url {
            debug!("Using fallback url {}", url);
            object.url = Some(url.to_string());
        }
    }

    if object.title.is_none() {
        object.title = title_text(document);
    }

    if object.description.is_none() {
        object.description = description_content(document);
    }
}

fn title_text(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

// Matches `property="description"` only; `name="description"` is not consulted.
fn description_content(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[property="description"]"#).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
