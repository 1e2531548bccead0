use serde::Serialize;

use super::Setter;

/// Structured attributes shared by `og:image`, `og:video` and `og:audio`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Media {
    pub url: Option<String>,
    pub secure_url: Option<String>,
    /// MIME type, from `og:<namespace>:type`
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    /// Raw `:width` value as declared; see [`Media::width_px`]
    pub width: Option<String>,
    /// Raw `:height` value as declared; see [`Media::height_px`]
    pub height: Option<String>,
    pub alt: Option<String>,
}

pub type Image = Media;
pub type Video = Media;
pub type Audio = Media;

impl Media {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Field-mapping table for qualified keys (`image:width` -> `width`).
    pub fn setter(attr: &str) -> Option<Setter<Media>> {
        let setter: Setter<Media> = match attr {
            "url" => |m, v| m.url = Some(v.to_string()),
            "secure_url" => |m, v| m.secure_url = Some(v.to_string()),
            "type" => |m, v| m.mime_type = Some(v.to_string()),
            "width" => |m, v| m.width = Some(v.to_string()),
            "height" => |m, v| m.height = Some(v.to_string()),
            "alt" => |m, v| m.alt = Some(v.to_string()),
            _ => return None,
        };
        Some(setter)
    }

    /// Width in pixels, when the declared value is a plain integer
    pub fn width_px(&self) -> Option<u32> {
        self.width.as_deref().and_then(parse_pixels)
    }

    /// Height in pixels, when the declared value is a plain integer
    pub fn height_px(&self) -> Option<u32> {
        self.height.as_deref().and_then(parse_pixels)
    }
}

fn parse_pixels(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

/// Namespaces whose bare key opens a new sub-object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Image,
    Video,
    Audio,
}

impl Namespace {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "image" => Some(Namespace::Image),
            "video" => Some(Namespace::Video),
            "audio" => Some(Namespace::Audio),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Image => "image",
            Namespace::Video => "video",
            Namespace::Audio => "audio",
        }
    }
}
