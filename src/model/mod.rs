mod media;
mod object;

pub use media::{Audio, Image, Media, Namespace, Video};
pub use object::{ObjectBase, ObjectKind, ObjectVariant, OpenGraphObject, Setter, Website};

/// A single `og:` meta tag, normalized.
///
/// `key` is the lower-cased attribute value after the `og:` prefix
/// (`og:image:width` becomes `image:width`); `value` is the trimmed `content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub key: String,
    pub value: String,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Splits `image:width` into `("image", Some("width"))`.
    pub fn split_key(&self) -> (&str, Option<&str>) {
        match self.key.split_once(':') {
            Some((namespace, attr)) => (namespace, Some(attr)),
            None => (self.key.as_str(), None),
        }
    }
}
