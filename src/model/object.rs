use serde::Serialize;

use super::{Audio, Image, Property, Video};
use crate::extractors::PropertyAssigner;
use crate::OpenGraphError;

/// Assigns a raw property value to one field of `T`.
pub type Setter<T> = fn(&mut T, &str);

/// Attributes shared by every Open Graph object type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ObjectBase {
    pub title: Option<String>,
    /// The `og:type` value as declared in the document
    #[serde(rename = "type")]
    pub object_type: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub site_name: Option<String>,
    pub locale: Option<String>,
    pub locale_alternates: Vec<String>,
    pub determiner: Option<String>,
    pub images: Vec<Image>,
    pub videos: Vec<Video>,
    pub audios: Vec<Audio>,
}

impl ObjectBase {
    /// Field-mapping table for the keys every object type understands.
    /// Repeatable media namespaces are handled by the assigner, not here.
    pub fn setter(key: &str) -> Option<Setter<ObjectBase>> {
        let setter: Setter<ObjectBase> = match key {
            "title" => |o, v| o.title = Some(v.to_string()),
            "type" => |o, v| o.object_type = Some(v.to_string()),
            "url" => |o, v| o.url = Some(v.to_string()),
            "description" => |o, v| o.description = Some(v.to_string()),
            "site_name" => |o, v| o.site_name = Some(v.to_string()),
            "locale" => |o, v| o.locale = Some(v.to_string()),
            "locale:alternate" => |o, v| o.locale_alternates.push(v.to_string()),
            "determiner" => |o, v| o.determiner = Some(v.to_string()),
            _ => return None,
        };
        Some(setter)
    }
}

/// One concrete Open Graph object type.
///
/// Each variant owns an [`ObjectBase`] and may add fields of its own through
/// [`ObjectVariant::setter`], which the assigner consults before the base table.
pub trait ObjectVariant: Default {
    fn base(&self) -> &ObjectBase;

    fn base_mut(&mut self) -> &mut ObjectBase;

    fn setter(_key: &str) -> Option<Setter<Self>> {
        None
    }
}

/// `og:type = website`, and the default for anything unrecognized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Website {
    #[serde(flatten)]
    pub base: ObjectBase,
}

impl ObjectVariant for Website {
    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }
}

/// The object types this crate knows how to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObjectKind {
    #[default]
    Website,
}

impl ObjectKind {
    /// Maps a declared `og:type` value to a kind. Unknown values fall back to `Website`.
    pub fn from_declared(declared: &str) -> Self {
        match declared.trim().to_lowercase().as_str() {
            "website" => ObjectKind::Website,
            _ => ObjectKind::Website,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Website => "website",
        }
    }

    /// Builds an object of this kind from the ordered properties.
    pub fn build(
        self,
        properties: &[Property],
        debug: bool,
    ) -> Result<OpenGraphObject, OpenGraphError> {
        match self {
            ObjectKind::Website => Ok(OpenGraphObject::Website(
                PropertyAssigner::<Website>::new(debug).assign_all(properties)?,
            )),
        }
    }
}

/// Result of an extraction: exactly one object of a fixed kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpenGraphObject {
    Website(Website),
}

impl OpenGraphObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            OpenGraphObject::Website(_) => ObjectKind::Website,
        }
    }

    pub fn base(&self) -> &ObjectBase {
        match self {
            OpenGraphObject::Website(object) => object.base(),
        }
    }

    pub fn base_mut(&mut self) -> &mut ObjectBase {
        match self {
            OpenGraphObject::Website(object) => object.base_mut(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.base().title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.base().description.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.base().url.as_deref()
    }

    pub fn site_name(&self) -> Option<&str> {
        self.base().site_name.as_deref()
    }

    pub fn images(&self) -> &[Image] {
        &self.base().images
    }

    pub fn videos(&self) -> &[Video] {
        &self.base().videos
    }

    pub fn audios(&self) -> &[Audio] {
        &self.base().audios
    }

    /// Serializes the object as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_declared() {
        assert_eq!(ObjectKind::from_declared("website"), ObjectKind::Website);
        assert_eq!(ObjectKind::from_declared(" WebSite "), ObjectKind::Website);
        assert_eq!(ObjectKind::from_declared("article"), ObjectKind::Website);
        assert_eq!(ObjectKind::from_declared(""), ObjectKind::Website);
    }

    #[test]
    fn test_build_fixes_kind_and_assigns() {
        let properties = vec![
            Property::new("type", "article"),
            Property::new("title", "Built"),
            Property::new("image", "a.png"),
        ];
        let kind = ObjectKind::from_declared("article");
        let object = kind.build(&properties, true).unwrap();

        assert_eq!(object.kind(), ObjectKind::Website);
        assert_eq!(object.title(), Some("Built"));
        assert_eq!(object.images().len(), 1);
    }

    #[test]
    fn test_build_reports_malformed_in_debug_mode() {
        let properties = vec![Property::new("video:width", "10")];
        let result = ObjectKind::Website.build(&properties, true);
        assert!(matches!(
            result,
            Err(OpenGraphError::MalformedProperty { .. })
        ));
        assert!(ObjectKind::Website.build(&properties, false).is_ok());
    }

    #[test]
    fn test_base_setters_last_write_wins() {
        let mut base = ObjectBase::default();
        let set_title = ObjectBase::setter("title").unwrap();
        set_title(&mut base, "A");
        set_title(&mut base, "B");
        assert_eq!(base.title.as_deref(), Some("B"));
    }

    #[test]
    fn test_locale_alternate_appends() {
        let mut base = ObjectBase::default();
        let push = ObjectBase::setter("locale:alternate").unwrap();
        push(&mut base, "fr_FR");
        push(&mut base, "es_ES");
        assert_eq!(base.locale_alternates, vec!["fr_FR", "es_ES"]);
    }

    #[test]
    fn test_media_keys_are_not_scalars() {
        assert!(ObjectBase::setter("image").is_none());
        assert!(ObjectBase::setter("image:width").is_none());
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let mut website = Website::default();
        website.base.title = Some("Example".to_string());
        let json = serde_json::to_value(OpenGraphObject::Website(website)).unwrap();
        assert_eq!(json["kind"], "website");
        assert_eq!(json["title"], "Example");
        assert!(json["images"].as_array().unwrap().is_empty());
    }
}
