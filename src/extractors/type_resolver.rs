use log::debug;

use crate::model::{ObjectKind, Property};

/// Picks the object kind from the first `og:type` property. Later declarations are ignored.
pub fn resolve_kind(properties: &[Property]) -> ObjectKind {
    match properties.iter().find(|p| p.key == "type") {
        Some(property) => {
            let kind = ObjectKind::from_declared(&property.value);
            debug!(
                "Declared og:type {:?} resolved to {}",
                property.value,
                kind.as_str()
            );
            kind
        }
        None => ObjectKind::default(),
    }
}
