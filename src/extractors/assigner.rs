use std::collections::HashMap;

use log::{debug, trace};

use crate::model::{Media, Namespace, ObjectBase, ObjectVariant, Property};
use crate::OpenGraphError;

/// Maps an ordered property sequence onto a freshly built object of type `T`.
///
/// The object is owned by the assigner until [`PropertyAssigner::finish`], so a
/// failed assignment never leaks a half-populated value.
pub struct PropertyAssigner<T: ObjectVariant> {
    object: T,
    /// Index of the sub-object currently receiving qualified keys, per namespace
    open: HashMap<Namespace, usize>,
    debug: bool,
}

impl<T: ObjectVariant> PropertyAssigner<T> {
    pub fn new(debug: bool) -> Self {
        Self {
            object: T::default(),
            open: HashMap::new(),
            debug,
        }
    }

    pub fn assign_all<'a, I>(mut self, properties: I) -> Result<T, OpenGraphError>
    where
        I: IntoIterator<Item = &'a Property>,
    {
        for property in properties {
            self.assign(property)?;
        }
        Ok(self.finish())
    }

    pub fn assign(&mut self, property: &Property) -> Result<(), OpenGraphError> {
        if let Some(setter) = T::setter(&property.key) {
            setter(&mut self.object, &property.value);
            return Ok(());
        }
        if let Some(setter) = ObjectBase::setter(&property.key) {
            setter(self.object.base_mut(), &property.value);
            return Ok(());
        }

        let (prefix, attr) = property.split_key();
        let Some(namespace) = Namespace::from_key(prefix) else {
            trace!("Ignoring unrecognized property og:{}", property.key);
            return Ok(());
        };

        match attr {
            None => {
                let list = self.media_list(namespace);
                list.push(Media::with_url(property.value.clone()));
                let index = list.len() - 1;
                self.open.insert(namespace, index);
            }
            Some(attr) => self.assign_qualified(namespace, attr, property)?,
        }
        Ok(())
    }

    pub fn finish(self) -> T {
        self.object
    }

    /// Index of the sub-object currently open for `namespace`, if any.
    pub fn open_index(&self, namespace: Namespace) -> Option<usize> {
        self.open.get(&namespace).copied()
    }

    fn assign_qualified(
        &mut self,
        namespace: Namespace,
        attr: &str,
        property: &Property,
    ) -> Result<(), OpenGraphError> {
        let Some(index) = self.open_index(namespace) else {
            if self.debug {
                return Err(OpenGraphError::MalformedProperty {
                    key: property.key.clone(),
                    namespace: namespace.as_str().to_string(),
                });
            }
            debug!(
                "Dropping og:{}: no og:{} opened before it",
                property.key,
                namespace.as_str()
            );
            return Ok(());
        };

        match Media::setter(attr) {
            Some(setter) => {
                let media = &mut self.media_list(namespace)[index];
                setter(media, &property.value);
            }
            None => trace!("Ignoring unrecognized property og:{}", property.key),
        }
        Ok(())
    }

    fn media_list(&mut self, namespace: Namespace) -> &mut Vec<Media> {
        let base = self.object.base_mut();
        match namespace {
            Namespace::Image => &mut base.images,
            Namespace::Video => &mut base.videos,
            Namespace::Audio => &mut base.audios,
        }
    }
}
