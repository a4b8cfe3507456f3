use serde::ser::{Serialize, Serializer};

use crate::object_map::ObjectMap;
use crate::value::Value;

/// A bean instance: a named type holding its properties as attributes.
///
/// Member types also keep a reference to the enclosing instance they were
/// constructed with.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericDataObject {
    type_name: String,
    attributes: ObjectMap,
    outer: Option<Box<Value>>,
}

impl GenericDataObject {
    pub fn new(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            attributes: ObjectMap::new(),
            outer: None,
        }
    }

    /// Create an instance of a member type bound to its enclosing instance.
    pub fn with_outer(type_name: &str, outer: Value) -> Self {
        Self {
            outer: Some(Box::new(outer)),
            ..Self::new(type_name)
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn outer(&self) -> Option<&Value> {
        self.outer.as_deref()
    }

    pub fn get(&self, identifier: &str) -> Option<&Value> {
        self.attributes.get(identifier)
    }

    /// Set an attribute.
    /// Returns the old value if an attribute was replaced, or `None` otherwise.
    pub fn set<V: Into<Value>>(&mut self, identifier: &str, value: V) -> Option<Value> {
        self.attributes.insert(identifier, value)
    }

    pub fn has_attribute(&self, identifier: &str) -> bool {
        self.attributes.contains_key(identifier)
    }

    pub fn remove_attribute(&mut self, identifier: &str) -> Option<Value> {
        self.attributes.remove(identifier)
    }

    pub fn get_attribute_names(&self) -> Vec<&String> {
        self.attributes.keys().collect()
    }

    pub fn attributes(&self) -> &ObjectMap {
        &self.attributes
    }

    pub fn into_attributes(self) -> ObjectMap {
        self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }
}

// Serialized as its attributes; the enclosing instance is not part of the bean's state.
impl Serialize for GenericDataObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.attributes.serialize(serializer)
    }
}
