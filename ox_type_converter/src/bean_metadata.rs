//! Bean construction contract.
//!
//! The converter never inspects types itself. It asks a `BeanMetadataProvider`
//! how to construct a bean, which properties it can write, and which string
//! factories a type exposes.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ox_data_object::{GenericDataObject, Value, ValueType};

use crate::error::FailureReason;

/// Assigns a converted value to a property. Errors are reported as plain messages.
pub type PropertySetter = Arc<dyn Fn(&mut GenericDataObject, Value) -> Result<(), String> + Send + Sync>;

/// Builds a value from its string form.
pub type StringFactory = Arc<dyn Fn(&str) -> Result<Value, String> + Send + Sync>;

/// How a bean type is instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeanConstructor {
    /// No-argument constructor.
    Default,
    /// Member type; construction needs the enclosing instance.
    Member,
    /// Abstract or otherwise not instantiable.
    NotConstructible,
}

pub struct BeanProperty {
    name: String,
    value_type: ValueType,
    setter: Option<PropertySetter>,
    read_only: bool,
}

impl BeanProperty {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    pub fn is_writable(&self) -> bool {
        !self.read_only
    }

    /// Write `value` through the custom setter, or store it as an attribute.
    pub fn assign(&self, bean: &mut GenericDataObject, value: Value) -> Result<(), String> {
        match &self.setter {
            Some(setter) => setter(bean, value),
            None => {
                bean.set(&self.name, value);
                Ok(())
            }
        }
    }
}

impl fmt::Debug for BeanProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanProperty")
            .field("name", &self.name)
            .field("value_type", &self.value_type)
            .field("read_only", &self.read_only)
            .field("custom_setter", &self.setter.is_some())
            .finish()
    }
}

/// Construction and property metadata for one bean type.
#[derive(Debug)]
pub struct BeanMeta {
    type_name: String,
    constructor: BeanConstructor,
    properties: Vec<BeanProperty>,
}

impl BeanMeta {
    pub fn new(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            constructor: BeanConstructor::Default,
            properties: Vec::new(),
        }
    }

    pub fn constructor(mut self, constructor: BeanConstructor) -> Self {
        self.constructor = constructor;
        self
    }

    pub fn property(mut self, name: &str, value_type: ValueType) -> Self {
        self.push_property(name, value_type, None, false);
        self
    }

    pub fn property_with_setter<F>(mut self, name: &str, value_type: ValueType, setter: F) -> Self
    where
        F: Fn(&mut GenericDataObject, Value) -> Result<(), String> + Send + Sync + 'static,
    {
        self.push_property(name, value_type, Some(Arc::new(setter)), false);
        self
    }

    pub fn read_only_property(mut self, name: &str, value_type: ValueType) -> Self {
        self.push_property(name, value_type, None, true);
        self
    }

    fn push_property(&mut self, name: &str, value_type: ValueType, setter: Option<PropertySetter>, read_only: bool) {
        self.properties.retain(|p| p.name != name);
        self.properties.push(BeanProperty {
            name: name.to_string(),
            value_type,
            setter,
            read_only,
        });
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn constructor_kind(&self) -> BeanConstructor {
        self.constructor
    }

    pub fn get_property(&self, name: &str) -> Option<&BeanProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn properties(&self) -> &[BeanProperty] {
        &self.properties
    }

    /// Construct a new instance with every property at its type's null value.
    pub fn instantiate(&self, outer: Option<&Value>) -> Result<GenericDataObject, FailureReason> {
        let mut bean = match self.constructor {
            BeanConstructor::Default => GenericDataObject::new(&self.type_name),
            BeanConstructor::Member => match outer {
                Some(outer) if !outer.is_null() => GenericDataObject::with_outer(&self.type_name, outer.clone()),
                _ => {
                    return Err(FailureReason::MissingConstructor {
                        detail: format!("'{}' is a member type and needs an enclosing instance", self.type_name),
                    })
                }
            },
            BeanConstructor::NotConstructible => {
                return Err(FailureReason::MissingConstructor {
                    detail: format!("'{}' has no usable constructor", self.type_name),
                })
            }
        };
        for property in &self.properties {
            bean.set(&property.name, property.value_type.null_value());
        }
        Ok(bean)
    }
}

/// The string factories a type exposes, tried in the order
/// `from_string`, `value_of`, single-string constructor.
#[derive(Default)]
pub struct StringConstructors {
    from_string: Option<StringFactory>,
    value_of: Option<StringFactory>,
    constructor: Option<StringFactory>,
}

impl StringConstructors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_string<F>(mut self, factory: F) -> Self
    where
        F: Fn(&str) -> Result<Value, String> + Send + Sync + 'static,
    {
        self.from_string = Some(Arc::new(factory));
        self
    }

    pub fn value_of<F>(mut self, factory: F) -> Self
    where
        F: Fn(&str) -> Result<Value, String> + Send + Sync + 'static,
    {
        self.value_of = Some(Arc::new(factory));
        self
    }

    pub fn constructor<F>(mut self, factory: F) -> Self
    where
        F: Fn(&str) -> Result<Value, String> + Send + Sync + 'static,
    {
        self.constructor = Some(Arc::new(factory));
        self
    }

    /// The first available factory and its name.
    pub fn resolve(&self) -> Option<(&'static str, &StringFactory)> {
        self.from_string
            .as_ref()
            .map(|f| ("fromString", f))
            .or_else(|| self.value_of.as_ref().map(|f| ("valueOf", f)))
            .or_else(|| self.constructor.as_ref().map(|f| ("constructor", f)))
    }
}

impl fmt::Debug for StringConstructors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringConstructors")
            .field("from_string", &self.from_string.is_some())
            .field("value_of", &self.value_of.is_some())
            .field("constructor", &self.constructor.is_some())
            .finish()
    }
}

/// Supplies construction metadata by type name.
pub trait BeanMetadataProvider: Send + Sync {
    fn bean_meta(&self, type_name: &str) -> Option<Arc<BeanMeta>>;

    fn string_constructors(&self, type_name: &str) -> Option<Arc<StringConstructors>>;
}

/// Metadata registered up front and never changed afterwards.
#[derive(Debug, Default)]
pub struct StaticBeanMetadata {
    beans: HashMap<String, Arc<BeanMeta>>,
    constructors: HashMap<String, Arc<StringConstructors>>,
}

impl StaticBeanMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bean(mut self, meta: BeanMeta) -> Self {
        self.beans.insert(meta.type_name.clone(), Arc::new(meta));
        self
    }

    pub fn with_string_constructors(mut self, type_name: &str, constructors: StringConstructors) -> Self {
        self.constructors.insert(type_name.to_string(), Arc::new(constructors));
        self
    }
}

impl BeanMetadataProvider for StaticBeanMetadata {
    fn bean_meta(&self, type_name: &str) -> Option<Arc<BeanMeta>> {
        self.beans.get(type_name).cloned()
    }

    fn string_constructors(&self, type_name: &str) -> Option<Arc<StringConstructors>> {
        self.constructors.get(type_name).cloned()
    }
}
