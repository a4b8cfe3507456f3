use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::trace;
use ox_data_object::{ObjectValue, Value, ValueType};

/// One direction of a transform. Errors are reported as plain messages.
pub type TransformFn = Arc<dyn Fn(&Value) -> Result<Value, String> + Send + Sync>;

/// A bidirectional transform between a normal type and its transformed form,
/// e.g. a domain object and its string representation.
pub struct Transform {
    normal_type: ValueType,
    transformed_type: ValueType,
    to_transformed: TransformFn,
    from_transformed: TransformFn,
}

impl Transform {
    pub fn new<F, G>(normal_type: ValueType, transformed_type: ValueType, to_transformed: F, from_transformed: G) -> Self
    where
        F: Fn(&Value) -> Result<Value, String> + Send + Sync + 'static,
        G: Fn(&Value) -> Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            normal_type,
            transformed_type,
            to_transformed: Arc::new(to_transformed),
            from_transformed: Arc::new(from_transformed),
        }
    }

    /// Transform between `Named(type_name)` objects wrapping `T` and strings,
    /// using `T`'s `Display` and `FromStr`.
    pub fn from_str_display<T>(type_name: &str) -> Self
    where
        T: FromStr + fmt::Display + PartialEq + Any + Send + Sync,
        T::Err: fmt::Display,
    {
        let name = type_name.to_string();
        Self::new(
            ValueType::named(type_name),
            ValueType::String,
            move |value| match value {
                Value::Object(o) => o
                    .downcast_ref::<T>()
                    .map(|t| Value::String(t.to_string()))
                    .ok_or_else(|| format!("Object of type '{}' does not wrap the expected Rust type", o.type_name())),
                other => Err(format!("Expected an object, found '{}'", other.type_name())),
            },
            move |value| match value {
                Value::String(s) => s
                    .parse::<T>()
                    .map(|t| Value::Object(ObjectValue::new(&name, t)))
                    .map_err(|e| format!("Failed to parse '{}': {}", s, e)),
                other => Err(format!("Expected a string, found '{}'", other.type_name())),
            },
        )
    }

    pub fn normal_type(&self) -> &ValueType {
        &self.normal_type
    }

    pub fn transformed_type(&self) -> &ValueType {
        &self.transformed_type
    }

    pub fn to_transformed(&self, value: &Value) -> Result<Value, String> {
        (self.to_transformed)(value)
    }

    pub fn from_transformed(&self, value: &Value) -> Result<Value, String> {
        (self.from_transformed)(value)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("normal_type", &self.normal_type)
            .field("transformed_type", &self.transformed_type)
            .finish_non_exhaustive()
    }
}

/// Collects transforms at configuration time. Registering a second transform
/// for the same normal type replaces the first.
#[derive(Default)]
pub struct TransformRegistryBuilder {
    transforms: Vec<Arc<Transform>>,
}

impl TransformRegistryBuilder {
    pub fn register(mut self, transform: Transform) -> Self {
        self.transforms.retain(|t| t.normal_type != transform.normal_type);
        self.transforms.push(Arc::new(transform));
        self
    }

    pub fn build(self) -> TransformRegistry {
        let mut by_normal = HashMap::new();
        let mut by_transformed: HashMap<ValueType, Vec<Arc<Transform>>> = HashMap::new();
        for transform in &self.transforms {
            by_normal.insert(transform.normal_type.clone(), Arc::clone(transform));
            by_transformed
                .entry(transform.transformed_type.clone())
                .or_default()
                .push(Arc::clone(transform));
        }
        TransformRegistry {
            transforms: self.transforms,
            by_normal,
            by_transformed,
        }
    }
}

/// Immutable set of transforms, looked up by either side of the pair.
#[derive(Debug, Default)]
pub struct TransformRegistry {
    transforms: Vec<Arc<Transform>>,
    by_normal: HashMap<ValueType, Arc<Transform>>,
    by_transformed: HashMap<ValueType, Vec<Arc<Transform>>>,
}

impl TransformRegistry {
    pub fn builder() -> TransformRegistryBuilder {
        TransformRegistryBuilder::default()
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn find_by_normal(&self, normal_type: &ValueType) -> Option<&Transform> {
        self.by_normal.get(normal_type).map(|t| &**t)
    }

    /// Transforms producing `transformed_type`, in registration order.
    pub fn find_by_transformed<'a>(&'a self, transformed_type: &ValueType) -> impl Iterator<Item = &'a Transform> + 'a {
        self.by_transformed
            .get(transformed_type)
            .into_iter()
            .flatten()
            .map(|t| &**t)
    }

    /// The transform that turns `value` into `target`, if `target` is the
    /// transformed side of a transform whose normal type `value` belongs to.
    pub fn find_reverse(&self, target: &ValueType, value: &Value) -> Option<&Transform> {
        let found = self
            .find_by_transformed(target)
            .find(|t| value.is_instance_of(&t.normal_type));
        if let Some(t) = found {
            trace!("Found transform '{}' -> '{}' for '{}'", t.normal_type, t.transformed_type, value.type_name());
        }
        found
    }

    pub fn has_transform(&self, normal_type: &ValueType, transformed_type: &ValueType) -> bool {
        self.find_by_normal(normal_type)
            .is_some_and(|t| &t.transformed_type == transformed_type)
    }

    /// All registered (normal, transformed) pairs as display names.
    pub fn get_available_transforms(&self) -> Vec<(String, String)> {
        self.transforms
            .iter()
            .map(|t| (t.normal_type.to_string(), t.transformed_type.to_string()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}
