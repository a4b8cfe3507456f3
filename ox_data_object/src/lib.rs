//! ox_data_object - Dynamic values and type descriptors
//!
//! The value model every conversion in ox_marshall operates on: scalars,
//! strings, ordered maps, lists, arrays, enum constants, bean instances and
//! opaque user objects, plus `ValueType` describing conversion targets.

pub mod generic_data_object;
pub mod object_map;
pub mod value;
pub mod value_type;

pub use generic_data_object::GenericDataObject;
pub use object_map::ObjectMap;
pub use value::{EnumValue, ObjectValue, Value};
pub use value_type::{EnumType, Scalar, ValueType};
