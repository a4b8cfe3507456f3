pub mod object_utils;

pub use object_utils::{convert_to_member_type, convert_to_type, equals, is_empty};
pub use ox_data_object::{EnumType, EnumValue, GenericDataObject, ObjectMap, ObjectValue, Scalar, Value, ValueType};
pub use ox_type_converter::{
    transforms, BeanConstructor, BeanMeta, BeanMetadataProvider, ConversionError, ConverterConfig, FailureReason,
    FromValue, StaticBeanMetadata, StringConstructors, Transform, TransformRegistry, TypeConverter,
};
