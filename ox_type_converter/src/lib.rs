//! ox_type_converter - A rule-based value conversion engine
//!
//! Converts dynamic `Value`s to requested `ValueType`s. Conversions consult
//! registered bidirectional transforms first, then fall back to built-in rules
//! for numbers, maps, collections, enums, beans and strings.

pub mod bean_metadata;
pub mod config;
pub mod converters;
pub mod error;
pub mod registry;
pub mod transforms;

pub use bean_metadata::{
    BeanConstructor, BeanMeta, BeanMetadataProvider, BeanProperty, StaticBeanMetadata, StringConstructors,
};
pub use config::ConverterConfig;
pub use converters::{FromValue, TypeConverter};
pub use error::{ConversionError, FailureReason, Location};
pub use registry::{Transform, TransformRegistry, TransformRegistryBuilder};
