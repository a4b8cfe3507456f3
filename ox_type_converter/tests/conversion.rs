use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use ox_data_object::{EnumType, EnumValue, ObjectMap, ObjectValue, Scalar, Value, ValueType};
use ox_type_converter::{
    transforms, BeanMeta, ConverterConfig, FailureReason, StaticBeanMetadata, StringConstructors, Transform,
    TransformRegistry, TypeConverter,
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',').ok_or_else(|| format!("'{}' is not 'x,y'", s))?;
        Ok(Point {
            x: x.trim().parse().map_err(|_| format!("bad x in '{}'", s))?,
            y: y.trim().parse().map_err(|_| format!("bad y in '{}'", s))?,
        })
    }
}

fn color() -> ValueType {
    ValueType::enumeration(EnumType::new("Color", ["RED", "GREEN", "BLUE"]))
}

fn person_meta() -> BeanMeta {
    BeanMeta::new("Person")
        .property("name", ValueType::String)
        .property("age", ValueType::Primitive(Scalar::Int))
}

fn converter(config: ConverterConfig) -> TypeConverter {
    let registry = TransformRegistry::builder()
        .register(Transform::from_str_display::<Point>("Point"))
        .register(transforms::datetime_rfc3339())
        .build();
    let beans = StaticBeanMetadata::new()
        .with_bean(person_meta())
        .with_string_constructors(
            "Temperature",
            StringConstructors::new()
                .constructor(|s| Ok(Value::from(format!("ctor {}", s))))
                .value_of(|s| {
                    s.strip_suffix('C')
                        .and_then(|n| n.parse::<f64>().ok())
                        .map(Value::Double)
                        .ok_or_else(|| format!("'{}' is not a temperature", s))
                }),
        )
        .with_string_constructors(
            "Person",
            StringConstructors::new().from_string(|s| {
                let mut bean = ox_data_object::GenericDataObject::new("Person");
                bean.set("name", s);
                bean.set("age", 0);
                Ok(Value::Bean(bean))
            }),
        );
    TypeConverter::new(config, Arc::new(registry), Arc::new(beans))
}

fn lenient() -> TypeConverter {
    converter(ConverterConfig::default())
}

#[test]
fn test_null_to_primitive_is_zero() {
    let c = lenient();
    for (scalar, zero) in [
        (Scalar::Int, Value::Int(0)),
        (Scalar::Long, Value::Long(0)),
        (Scalar::Double, Value::Double(0.0)),
        (Scalar::Boolean, Value::Boolean(false)),
        (Scalar::Char, Value::Char('\0')),
    ] {
        assert_eq!(c.convert(&Value::Null, &ValueType::Primitive(scalar)).unwrap(), zero);
    }
}

#[test]
fn test_null_to_non_primitive_is_null() {
    let c = lenient();
    for target in [
        ValueType::Boxed(Scalar::Int),
        ValueType::String,
        ValueType::list(ValueType::String),
        ValueType::bean("Person"),
        color(),
        ValueType::named("Point"),
    ] {
        assert_eq!(c.convert(&Value::Null, &target).unwrap(), Value::Null);
    }
}

#[test]
fn test_string_to_int() {
    let c = lenient();
    let int = ValueType::Primitive(Scalar::Int);
    assert_eq!(c.convert(&Value::from("123"), &int).unwrap(), Value::Int(123));

    let err = c.convert(&Value::from("abc"), &int).unwrap_err();
    assert_eq!(err.reason, FailureReason::UnparseableNumber { input: "abc".to_string() });
    assert_eq!(err.source_type, "String");
    assert_eq!(err.target_type, "int");
}

#[test]
fn test_number_narrowing() {
    let c = lenient();
    assert_eq!(
        c.convert(&Value::Double(2.75), &ValueType::Boxed(Scalar::Short)).unwrap(),
        Value::Short(2)
    );
    assert_eq!(c.convert(&Value::Int(1), &ValueType::Boxed(Scalar::Boolean)).unwrap(), Value::Boolean(true));
    assert_eq!(c.convert(&Value::from("7"), &ValueType::Number).unwrap(), Value::Int(7));
}

#[test]
fn test_large_double_narrowing() {
    let c = lenient();
    assert_eq!(
        c.convert(&Value::Double(3e9), &ValueType::Primitive(Scalar::Int)).unwrap(),
        Value::Int(i32::MAX)
    );
    assert_eq!(
        c.convert(&Value::Double(1e20), &ValueType::Primitive(Scalar::Int)).unwrap(),
        Value::Int(i32::MAX)
    );
    assert_eq!(
        c.convert(&Value::Double(3e9), &ValueType::Primitive(Scalar::Byte)).unwrap(),
        Value::Byte(-1)
    );
}

#[test]
fn test_transform_round_trip() {
    let c = lenient();
    let point = Value::Object(ObjectValue::new("Point", Point { x: 3, y: -4 }));
    let text = c.convert(&point, &ValueType::String).unwrap();
    assert_eq!(text, Value::from("3,-4"));
    let back = c.convert(&text, &ValueType::named("Point")).unwrap();
    assert_eq!(back, point);
}

#[test]
fn test_transform_failure() {
    let err = lenient()
        .convert(&Value::from("nowhere"), &ValueType::named("Point"))
        .unwrap_err();
    assert_eq!(err.reason.code(), "invocation-failed");
}

#[test]
fn test_datetime_transform_inside_list() {
    let c = lenient();
    let input = Value::List(vec!["2024-01-01T00:00:00Z".into()]);
    let result = c.convert(&input, &ValueType::list(ValueType::named("DateTime"))).unwrap();
    let items = result.as_slice().unwrap();
    assert!(items[0].is_instance_of(&ValueType::named("DateTime")));
}

#[test]
fn test_list_keeps_order() {
    let c = lenient();
    let input = Value::List(vec!["a".into(), "b".into(), "c".into()]);
    let result = c.convert(&input, &ValueType::list(ValueType::String)).unwrap();
    assert_eq!(result, input);
}

#[test]
fn test_map_values_are_converted() {
    let c = lenient();
    let input = Value::Map(ObjectMap::new().append("a", 1_i64).append("b", "2"));
    let result = c.convert(&input, &ValueType::map(ValueType::Boxed(Scalar::Int))).unwrap();
    let map = result.as_map().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("a"), Some(&Value::Int(1)));
    assert_eq!(map.get("b"), Some(&Value::Int(2)));
    let keys: Vec<&String> = map.keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_enum_is_case_sensitive() {
    let c = lenient();
    assert_eq!(
        c.convert(&Value::from("RED"), &color()).unwrap(),
        Value::Enum(EnumValue::new("Color", "RED"))
    );
    let err = c.convert(&Value::from("red"), &color()).unwrap_err();
    assert_eq!(err.reason.code(), "unknown-enum-constant");
}

#[test]
fn test_bean_lenient_and_strict() {
    let input = Value::Map(
        ObjectMap::new()
            .append("name", "Ann")
            .append("age", 30)
            .append("foo", 1),
    );
    let target = ValueType::bean("Person");

    let Value::Bean(bean) = lenient().convert(&input, &target).unwrap() else {
        panic!("expected a bean");
    };
    assert_eq!(bean.get("name"), Some(&Value::from("Ann")));
    assert_eq!(bean.get("age"), Some(&Value::Int(30)));
    assert!(!bean.has_attribute("foo"));

    let err = converter(ConverterConfig::strict()).convert(&input, &target).unwrap_err();
    assert_eq!(err.reason, FailureReason::UnassignableProperty { property: "foo".to_string() });
}

#[test]
fn test_string_target_renders_collections_as_json() {
    let c = lenient();
    let list = Value::Array(vec![1.into(), "x".into(), true.into()]);
    assert_eq!(c.convert(&list, &ValueType::String).unwrap(), Value::from(r#"[1,"x",true]"#));
    assert_eq!(c.convert(&Value::Double(1.5), &ValueType::String).unwrap(), Value::from("1.5"));
    assert_eq!(
        c.convert(&Value::Enum(EnumValue::new("Color", "RED")), &ValueType::String).unwrap(),
        Value::from("RED")
    );
}

#[test]
fn test_string_constructor_precedence() {
    let c = lenient();
    assert_eq!(
        c.convert(&Value::from("21.5C"), &ValueType::named("Temperature")).unwrap(),
        Value::Double(21.5)
    );
    let err = c.convert(&Value::from("warm"), &ValueType::named("Temperature")).unwrap_err();
    assert_eq!(err.reason.code(), "invocation-failed");
}

#[test]
fn test_bean_from_string_uses_string_factory() {
    let Value::Bean(bean) = lenient().convert(&Value::from("Bob"), &ValueType::bean("Person")).unwrap() else {
        panic!("expected a bean");
    };
    assert_eq!(bean.get("name"), Some(&Value::from("Bob")));
}

#[test]
fn test_missing_string_factory() {
    let err = lenient()
        .convert(&Value::from("x"), &ValueType::named("Unknown"))
        .unwrap_err();
    assert_eq!(err.reason.code(), "missing-constructor");
}

#[test]
fn test_conversion_is_deterministic() {
    let c = lenient();
    let input = Value::List(vec!["1".into(), "2".into()]);
    let target = ValueType::array(ValueType::Primitive(Scalar::Long));
    let first = c.convert(&input, &target);
    for _ in 0..10 {
        assert_eq!(c.convert(&input, &target), first);
    }
}

#[test]
fn test_converter_is_shareable_across_threads() {
    let c = Arc::new(lenient());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let c = Arc::clone(&c);
            std::thread::spawn(move || c.convert_to::<i64>(&Value::from(i.to_string())).unwrap())
        })
        .collect();
    let results: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![0, 1, 2, 3]);
}
